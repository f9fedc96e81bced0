use shabda_core::fixed_now;
use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_the_progress_value() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("unlocked_max").await.unwrap(), None);

    repo.set("unlocked_max", "2", fixed_now()).await.unwrap();
    assert_eq!(
        repo.get("unlocked_max").await.unwrap(),
        Some("2".to_owned())
    );
}

#[tokio::test]
async fn sqlite_upsert_overwrites_in_place() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    for value in ["0", "1", "2"] {
        repo.set("unlocked_max", value, fixed_now()).await.unwrap();
    }

    assert_eq!(
        repo.get("unlocked_max").await.unwrap(),
        Some("2".to_owned())
    );
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("unlocked_max", "5", fixed_now()).await.unwrap();

    // A second run against the live schema must not disturb data.
    repo.migrate().await.expect("second migrate");
    assert_eq!(
        repo.get("unlocked_max").await.unwrap(),
        Some("5".to_owned())
    );
}
