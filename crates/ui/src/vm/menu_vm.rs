use services::DrillService;

/// One button in the level grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelRowVm {
    pub index: u32,
    pub title: String,
    pub word_count: usize,
    pub unlocked: bool,
}

/// Everything the menu renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuVm {
    pub unlocked_max: u32,
    pub levels: Vec<LevelRowVm>,
}

pub async fn load_menu(drill: &DrillService) -> MenuVm {
    let (record, summaries) = drill.level_summaries().await;
    MenuVm {
        unlocked_max: record.unlocked_max().value(),
        levels: summaries
            .into_iter()
            .map(|summary| LevelRowVm {
                index: summary.index.value(),
                title: summary.title,
                word_count: summary.word_count,
                unlocked: summary.unlocked,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{Clock, ProgressService, SpeechDispatcher};
    use shabda_core::{Catalog, fixed_now};
    use std::sync::Arc;
    use storage::repository::InMemoryRepository;

    fn drill(repo: InMemoryRepository) -> DrillService {
        let catalog = Catalog::builtin();
        let progress = ProgressService::new(
            Clock::fixed(fixed_now()),
            Arc::new(repo),
            catalog.total_levels(),
        );
        DrillService::new(catalog, progress, SpeechDispatcher::disabled())
    }

    #[tokio::test]
    async fn first_run_menu_unlocks_only_level_zero() {
        let vm = load_menu(&drill(InMemoryRepository::new())).await;
        assert_eq!(vm.unlocked_max, 0);
        assert_eq!(vm.levels.len(), 11);
        assert!(vm.levels[0].unlocked);
        assert!(vm.levels[1..].iter().all(|row| !row.unlocked));
        assert_eq!(vm.levels[0].title, "Basics I");
        assert_eq!(vm.levels[0].word_count, 50);
    }
}
