use rand::seq::SliceRandom;

use shabda_core::model::Level;
use shabda_core::session::QuizSession;

/// Builds the play order for a level and constructs the session over it.
///
/// The order is the level's defensively deduplicated item list under a
/// uniform random permutation (Fisher–Yates), fixed for the lifetime of
/// the session; a retry replays the same order.
#[must_use]
pub fn build_session(level: &Level) -> QuizSession {
    let mut order = level.playable_items();
    order.shuffle(&mut rand::rng());
    QuizSession::new(order)
}
