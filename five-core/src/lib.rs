//! five-core: dice, category scoring, score sheet, and the turn-state engine.

pub mod category;
pub mod config;
pub mod game;
pub mod scoring;
pub mod sheet;

pub use category::{Category, NUM_CATS};
pub use config::{ConfigError, DiceStyle, Settings};
pub use game::{Game, GameError, MAX_ROLLS};
pub use scoring::{category_score, satisfiable, scores_for_hand};
pub use sheet::ScoreSheet;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod scoring_tests;
#[cfg(test)]
mod sheet_tests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
