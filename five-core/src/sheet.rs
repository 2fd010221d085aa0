//! The score sheet: one awarded score per category, plus derived totals.

use crate::category::{Category, ALL_CATEGORIES, NUM_CATS};
use crate::scoring::{UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetError {
    #[error("category {0:?} already scored")]
    AlreadyScored(Category),
}

/// Awarded scores by category index; `None` = not yet played.
///
/// Invariant: each category is scored at most once per game ([`ScoreSheet::place`]
/// is the only writer and rejects refills).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSheet {
    scores: [Option<i32>; NUM_CATS],
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Awarded score for a category, if played.
    #[inline]
    pub fn get(&self, cat: Category) -> Option<i32> {
        self.scores[cat.index()]
    }

    #[inline]
    pub fn is_filled(&self, cat: Category) -> bool {
        self.get(cat).is_some()
    }

    /// Record an awarded score. Each category can be written once.
    pub fn place(&mut self, cat: Category, score: i32) -> Result<(), SheetError> {
        let slot = &mut self.scores[cat.index()];
        if slot.is_some() {
            return Err(SheetError::AlreadyScored(cat));
        }
        *slot = Some(score);
        Ok(())
    }

    /// Number of categories played so far.
    pub fn filled_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// Game over iff all thirteen categories are filled.
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(|s| s.is_some())
    }

    /// Sum of the upper section (Ones..Sixes), bonus excluded.
    pub fn upper_subtotal(&self) -> i32 {
        ALL_CATEGORIES
            .iter()
            .filter(|c| c.is_upper())
            .filter_map(|c| self.get(*c))
            .sum()
    }

    /// +35 once the upper subtotal reaches 63, else 0.
    pub fn upper_bonus(&self) -> i32 {
        if self.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    pub fn has_bonus(&self) -> bool {
        self.upper_bonus() > 0
    }

    /// Sum of the lower section (ThreeOfAKind..Chance).
    pub fn lower_total(&self) -> i32 {
        ALL_CATEGORIES
            .iter()
            .filter(|c| !c.is_upper())
            .filter_map(|c| self.get(*c))
            .sum()
    }

    /// Grand total: upper subtotal + bonus + lower total.
    pub fn grand_total(&self) -> i32 {
        self.upper_subtotal() + self.upper_bonus() + self.lower_total()
    }
}
