//! Turn-state engine: roll / hold / place transitions for one solitaire game.
//!
//! This module is the single place that mutates game state via the rules.

use crate::category::Category;
use crate::scoring::category_score;
use crate::sheet::{ScoreSheet, SheetError};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use thiserror::Error;

/// Rolls allowed per turn.
pub const MAX_ROLLS: u8 = 3;

/// Face value of a die that has not been rolled this turn.
pub const UNROLLED: u8 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no rolls left this turn")]
    NoRollsLeft,
    #[error("hand has not been rolled this turn")]
    HandNotRolled,
    #[error("game is over")]
    GameOver,
    #[error("die slot {slot} out of range 0..5")]
    InvalidSlot { slot: usize },
    #[error("category {0:?} already scored")]
    AlreadyScored(Category),
}

impl From<SheetError> for GameError {
    fn from(e: SheetError) -> Self {
        match e {
            SheetError::AlreadyScored(c) => GameError::AlreadyScored(c),
        }
    }
}

/// One solitaire game: a 5-dice hand, hold state, roll count, and the sheet.
///
/// Die slot k (0..5) is the die's fixed identity; bit k of the hold mask marks
/// it held. Faces are 1..=6 once rolled, [`UNROLLED`] at the start of a turn.
#[derive(Debug, Clone)]
pub struct Game {
    hand: [u8; 5],
    hold_mask: u8,
    rolls_used: u8,
    sheet: ScoreSheet,
    rng: ChaCha8Rng,
}

impl Game {
    /// Start a game with a deterministic dice stream.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Start a game with OS-entropy dice.
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            hand: [UNROLLED; 5],
            hold_mask: 0,
            rolls_used: 0,
            sheet: ScoreSheet::new(),
            rng,
        }
    }

    #[inline]
    pub fn hand(&self) -> [u8; 5] {
        self.hand
    }

    /// True once the first roll of the turn has happened.
    #[inline]
    pub fn hand_rolled(&self) -> bool {
        self.rolls_used > 0
    }

    #[inline]
    pub fn rolls_used(&self) -> u8 {
        self.rolls_used
    }

    #[inline]
    pub fn rolls_left(&self) -> u8 {
        MAX_ROLLS - self.rolls_used
    }

    #[inline]
    pub fn hold_mask(&self) -> u8 {
        self.hold_mask
    }

    #[inline]
    pub fn is_held(&self, slot: usize) -> bool {
        slot < 5 && (self.hold_mask >> slot) & 1 != 0
    }

    #[inline]
    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    /// Game over iff all thirteen categories are filled.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.sheet.is_complete()
    }

    /// Reroll every non-held die. The first roll of a turn rolls all five.
    ///
    /// Returns the slots that were rolled (as a bitmask).
    pub fn roll(&mut self) -> Result<u8, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.rolls_used >= MAX_ROLLS {
            return Err(GameError::NoRollsLeft);
        }

        let rolled = !self.hold_mask & 0b1_1111;
        for slot in 0..5 {
            if (rolled >> slot) & 1 != 0 {
                self.hand[slot] = self.rng.gen_range(1..=6);
            }
        }
        self.rolls_used += 1;
        Ok(rolled)
    }

    /// Flip the hold state of one die. Only a rolled die can be held.
    pub fn toggle_hold(&mut self, slot: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if slot >= 5 {
            return Err(GameError::InvalidSlot { slot });
        }
        if !self.hand_rolled() {
            return Err(GameError::HandNotRolled);
        }
        self.hold_mask ^= 1 << slot;
        Ok(())
    }

    /// Score the current hand into `cat` and start the next turn.
    ///
    /// Returns the awarded score. Placing a zero is allowed; placing before
    /// the first roll of the turn is not.
    pub fn place(&mut self, cat: Category) -> Result<i32, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.hand_rolled() {
            return Err(GameError::HandNotRolled);
        }

        let score = category_score(self.hand, cat);
        self.sheet.place(cat, score)?;
        self.start_turn();
        Ok(score)
    }

    /// Fresh sheet and fresh turn. The dice stream continues.
    pub fn reset(&mut self) {
        self.sheet = ScoreSheet::new();
        self.start_turn();
    }

    fn start_turn(&mut self) {
        self.hand = [UNROLLED; 5];
        self.hold_mask = 0;
        self.rolls_used = 0;
    }
}
