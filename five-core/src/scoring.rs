//! Raw category scoring for a 5-dice hand (standard Yahtzee rules).

use crate::category::{Category, NUM_CATS};

/// Full-house award.
pub const FULL_HOUSE_SCORE: i32 = 25;
/// Small-straight award (any 4-run).
pub const SMALL_STRAIGHT_SCORE: i32 = 30;
/// Large-straight award (5-run).
pub const LARGE_STRAIGHT_SCORE: i32 = 40;
/// Yahtzee award (five of a kind).
pub const YAHTZEE_SCORE: i32 = 50;

/// Upper-section bonus, granted once the upper subtotal reaches the threshold.
pub const UPPER_BONUS: i32 = 35;
pub const UPPER_BONUS_THRESHOLD: i32 = 63;

/// Compute all raw category scores for a 5-dice hand.
///
/// - Input dice must be in 1..=6. Order does not matter.
/// - Returned scores are **raw** category scores; the upper bonus is *not*
///   applied here (it is derived from the sheet).
pub fn scores_for_hand(hand: [u8; 5]) -> [i32; NUM_CATS] {
    debug_assert!(hand.iter().all(|d| (1..=6).contains(d)));

    let mut counts = [0u8; 6];
    for &d in &hand {
        counts[(d - 1) as usize] += 1;
    }
    let sum: i32 = hand.iter().map(|&d| d as i32).sum();

    let mut s = [0i32; NUM_CATS];

    // Upper section
    for f in 0..6 {
        s[f] = counts[f] as i32 * (f as i32 + 1);
    }

    // Three / four of a kind score the whole hand.
    if counts.iter().any(|&c| c >= 3) {
        s[Category::ThreeOfAKind.index()] = sum;
    }
    if counts.iter().any(|&c| c >= 4) {
        s[Category::FourOfAKind.index()] = sum;
    }

    // Full house (exactly 3 + 2; five of a kind is not a full house)
    let has3 = counts.iter().any(|&c| c == 3);
    let has2 = counts.iter().any(|&c| c == 2);
    if has3 && has2 {
        s[Category::FullHouse.index()] = FULL_HOUSE_SCORE;
    }

    // Straights over distinct faces.
    if has_run(&counts, 4) {
        s[Category::SmallStraight.index()] = SMALL_STRAIGHT_SCORE;
    }
    if has_run(&counts, 5) {
        s[Category::LargeStraight.index()] = LARGE_STRAIGHT_SCORE;
    }

    if counts.iter().any(|&c| c == 5) {
        s[Category::Yahtzee.index()] = YAHTZEE_SCORE;
    }

    s[Category::Chance.index()] = sum;

    s
}

/// Raw score of a single category for the given hand.
pub fn category_score(hand: [u8; 5], cat: Category) -> i32 {
    scores_for_hand(hand)[cat.index()]
}

/// Per-category satisfiability: true iff the raw score is > 0.
///
/// This drives UI highlighting only; placing a zero is always allowed once the
/// hand is rolled.
pub fn satisfiable(hand: [u8; 5]) -> [bool; NUM_CATS] {
    let s = scores_for_hand(hand);
    let mut out = [false; NUM_CATS];
    for (o, v) in out.iter_mut().zip(s.iter()) {
        *o = *v > 0;
    }
    out
}

/// True if the distinct faces contain a run of `len` consecutive values.
fn has_run(counts: &[u8; 6], len: usize) -> bool {
    let mut run = 0usize;
    for &c in counts {
        if c > 0 {
            run += 1;
            if run >= len {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
