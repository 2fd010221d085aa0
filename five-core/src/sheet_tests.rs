use crate::category::{Category, ALL_CATEGORIES};
use crate::scoring::UPPER_BONUS;
use crate::sheet::{ScoreSheet, SheetError};

#[test]
fn place_once_invariant() {
    let mut sheet = ScoreSheet::new();
    sheet.place(Category::Fives, 15).unwrap();
    assert_eq!(sheet.get(Category::Fives), Some(15));
    let err = sheet.place(Category::Fives, 20).unwrap_err();
    assert_eq!(err, SheetError::AlreadyScored(Category::Fives));
    // First write survives.
    assert_eq!(sheet.get(Category::Fives), Some(15));
}

#[test]
fn zero_counts_as_played() {
    let mut sheet = ScoreSheet::new();
    sheet.place(Category::Yahtzee, 0).unwrap();
    assert!(sheet.is_filled(Category::Yahtzee));
    assert!(sheet.place(Category::Yahtzee, 50).is_err());
}

#[test]
fn bonus_triggers_at_63() {
    let mut sheet = ScoreSheet::new();
    // Three of each upper face: 3+6+9+12+15+18 = 63.
    for cat in ALL_CATEGORIES.iter().filter(|c| c.is_upper()) {
        let face = cat.upper_face().unwrap() as i32;
        sheet.place(*cat, 3 * face).unwrap();
    }
    assert_eq!(sheet.upper_subtotal(), 63);
    assert_eq!(sheet.upper_bonus(), UPPER_BONUS);
    assert!(sheet.has_bonus());
    assert_eq!(sheet.grand_total(), 63 + UPPER_BONUS);
}

#[test]
fn bonus_not_granted_below_63() {
    let mut sheet = ScoreSheet::new();
    for cat in ALL_CATEGORIES.iter().filter(|c| c.is_upper()) {
        let face = cat.upper_face().unwrap() as i32;
        sheet.place(*cat, 2 * face).unwrap();
    }
    assert_eq!(sheet.upper_subtotal(), 42);
    assert_eq!(sheet.upper_bonus(), 0);
    assert!(!sheet.has_bonus());
}

#[test]
fn totals_split_upper_and_lower() {
    let mut sheet = ScoreSheet::new();
    sheet.place(Category::Sixes, 18).unwrap();
    sheet.place(Category::FullHouse, 25).unwrap();
    sheet.place(Category::Chance, 21).unwrap();
    assert_eq!(sheet.upper_subtotal(), 18);
    assert_eq!(sheet.lower_total(), 46);
    assert_eq!(sheet.grand_total(), 64);
}

#[test]
fn complete_after_all_thirteen() {
    let mut sheet = ScoreSheet::new();
    for (i, cat) in ALL_CATEGORIES.iter().enumerate() {
        assert!(!sheet.is_complete());
        assert_eq!(sheet.filled_count(), i);
        sheet.place(*cat, 1).unwrap();
    }
    assert!(sheet.is_complete());
    assert_eq!(sheet.filled_count(), 13);
}
