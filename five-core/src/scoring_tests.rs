use crate::category::{Category, ALL_CATEGORIES, NUM_CATS};
use crate::scoring::{
    category_score, satisfiable, scores_for_hand, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE,
    SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};

#[test]
fn upper_section_counts_faces() {
    let s = scores_for_hand([1, 1, 3, 3, 3]);
    assert_eq!(s[Category::Ones.index()], 2);
    assert_eq!(s[Category::Twos.index()], 0);
    assert_eq!(s[Category::Threes.index()], 9);
    assert_eq!(s[Category::Sixes.index()], 0);
}

#[test]
fn three_and_four_of_a_kind_score_whole_hand() {
    assert_eq!(category_score([4, 4, 4, 2, 5], Category::ThreeOfAKind), 19);
    assert_eq!(category_score([4, 4, 4, 2, 5], Category::FourOfAKind), 0);
    assert_eq!(category_score([6, 6, 6, 6, 1], Category::ThreeOfAKind), 25);
    assert_eq!(category_score([6, 6, 6, 6, 1], Category::FourOfAKind), 25);
    assert_eq!(category_score([1, 2, 3, 4, 5], Category::ThreeOfAKind), 0);
}

#[test]
fn full_house_is_exactly_three_plus_two() {
    assert_eq!(
        category_score([2, 2, 3, 3, 3], Category::FullHouse),
        FULL_HOUSE_SCORE
    );
    // Four of a kind is not a full house.
    assert_eq!(category_score([3, 3, 3, 3, 2], Category::FullHouse), 0);
    // Neither is five of a kind.
    assert_eq!(category_score([5, 5, 5, 5, 5], Category::FullHouse), 0);
}

#[test]
fn small_straight_is_any_four_run() {
    for hand in [[1, 2, 3, 4, 6], [2, 3, 4, 5, 5], [3, 4, 5, 6, 6], [4, 2, 3, 1, 1]] {
        assert_eq!(
            category_score(hand, Category::SmallStraight),
            SMALL_STRAIGHT_SCORE,
            "hand {hand:?}"
        );
    }
    assert_eq!(category_score([1, 2, 3, 5, 6], Category::SmallStraight), 0);
}

#[test]
fn large_straight_is_a_five_run() {
    assert_eq!(
        category_score([1, 2, 3, 4, 5], Category::LargeStraight),
        LARGE_STRAIGHT_SCORE
    );
    assert_eq!(
        category_score([6, 4, 2, 5, 3], Category::LargeStraight),
        LARGE_STRAIGHT_SCORE
    );
    assert_eq!(category_score([1, 2, 3, 4, 4], Category::LargeStraight), 0);
}

#[test]
fn large_straight_also_scores_small() {
    let s = scores_for_hand([2, 3, 4, 5, 6]);
    assert_eq!(s[Category::SmallStraight.index()], SMALL_STRAIGHT_SCORE);
    assert_eq!(s[Category::LargeStraight.index()], LARGE_STRAIGHT_SCORE);
}

#[test]
fn yahtzee_and_chance() {
    let s = scores_for_hand([6, 6, 6, 6, 6]);
    assert_eq!(s[Category::Yahtzee.index()], YAHTZEE_SCORE);
    assert_eq!(s[Category::Chance.index()], 30);
    assert_eq!(s[Category::FourOfAKind.index()], 30);
    assert_eq!(category_score([1, 2, 3, 4, 5], Category::Yahtzee), 0);
}

#[test]
fn satisfiable_tracks_positive_scores() {
    let sat = satisfiable([2, 2, 3, 3, 3]);
    assert!(sat[Category::Twos.index()]);
    assert!(sat[Category::Threes.index()]);
    assert!(!sat[Category::Ones.index()]);
    assert!(sat[Category::FullHouse.index()]);
    assert!(sat[Category::ThreeOfAKind.index()]);
    assert!(!sat[Category::FourOfAKind.index()]);
    // Chance is satisfiable for any rolled hand.
    assert!(sat[Category::Chance.index()]);
}

#[test]
fn exhaustive_sweep_internal_consistency() {
    // All 6^5 = 7776 hands: cross-category implications that must always hold.
    for a in 1u8..=6 {
        for b in 1u8..=6 {
            for c in 1u8..=6 {
                for d in 1u8..=6 {
                    for e in 1u8..=6 {
                        let hand = [a, b, c, d, e];
                        let s = scores_for_hand(hand);
                        let sum: i32 = hand.iter().map(|&x| x as i32).sum();

                        assert_eq!(s[Category::Chance.index()], sum, "{hand:?}");
                        let upper: i32 = (0..6).map(|i| s[i]).sum();
                        assert_eq!(upper, sum, "{hand:?}");

                        // Four of a kind implies three of a kind, same score.
                        if s[Category::FourOfAKind.index()] > 0 {
                            assert_eq!(
                                s[Category::ThreeOfAKind.index()],
                                s[Category::FourOfAKind.index()],
                                "{hand:?}"
                            );
                        }
                        // Yahtzee implies both n-of-a-kind categories.
                        if s[Category::Yahtzee.index()] > 0 {
                            assert_eq!(s[Category::FourOfAKind.index()], sum, "{hand:?}");
                            assert_eq!(s[Category::FullHouse.index()], 0, "{hand:?}");
                        }
                        // Large straight implies small straight.
                        if s[Category::LargeStraight.index()] > 0 {
                            assert_eq!(
                                s[Category::SmallStraight.index()],
                                SMALL_STRAIGHT_SCORE,
                                "{hand:?}"
                            );
                        }

                        for cat in ALL_CATEGORIES {
                            assert!(s[cat.index()] >= 0, "{hand:?}");
                        }
                        assert_eq!(s.len(), NUM_CATS);
                    }
                }
            }
        }
    }
}
