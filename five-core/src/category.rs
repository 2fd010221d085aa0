//! The thirteen scoring categories, in fixed index order.
//!
//! Indices 0..=5 are the upper section (Ones..Sixes); 6..=12 are the lower
//! section. The index order is load-bearing: `scores_for_hand` returns scores
//! in this order and `ScoreSheet` stores them by index.

/// Number of scoring categories on a standard Yahtzee sheet.
pub const NUM_CATS: usize = 13;

/// One scoring category (the original app calls this `HandType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    Ones = 0,
    Twos = 1,
    Threes = 2,
    Fours = 3,
    Fives = 4,
    Sixes = 5,
    ThreeOfAKind = 6,
    FourOfAKind = 7,
    FullHouse = 8,
    SmallStraight = 9,
    LargeStraight = 10,
    Yahtzee = 11,
    Chance = 12,
}

/// All categories in index order.
pub const ALL_CATEGORIES: [Category; NUM_CATS] = [
    Category::Ones,
    Category::Twos,
    Category::Threes,
    Category::Fours,
    Category::Fives,
    Category::Sixes,
    Category::ThreeOfAKind,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::SmallStraight,
    Category::LargeStraight,
    Category::Yahtzee,
    Category::Chance,
];

impl Category {
    /// Index in 0..NUM_CATS.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`]. Returns `None` for out-of-range input.
    pub fn from_index(idx: usize) -> Option<Category> {
        ALL_CATEGORIES.get(idx).copied()
    }

    /// True for Ones..Sixes (the categories that count toward the upper bonus).
    #[inline]
    pub fn is_upper(self) -> bool {
        (self as usize) < 6
    }

    /// For an upper category, the face it counts (1..=6).
    pub fn upper_face(self) -> Option<u8> {
        if self.is_upper() {
            Some(self as u8 + 1)
        } else {
            None
        }
    }

    /// Display label, matching the original score buttons.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }

    /// Stable snake_case id, used in log events.
    pub fn id(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }
}
