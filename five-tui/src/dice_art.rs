//! Dice face rendering: pip patterns or numerals, 5 columns x 3 rows.

use five_core::DiceStyle;

/// Rendered height of a die face, excluding the border.
pub const DIE_ROWS: usize = 3;

const PIP: char = '●';

/// The three text rows for a die face (0 = unrolled renders blank).
pub fn face_lines(face: u8, style: DiceStyle) -> [String; DIE_ROWS] {
    debug_assert!(face <= 6);
    match style {
        DiceStyle::Numerals => {
            if face == 0 {
                blank()
            } else {
                [
                    "     ".to_string(),
                    format!("  {face}  "),
                    "     ".to_string(),
                ]
            }
        }
        DiceStyle::Dots => dots(face),
    }
}

fn blank() -> [String; DIE_ROWS] {
    ["     ".to_string(), "     ".to_string(), "     ".to_string()]
}

fn dots(face: u8) -> [String; DIE_ROWS] {
    // Pip layout on a 5x3 grid, matching a physical die.
    let rows: [&str; DIE_ROWS] = match face {
        0 => ["     ", "     ", "     "],
        1 => ["     ", "  o  ", "     "],
        2 => ["    o", "     ", "o    "],
        3 => ["    o", "  o  ", "o    "],
        4 => ["o   o", "     ", "o   o"],
        5 => ["o   o", "  o  ", "o   o"],
        6 => ["o   o", "o   o", "o   o"],
        _ => ["     ", "     ", "     "],
    };
    let mut out = blank();
    for (dst, src) in out.iter_mut().zip(rows.iter()) {
        *dst = src.replace('o', &PIP.to_string());
    }
    out
}
