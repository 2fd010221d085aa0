//! five-logging: append-only NDJSON game log.
//!
//! One JSON object per line; a crashed writer leaves at most one partial
//! trailing line, which readers should skip.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log schema version for the events below.
pub const LOG_SCHEMA_VERSION: u32 = 1;

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Emitted each time a category is scored.
#[derive(Debug, Clone, Serialize)]
pub struct MarkEventV1 {
    pub event: &'static str, // "mark"
    pub ts_ms: u64,
    pub schema_version: u32,

    pub game_id: u64,
    /// 0-based placement index within the game (0..=12).
    pub turn_idx: u8,
    pub rolls_used: u8,
    pub dice: [u8; 5],
    pub category: &'static str,
    pub score: i32,
    pub total: i32,
}

/// Emitted once per finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameOverEventV1 {
    pub event: &'static str, // "game_over"
    pub ts_ms: u64,
    pub schema_version: u32,

    pub game_id: u64,
    pub upper_subtotal: i32,
    pub upper_bonus: i32,
    pub lower_total: i32,
    pub total: i32,
}

#[derive(Debug)]
pub enum NdjsonError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for NdjsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdjsonError::Io(e) => write!(f, "io error: {e}"),
            NdjsonError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for NdjsonError {}

impl From<io::Error> for NdjsonError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NdjsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use serde_json::Value;

    fn read_ndjson_lenient(path: &Path) -> Vec<Value> {
        let s = fs::read_to_string(path).expect("read");
        let mut out = Vec::new();
        for line in s.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(v) = serde_json::from_str::<Value>(line) {
                out.push(v);
            }
        }
        out
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn writes_one_valid_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.ndjson");
        let mut w = NdjsonWriter::open_append(&path).unwrap();

        w.write_event(&MarkEventV1 {
            event: "mark",
            ts_ms: now_ms(),
            schema_version: LOG_SCHEMA_VERSION,
            game_id: 1,
            turn_idx: 0,
            rolls_used: 2,
            dice: [3, 3, 3, 1, 2],
            category: "threes",
            score: 9,
            total: 9,
        })
        .unwrap();
        w.write_event(&GameOverEventV1 {
            event: "game_over",
            ts_ms: now_ms(),
            schema_version: LOG_SCHEMA_VERSION,
            game_id: 1,
            upper_subtotal: 9,
            upper_bonus: 0,
            lower_total: 0,
            total: 9,
        })
        .unwrap();
        w.flush().unwrap();

        let vals = read_ndjson_lenient(&path);
        assert_eq!(vals.len(), 2);
        assert_eq!(vals[0]["event"], "mark");
        assert_eq!(vals[0]["score"], 9);
        assert_eq!(vals[1]["event"], "game_over");
        assert_eq!(vals[1]["total"], 9);
    }

    #[test]
    fn lenient_reader_tolerates_trailing_partial_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.ndjson");

        {
            let mut w = NdjsonWriter::open_append(&path).unwrap();
            #[derive(Serialize)]
            struct E {
                event: &'static str,
                x: u32,
            }
            w.write_event(&E { event: "e", x: 1 }).unwrap();
            w.flush().unwrap();
        }

        // Simulate crash: append a partial JSON line (no newline, invalid JSON).
        let mut f = OpenOptions::new().append(true).open(&path).unwrap();
        f.write_all(br#"{"event":"e","x":"#).unwrap();
        f.flush().unwrap();

        let vals = read_ndjson_lenient(&path);
        assert_eq!(vals.len(), 1);
        assert_eq!(vals[0]["x"], 1);
    }

    #[test]
    fn periodic_flush_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.ndjson");
        let mut w = NdjsonWriter::open_append_with_flush(&path, 2).unwrap();

        #[derive(Serialize)]
        struct E {
            x: u32,
        }
        w.write_event(&E { x: 1 }).unwrap();
        w.write_event(&E { x: 2 }).unwrap();
        // Flushed every 2 lines; both must be on disk without an explicit flush.
        let vals = read_ndjson_lenient(&path);
        assert_eq!(vals.len(), 2);
    }
}
