//! Fixed paths and table dimensions.
//!
//! The exporter has no config file; everything it needs is pinned here:
//! - where the level table is written
//! - where the levels document is read from by default
//! - how many rating slots every song record carries

/// Output table, relative to the working directory.
///
/// Tab-separated despite the extension.
pub const OUTPUT_PATH: &str = "../data/intl_lv_info.csv";

/// Default levels document read by [`crate::JsonFileProvider`].
pub const DEFAULT_LEVELS_PATH: &str = "levels.json";

/// Rating slots per song record (BAS, ADV, EXP, MAS and two Re:MASTER slots).
pub const SLOT_COUNT: usize = 6;
