//! Flatten song records into level table rows.
//!
//! Each song contributes one row per non-empty rating slot, in slot order.
//! A slot is empty when its rating is zero or NaN; otherwise the row carries
//! the rating's absolute value.

use std::sync::Arc;

use crate::chart::{Slot, SongRecord, Tier, Variant};

/// One line of the level table.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelRow {
    pub name: Arc<str>,
    pub variant: Variant,
    pub slot: Slot,
    /// Always positive; never zero or NaN.
    pub level: f64,
}

impl LevelRow {
    pub fn tier(&self) -> Tier {
        self.slot.tier()
    }

    /// Tab-joined fields without the trailing newline.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for LevelRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.name,
            self.variant,
            self.tier(),
            format_level(self.level)
        )
    }
}

/// Absolute value of a raw rating, or `None` when the slot is empty.
pub fn level_magnitude(raw: f64) -> Option<f64> {
    let magnitude = raw.abs();
    if magnitude == 0.0 || magnitude.is_nan() {
        None
    } else {
        Some(magnitude)
    }
}

/// JavaScript number text: `12` for whole numbers, `12.7` otherwise,
/// `Infinity`, and exponent form outside `1e-6..1e21`.
pub fn format_level(level: f64) -> String {
    if level.is_infinite() {
        return if level > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = level.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return level.to_string();
    }
    let text = format!("{:e}", level);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}

pub fn flatten_song(song: &SongRecord) -> impl Iterator<Item = LevelRow> + '_ {
    let name: Arc<str> = Arc::from(song.name.as_str());
    Slot::ALL.into_iter().filter_map(move |slot| {
        let level = level_magnitude(song.rating(slot))?;
        Some(LevelRow {
            name: Arc::clone(&name),
            variant: song.variant,
            slot,
            level,
        })
    })
}

/// Flatten every song, preserving song order then slot order.
pub fn flatten(songs: &[SongRecord]) -> Vec<LevelRow> {
    songs.iter().flat_map(flatten_song).collect()
}
