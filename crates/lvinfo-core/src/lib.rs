pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod flatten;
pub mod output;
pub mod provider;

pub use chart::{Slot, SongRecord, Tier, Variant};
pub use error::{Error, Result};
pub use export::export;
pub use flatten::{LevelRow, flatten, flatten_song, format_level, level_magnitude};
pub use output::{LevelInfoWriter, RowSink, WriteSummary};
pub use provider::{JsonFileProvider, LevelsProvider, StaticProvider, parse_levels};
