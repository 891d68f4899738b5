//! Levels provider abstraction.
//!
//! The exporter only needs an ordered list of song records; where they come
//! from is behind [`LevelsProvider`] so tests can hand records in directly.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::SongRecord;
use crate::error::{Error, Result};

/// Source of song records, in table order.
pub trait LevelsProvider {
    fn levels(&self) -> Result<Vec<SongRecord>>;
}

/// Parse a levels document: a JSON array of `{ "n", "dx", "lv" }` objects.
pub fn parse_levels(content: &str) -> Result<Vec<SongRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// Reads song records from a JSON levels document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LevelsProvider for JsonFileProvider {
    fn levels(&self) -> Result<Vec<SongRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::LevelsReadFailed {
            path: self.path.clone(),
            source,
        })?;
        let songs = parse_levels(&content)?;
        info!("Loaded {} songs from {}", songs.len(), self.path.display());
        Ok(songs)
    }
}

/// In-memory provider.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    songs: Vec<SongRecord>,
}

impl StaticProvider {
    pub fn new(songs: Vec<SongRecord>) -> Self {
        Self { songs }
    }
}

impl LevelsProvider for StaticProvider {
    fn levels(&self) -> Result<Vec<SongRecord>> {
        Ok(self.songs.clone())
    }
}
