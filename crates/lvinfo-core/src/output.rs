//! Level table output.
//!
//! Writing happens in two phases: [`LevelInfoWriter::create`] truncates the
//! table, then rows are appended one at a time in order. A failed append is
//! cut back to the end of the last complete row, logged and skipped; rows
//! already written stay written.

use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::flatten::LevelRow;

/// Byte sink that can discard a partially written row.
pub trait RowSink: Write {
    /// Drop everything past `len` bytes and continue writing from there.
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl RowSink for File {
    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)?;
        self.seek(SeekFrom::Start(len))?;
        Ok(())
    }
}

impl RowSink for Vec<u8> {
    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len).map_err(io::Error::other)?;
        self.truncate(len);
        Ok(())
    }
}

/// Outcome of appending a batch of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub failed: usize,
}

impl WriteSummary {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

pub struct LevelInfoWriter<W: RowSink> {
    sink: W,
    /// Bytes covered by complete rows.
    committed: u64,
}

impl LevelInfoWriter<File> {
    /// Create or truncate the table at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::OutputCreateFailed {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Truncated level table at {}", path.display());
        Ok(Self::new(file))
    }
}

impl<W: RowSink> LevelInfoWriter<W> {
    /// Wrap an empty sink.
    pub fn new(sink: W) -> Self {
        Self { sink, committed: 0 }
    }

    /// Append one row followed by `\n`.
    ///
    /// On failure the sink is cut back to the previous row boundary. If that
    /// also fails, [`Error::RollbackFailed`] is returned and the sink should
    /// not be written to again.
    pub fn append(&mut self, row: &LevelRow) -> Result<()> {
        let line = format!("{}\n", row);
        if let Err(e) = self.sink.write_all(line.as_bytes()) {
            self.sink
                .truncate_to(self.committed)
                .map_err(|source| Error::RollbackFailed {
                    offset: self.committed,
                    source,
                })?;
            return Err(e.into());
        }
        self.committed += line.len() as u64;
        Ok(())
    }

    /// Append rows in order, logging and counting failures instead of stopping.
    ///
    /// Stops early only when a partial row could not be removed; the rows
    /// left unwritten are counted as failed.
    pub fn write_rows<'a, I>(&mut self, rows: I) -> WriteSummary
    where
        I: IntoIterator<Item = &'a LevelRow>,
    {
        let mut summary = WriteSummary::default();
        let mut rows = rows.into_iter();
        while let Some(row) = rows.next() {
            match self.append(row) {
                Ok(()) => {
                    debug!("Wrote {}", row);
                    summary.written += 1;
                }
                Err(e @ Error::RollbackFailed { .. }) => {
                    error!("Level table is damaged, stopping: {}", e);
                    summary.failed += 1 + rows.count();
                    break;
                }
                Err(e) => {
                    error!(
                        "Failed to append {} {} {}: {}",
                        row.name,
                        row.variant,
                        row.tier(),
                        e
                    );
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
