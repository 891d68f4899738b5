use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::flatten::flatten;
use crate::output::{LevelInfoWriter, WriteSummary};
use crate::provider::LevelsProvider;

/// Write the level table for every song the provider yields.
///
/// The table is truncated before the provider is consulted, so a provider
/// failure leaves an empty file behind. Individual append failures are
/// counted in the returned summary rather than returned as errors.
pub fn export<P>(provider: &P, path: impl AsRef<Path>) -> Result<WriteSummary>
where
    P: LevelsProvider + ?Sized,
{
    let mut writer = LevelInfoWriter::create(path)?;

    let songs = provider.levels()?;
    let rows = flatten(&songs);
    info!("Flattened {} songs into {} rows", songs.len(), rows.len());

    let summary = writer.write_rows(&rows);
    if summary.is_complete() {
        info!("Wrote {} rows", summary.written);
    } else {
        warn!("Wrote {} rows, {} rows failed", summary.written, summary.failed);
    }

    Ok(summary)
}
