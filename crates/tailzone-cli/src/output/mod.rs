//! Zone file persistence.

use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Text of a zone previously written to `path`, if there is one.
///
/// A missing file is not an error; an unreadable one is.
pub fn previous_zone(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read previous zone");
            Ok(Some(text))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Write the zone text, flushing and syncing before the handle is released.
pub fn write_zone(path: &Path, text: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    writer
        .get_ref()
        .sync_all()
        .with_context(|| format!("failed to sync {}", path.display()))?;

    debug!(path = %path.display(), bytes = text.len(), "zone file written");
    Ok(())
}
