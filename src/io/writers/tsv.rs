use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::core::batch::BatchRecord;
use crate::error::{Error, Result};
use crate::types::columns;

/// Serialize records as tab separated text. The header row is always
/// written, even when there are no records.
pub fn write_batch<W: Write>(writer: W, records: &[BatchRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(columns::OUTPUT)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the batch file to `path`.
///
/// The table goes to a temporary file in the destination directory first and
/// is renamed into place, so a failed write leaves no partial output.
pub fn write_batch_file(path: &Path, records: &[BatchRecord]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp_builder = tempfile::Builder::new();
    let tmp_file = tmp_builder
        .prefix(".make_text_")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| Error::write(path, e))?;
    debug!("Staging batch file at {:?}", tmp_file.path());

    write_batch(tmp_file.as_file(), records)?;
    tmp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::write(path, e))?;
    tmp_file
        .persist(path)
        .map_err(|e| Error::write(path, e.error))?;

    info!("Wrote {} samples to {:?}", records.len(), path);
    Ok(())
}
