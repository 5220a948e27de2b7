//! High-level library API: convert a sample sheet on disk into a batch file,
//! or into in-memory records. Prefer these entrypoints over the low-level
//! `core` and `io` modules when integrating make_text.
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::core::batch::{BatchRecord, build_batch_table};
use crate::core::params::BatchParams;
use crate::error::Result;
use crate::io::read_sample_sheet;
use crate::io::writers::tsv::write_batch_file;
use crate::types::InputFormat;

/// Where the sample sheet comes from and how to read it
#[derive(Debug, Clone)]
pub struct SheetSource {
    pub path: PathBuf,
    /// Overrides extension based detection
    pub format: Option<InputFormat>,
    /// Worksheet name for workbooks; the first sheet when `None`
    pub sheet: Option<String>,
}

impl SheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
            sheet: None,
        }
    }
}

/// Summary of a completed conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub samples: usize,
    pub missing_fastqs: Vec<PathBuf>,
    pub output: PathBuf,
}

/// Read a sample sheet and build the batch records without writing anything.
/// Returns the records and the distinct missing FASTQ paths.
pub fn convert_sheet_to_records(
    source: &SheetSource,
    params: &BatchParams,
    fastq_dir: &str,
) -> Result<(Vec<BatchRecord>, Vec<PathBuf>)> {
    let sheet = read_sample_sheet(&source.path, source.format, source.sheet.as_deref())
        .inspect_err(|e| error!("Failed to open {:?}: {}", source.path, e))?;
    let table = build_batch_table(&sheet, params, fastq_dir)
        .inspect_err(|e| error!("Failed to build batch table from {:?}: {}", source.path, e))?;
    Ok((table.records, table.missing_fastqs))
}

/// Convert a sample sheet into a batch file at `output`.
pub fn convert_sheet_to_path(
    source: &SheetSource,
    params: &BatchParams,
    fastq_dir: &str,
    output: &Path,
) -> Result<ConversionReport> {
    info!("Making batch file from {:?}", source.path);
    let (records, missing_fastqs) = convert_sheet_to_records(source, params, fastq_dir)?;

    write_batch_file(output, &records)
        .inspect_err(|e| error!("Failed to write {:?}: {}", output, e))?;

    info!(
        "Successfully converted {:?} to {:?} for CRISPRessoBatch!",
        source.path, output
    );
    Ok(ConversionReport {
        samples: records.len(),
        missing_fastqs,
        output: output.to_path_buf(),
    })
}
