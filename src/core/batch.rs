use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::core::fastq::{fastq_dir_exists, fastq_pair, has_trailing_separator, missing_fastqs};
use crate::core::params::BatchParams;
use crate::error::{Error, Result};
use crate::io::SampleSheet;
use crate::types::columns;

/// One row of the batch file. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    pub name: String,
    pub quantification_window_center: i64,
    pub quantification_window_size: i64,
    pub min_average_read_quality: i64,
    pub fastq_r1: String,
    pub fastq_r2: String,
    pub amplicon_seq: String,
    pub guide_seq: String,
    pub min_frequency_alleles_around_cut_to_plot: f64,
    pub plot_window_size: i64,
}

impl BatchRecord {
    /// True when any field would be written as a missing value.
    pub fn has_null(&self) -> bool {
        [
            &self.name,
            &self.fastq_r1,
            &self.fastq_r2,
            &self.amplicon_seq,
            &self.guide_seq,
        ]
        .iter()
        .any(|s| s.trim().is_empty())
            || self.min_frequency_alleles_around_cut_to_plot.is_nan()
    }
}

/// The assembled batch table plus what was learned while building it.
#[derive(Debug, Clone)]
pub struct BatchTable {
    pub records: Vec<BatchRecord>,
    /// Distinct referenced FASTQ files missing on disk
    pub missing_fastqs: Vec<PathBuf>,
}

fn required_column(sheet: &SampleSheet, name: &str) -> Result<Vec<String>> {
    let idx = sheet.column_index(name)?;
    sheet
        .rows()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            r[idx]
                .clone()
                .ok_or_else(|| Error::null_values("input", &[i]))
        })
        .collect()
}

/// Build the batch table from a sample sheet.
///
/// Rejects any empty cell in the sheet and any missing value in the result.
/// Missing FASTQ files are only reported; a missing `fastq_dir` is an error.
pub fn build_batch_table(
    sheet: &SampleSheet,
    params: &BatchParams,
    fastq_dir: &str,
) -> Result<BatchTable> {
    info!("Checking for null values in the sample sheet...");
    let null_rows = sheet.null_rows();
    if !null_rows.is_empty() {
        return Err(Error::null_values("input", &null_rows));
    }

    let names = required_column(sheet, columns::SAMPLE_NAME)?;
    let amplicons = required_column(sheet, columns::REF_SEQUENCE)?;
    let guides = required_column(sheet, columns::GUIDE_SEQUENCE)?;

    if !has_trailing_separator(fastq_dir) {
        warn!(
            "FASTQ directory {:?} has no trailing separator; paths are built by concatenation",
            fastq_dir
        );
    }
    let pairs: Vec<(String, String)> = names.iter().map(|n| fastq_pair(fastq_dir, n)).collect();

    info!("Checking that all paths to fastq files exist...");
    let missing = missing_fastqs(
        pairs
            .iter()
            .flat_map(|(r1, r2)| [r1.as_str(), r2.as_str()]),
    );

    if !fastq_dir_exists(fastq_dir) {
        return Err(Error::FastqDirMissing(PathBuf::from(fastq_dir)));
    }

    let records: Vec<BatchRecord> = names
        .into_iter()
        .zip(pairs)
        .zip(amplicons.into_iter().zip(guides))
        .map(|((name, (fastq_r1, fastq_r2)), (amplicon_seq, guide_seq))| BatchRecord {
            name,
            quantification_window_center: params.quantification_window_center,
            quantification_window_size: params.quantification_window_size,
            min_average_read_quality: params.min_average_read_quality,
            fastq_r1,
            fastq_r2,
            amplicon_seq,
            guide_seq,
            min_frequency_alleles_around_cut_to_plot: params
                .min_frequency_alleles_around_cut_to_plot,
            plot_window_size: params.plot_window_size,
        })
        .collect();

    let null_rows: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.has_null())
        .map(|(i, _)| i)
        .collect();
    if !null_rows.is_empty() {
        return Err(Error::null_values("output", &null_rows));
    }

    Ok(BatchTable {
        records,
        missing_fastqs: missing,
    })
}
