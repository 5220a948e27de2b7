//! Shared types used across make_text.
//! Includes the sample sheet `InputFormat` and the output column names.
use std::path::Path;

use clap::ValueEnum;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum InputFormat {
    /// Excel or OpenDocument workbook (xlsx, xlsm, xlsb, xls, ods)
    Xlsx,
    /// Comma separated values
    Csv,
    /// Tab separated values
    Tsv,
}

impl InputFormat {
    /// Guess the format from a file extension. Returns `None` for unknown extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())?;

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(InputFormat::Xlsx),
            "csv" => Some(InputFormat::Csv),
            "tsv" | "txt" => Some(InputFormat::Tsv),
            _ => None,
        }
    }

    /// Field delimiter for the delimited text formats.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            InputFormat::Xlsx => None,
            InputFormat::Csv => Some(b','),
            InputFormat::Tsv => Some(b'\t'),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Xlsx => write!(f, "Xlsx"),
            InputFormat::Csv => write!(f, "Csv"),
            InputFormat::Tsv => write!(f, "Tsv"),
        }
    }
}

/// Column names expected in the sample sheet.
pub mod columns {
    pub const SAMPLE_NAME: &str = "NGS_sample_name";
    pub const REF_SEQUENCE: &str = "Ref_sequence";
    pub const GUIDE_SEQUENCE: &str = "Guide_Sequence";

    /// Output header, in write order.
    pub const OUTPUT: [&str; 10] = [
        "name",
        "quantification_window_center",
        "quantification_window_size",
        "min_average_read_quality",
        "fastq_r1",
        "fastq_r2",
        "amplicon_seq",
        "guide_seq",
        "min_frequency_alleles_around_cut_to_plot",
        "plot_window_size",
    ];
}
