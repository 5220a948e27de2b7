//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, sheet reader and CSV errors, and provides semantic
//! variants for the validation steps of a conversion.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet reader error: {0}")]
    Sheet(#[from] crate::io::SheetError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {column}. Available: {available}")]
    MissingColumn { column: String, available: String },

    #[error("Null values found in {table} table at row(s): {rows}")]
    NullValues { table: &'static str, rows: String },

    #[error("FASTQ directory does not exist: {0:?}")]
    FastqDirMissing(PathBuf),

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Build a `NullValues` error from 0-based data row indices, reported 1-based.
    pub fn null_values(table: &'static str, rows: &[usize]) -> Self {
        let rows = rows
            .iter()
            .map(|r| (r + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Error::NullValues { table, rows }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_values_reports_one_based_rows() {
        let err = Error::null_values("input", &[0, 4]);
        assert_eq!(
            err.to_string(),
            "Null values found in input table at row(s): 1, 5"
        );
    }
}
