use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::InputFormat;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Worksheet `{0}` not found")]
    MissingWorksheet(String),
    #[error("Workbook has no worksheets: {0:?}")]
    NoWorksheet(PathBuf),
    #[error("Sample sheet has no header row: {0:?}")]
    NoHeader(PathBuf),
    #[error("Cannot detect sample sheet format of {0:?}, use --input-format")]
    UnknownFormat(PathBuf),
}

/// A sample sheet held fully in memory: a header row plus data rows.
/// Every row has exactly one cell per header; `None` marks an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSheet {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl SampleSheet {
    /// Build a sheet from raw rows. Short rows are padded with empty cells and
    /// long rows get `Unnamed: N` headers for the extra columns.
    pub fn from_rows(mut headers: Vec<String>, mut rows: Vec<Vec<Option<String>>>) -> Self {
        let width = rows
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .max(headers.len());

        for (i, h) in headers.iter_mut().enumerate() {
            *h = h.trim().to_string();
            if h.is_empty() {
                *h = format!("Unnamed: {}", i);
            }
        }
        for i in headers.len()..width {
            headers.push(format!("Unnamed: {}", i));
        }
        for r in rows.iter_mut() {
            r.resize(width, None);
        }

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn {
                column: name.to_string(),
                available: self.headers.join(", "),
            })
    }

    /// 0-based indices of rows holding at least one empty cell.
    pub fn null_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.iter().any(|c| c.is_none()))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Tokens read as missing values, the same set pandas uses by default.
const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a raw text cell stands for a missing value. Matching is exact,
/// so whitespace-only text is a value.
pub fn is_na(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

fn text_cell(value: &str) -> Option<String> {
    if is_na(value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn format_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

fn workbook_cell(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => text_cell(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_float(*f)),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => Some(match dt.as_datetime() {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format_float(dt.as_f64()),
        }),
    }
}

fn is_blank_workbook_row(row: &[Data]) -> bool {
    row.iter().all(|c| matches!(c, Data::Empty))
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> std::result::Result<SampleSheet, SheetError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(SheetError::MissingWorksheet(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| SheetError::NoWorksheet(path.to_path_buf()))??,
    };

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| SheetError::NoHeader(path.to_path_buf()))?
        .iter()
        .map(|c| workbook_cell(c).unwrap_or_default())
        .collect();
    let data: Vec<Vec<Option<String>>> = rows
        .filter(|r| !is_blank_workbook_row(r))
        .map(|r| r.iter().map(workbook_cell).collect())
        .collect();

    Ok(SampleSheet::from_rows(headers, data))
}

fn read_delimited(path: &Path, delimiter: u8) -> std::result::Result<SampleSheet, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SheetError::NoHeader(path.to_path_buf()));
    }

    let mut data: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        data.push(record.iter().map(text_cell).collect());
    }

    Ok(SampleSheet::from_rows(headers, data))
}

/// Read a sample sheet from disk. The format is taken from `format` when given,
/// otherwise guessed from the file extension.
pub fn read_sample_sheet(
    path: &Path,
    format: Option<InputFormat>,
    sheet: Option<&str>,
) -> std::result::Result<SampleSheet, SheetError> {
    let format = format
        .or_else(|| InputFormat::from_path(path))
        .ok_or_else(|| SheetError::UnknownFormat(path.to_path_buf()))?;
    debug!("Reading {:?} as {}", path, format);

    let sheet = match format.delimiter() {
        None => read_workbook(path, sheet)?,
        Some(delimiter) => read_delimited(path, delimiter)?,
    };

    info!(
        "Successfully opened {:?} ({} samples, columns: {})",
        path,
        sheet.len(),
        sheet.headers().join(", ")
    );
    Ok(sheet)
}
