//! I/O layer for reading sample sheets and writing batch files.
//! Provides the `sheet` reader (Excel/ODS via calamine, CSV/TSV via csv)
//! and `writers` for the tab separated batch output.
pub mod sheet;
pub use sheet::{SampleSheet, SheetError, read_sample_sheet};

pub mod writers;
