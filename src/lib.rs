#![doc = r#"
make_text — build CRISPResso2 batch input files from sample sheets.

A sample sheet lists one sequencing sample per row with at least the columns
`NGS_sample_name`, `Ref_sequence` and `Guide_Sequence`. make_text resolves the
paired FASTQ paths of every sample, attaches fixed analysis parameters, checks
that nothing is missing, and writes a tab separated batch file with one row
per sample.

Quick start: convert a sheet to a file
--------------------------------------
```rust,no_run
use std::path::Path;
use make_text::{BatchParams, SheetSource, convert_sheet_to_path};

fn main() -> make_text::Result<()> {
    let report = convert_sheet_to_path(
        &SheetSource::new("/data/samples.xlsx"),
        &BatchParams::default(),
        "/data/fastq/",
        Path::new("/out/input.txt"),
    )?;

    println!("samples={} missing_fastqs={}", report.samples, report.missing_fastqs.len());
    Ok(())
}
```

Output layout
-------------
Columns, in order: `name`, `quantification_window_center`,
`quantification_window_size`, `min_average_read_quality`, `fastq_r1`,
`fastq_r2`, `amplicon_seq`, `guide_seq`,
`min_frequency_alleles_around_cut_to_plot`, `plot_window_size`.

`fastq_r1` is `<fastq_dir><name>_R1_001.fastq.gz`; the directory is joined by
plain concatenation. FASTQ files that do not exist are logged as warnings and
reported in [`ConversionReport::missing_fastqs`], they never stop a run.

Error handling
--------------
All public functions return `make_text::Result<T>`:

```rust,no_run
use std::path::Path;
use make_text::{BatchParams, Error, SheetSource, convert_sheet_to_path};

fn main() {
    match convert_sheet_to_path(
        &SheetSource::new("/bad/path.xlsx"),
        &BatchParams::default(),
        "/data/fastq/",
        Path::new("/out/input.txt"),
    ) {
        Ok(_) => {}
        Err(Error::Sheet(e)) => eprintln!("cannot read sheet: {e}"),
        Err(Error::NullValues { rows, .. }) => eprintln!("empty cells in rows {rows}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters, FASTQ path conventions and batch table assembly.
- [`io`] — sample sheet reader and batch file writer.
- [`logging`] — log file set-up used by the CLI.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

// Curated public API surface
pub use crate::core::batch::{BatchRecord, BatchTable, build_batch_table};
pub use crate::core::params::BatchParams;
pub use crate::error::{Error, Result};
pub use crate::types::InputFormat;

pub use crate::io::{SampleSheet, SheetError, read_sample_sheet};

pub use crate::api::{ConversionReport, SheetSource, convert_sheet_to_path, convert_sheet_to_records};
