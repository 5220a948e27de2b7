use clap::Parser;
use std::path::PathBuf;

use make_text::InputFormat;
use make_text::logging::DEFAULT_LOG_FILE;

#[derive(Parser)]
#[command(
    name = "make_text",
    version,
    about = "Make input.txt file for CRISPResso2 batch run"
)]
pub struct CliArgs {
    /// Path to the sample sheet (.xlsx, .ods, .csv or .tsv) to convert
    /// Example: ~/path/to/input_excel.xlsx
    pub input_file: PathBuf,

    /// Path to the fastq.gz files, joined to sample names as-is
    /// Example: ~/path/to/Fastq/
    pub fastq_dir: String,

    /// Path to the output batch file
    /// Example: ~/path/to/input.txt
    pub outfile: PathBuf,

    /// Center of the quantification window with respect to the 3' end of the
    /// sgRNA sequence. Suitable for Cas9 at -3 [default: -3]
    #[arg(long = "quantification_window_center", allow_negative_numbers = true)]
    pub quantification_window_center: Option<i64>,

    /// Size (in bp) of the quantification window extending from the
    /// quantification window center [default: 1]
    #[arg(long = "quantification_window_size", allow_negative_numbers = true)]
    pub quantification_window_size: Option<i64>,

    /// Minimum average quality score (phred33) [default: 10]
    #[arg(long = "min_average_read_quality", allow_negative_numbers = true)]
    pub min_average_read_quality: Option<i64>,

    /// Minimum percent reads required to report an allele in the alleles
    /// table plot [default: 0.2]
    #[arg(
        long = "min_frequency_alleles_around_cut_to_plot",
        allow_negative_numbers = true
    )]
    pub min_frequency_alleles_around_cut_to_plot: Option<f64>,

    /// Size of the window extending from the quantification window center
    /// to plot [default: 20]
    #[arg(long = "plot_window_size", allow_negative_numbers = true)]
    pub plot_window_size: Option<i64>,

    /// JSON file with parameter presets; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sample sheet format (detected from the extension when omitted)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Worksheet to read (first sheet when omitted)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Debug log file, overwritten on each run
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Also print log events to stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
