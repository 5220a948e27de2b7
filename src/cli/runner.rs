use std::env;

use tracing::{debug, error, info, warn};

use make_text::{BatchParams, SheetSource, convert_sheet_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Resolve parameters: explicit flag, then preset file, then default.
pub fn resolve_params(args: &CliArgs) -> Result<BatchParams, AppError> {
    let mut params = match &args.config {
        Some(path) => BatchParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => BatchParams::default(),
    };

    if let Some(v) = args.quantification_window_center {
        params.quantification_window_center = v;
    }
    if let Some(v) = args.quantification_window_size {
        params.quantification_window_size = v;
    }
    if let Some(v) = args.min_average_read_quality {
        params.min_average_read_quality = v;
    }
    if let Some(v) = args.min_frequency_alleles_around_cut_to_plot {
        params.min_frequency_alleles_around_cut_to_plot = v;
    }
    if let Some(v) = args.plot_window_size {
        params.plot_window_size = v;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    make_text::logging::init_logging(&args.log_file, args.log).map_err(|source| {
        AppError::Logging {
            path: args.log_file.clone(),
            source,
        }
    })?;

    let cwd = env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    info!(
        "make_text started at {} in {}",
        chrono::Local::now().to_rfc3339(),
        cwd
    );

    let params = resolve_params(&args).inspect_err(|e| error!("{}", e))?;
    println!(
        "CRISPResso2 parameters: \n{}",
        serde_json::to_string_pretty(&params)?
    );
    info!("params: {:?}", params);
    debug!(
        "input_file={:?} fastq_dir={:?} outfile={:?}",
        args.input_file, args.fastq_dir, args.outfile
    );

    let source = SheetSource {
        path: args.input_file.clone(),
        format: args.input_format,
        sheet: args.sheet.clone(),
    };

    let report = convert_sheet_to_path(&source, &params, &args.fastq_dir, &args.outfile)
        .map_err(AppError::from)?;

    if !report.missing_fastqs.is_empty() {
        warn!(
            "{} referenced FASTQ file(s) do not exist, see {:?}",
            report.missing_fastqs.len(),
            args.log_file
        );
    }
    info!("Samples written: {}", report.samples);

    Ok(())
}
