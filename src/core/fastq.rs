//! FASTQ path conventions for demultiplexed paired-end reads.
//!
//! Paths follow the Illumina `bcl2fastq` naming with the sample sheet
//! index and lane dropped: `<fastq_dir><sample>_R1_001.fastq.gz`.
//! The directory is joined by plain concatenation, so it should end with a
//! path separator.
use std::collections::BTreeSet;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tracing::warn;

pub const R1_SUFFIX: &str = "_R1_001.fastq.gz";
pub const R2_SUFFIX: &str = "_R2_001.fastq.gz";

/// Read identifier of one mate of a pair
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReadMate {
    R1,
    R2,
}

impl ReadMate {
    pub fn suffix(&self) -> &'static str {
        match self {
            ReadMate::R1 => R1_SUFFIX,
            ReadMate::R2 => R2_SUFFIX,
        }
    }
}

/// Path of one mate's FASTQ for `sample` under `fastq_dir`.
pub fn fastq_path(fastq_dir: &str, sample: &str, mate: ReadMate) -> String {
    let mut path = String::with_capacity(fastq_dir.len() + sample.len() + R1_SUFFIX.len());
    path.push_str(fastq_dir);
    path.push_str(sample);
    path.push_str(mate.suffix());
    path
}

/// R1 and R2 paths for `sample`.
pub fn fastq_pair(fastq_dir: &str, sample: &str) -> (String, String) {
    (
        fastq_path(fastq_dir, sample, ReadMate::R1),
        fastq_path(fastq_dir, sample, ReadMate::R2),
    )
}

pub fn has_trailing_separator(dir: &str) -> bool {
    dir.ends_with('/') || dir.ends_with(MAIN_SEPARATOR)
}

/// Distinct paths among `paths` that do not exist on disk, sorted.
/// Each one is logged as a warning; none of them is fatal.
pub fn missing_fastqs<'a, I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a str>,
{
    let missing: BTreeSet<PathBuf> = paths
        .into_iter()
        .map(PathBuf::from)
        .filter(|p| !p.exists())
        .collect();

    for path in &missing {
        warn!("File does not exist: {}", path.display());
    }

    missing.into_iter().collect()
}

pub fn fastq_dir_exists(dir: &str) -> bool {
    Path::new(dir).exists()
}
