//! Core conversion building blocks: tuning parameters, FASTQ path
//! conventions, and batch table assembly. These are internal primitives
//! consumed by the high-level `api` module.
pub mod batch;
pub mod fastq;
pub mod params;
