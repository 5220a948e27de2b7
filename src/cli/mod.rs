//! Command Line Interface (CLI) layer for make_text.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): set up logging, resolve the
//! tuning parameters, and hand off to `make_text::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
