//! CLI argument definitions for the `bython` binary.
//!
//! Configuration flags (`--config-path`, `--indent-size`, `--log-filter`,
//! `--log-format`) are peeled off before this parser runs and handed to the
//! configuration loader instead.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;

/// Path token that selects a standard stream.
const STANDARD_STREAM: &str = "-";

/// Transcodes brace-style Python into indentation-style Python.
#[derive(Parser, Debug)]
#[command(name = "bython", version)]
pub(crate) struct Cli {
    /// Source file to transcode; `-` or no value reads standard input.
    #[arg(value_name = "INPUT")]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Destination file; standard output when omitted.
    #[arg(short, long, value_name = "OUTPUT")]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl Cli {
    /// Returns the input file, or `None` when standard input was selected.
    pub(crate) fn input_path(&self) -> Option<&Utf8Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_str() != STANDARD_STREAM)
    }

    /// Returns the output file, or `None` when standard output was selected.
    pub(crate) fn output_path(&self) -> Option<&Utf8Path> {
        self.output
            .as_deref()
            .filter(|path| path.as_str() != STANDARD_STREAM)
    }
}
