//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use bython_syntax::{IndentWidthError, TranscodeError};
use camino::Utf8PathBuf;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("invalid indent size: {0}")]
    IndentSize(#[from] IndentWidthError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    ReadInput { path: Utf8PathBuf, source: io::Error },
    #[error("{0}")]
    Transcode(#[from] TranscodeError),
    #[error("failed to write {path}: {source}")]
    WriteOutput { path: Utf8PathBuf, source: io::Error },
    #[error("failed to write standard output: {0}")]
    WriteStdout(io::Error),
}

impl AppError {
    pub(crate) fn read_input(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_output(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
