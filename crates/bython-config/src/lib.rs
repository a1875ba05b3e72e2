//! Layered configuration for the Bython toolchain.
//!
//! Values are merged by `ortho_config` from, in increasing precedence, the
//! built-in defaults, a TOML configuration file (`--config-path` or
//! `BYTHON_CONFIG_PATH`), `BYTHON_*` environment variables and command-line
//! flags.

mod defaults;
mod logging;

use bython_syntax::{IndentWidth, IndentWidthError};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_INDENT_SIZE, DEFAULT_LOG_FILTER, default_indent_size, default_log_filter,
    default_log_filter_string, default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved settings for one `bython` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BYTHON")]
pub struct Config {
    /// Spaces emitted per indentation level.
    #[ortho_config(default = default_indent_size())]
    pub indent_size: usize,
    /// `tracing` filter directive applied to log output.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log records.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the configured indent size without validation.
    #[must_use]
    pub const fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Returns the validated indent width.
    ///
    /// # Errors
    ///
    /// Returns [`IndentWidthError::Zero`] when the configured size is zero.
    pub fn indent_width(&self) -> Result<IndentWidth, IndentWidthError> {
        IndentWidth::try_from(self.indent_size)
    }

    /// Returns the log filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_constants() {
        let config = Config::default();
        assert_eq!(config.indent_size(), DEFAULT_INDENT_SIZE);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(config.indent_width(), Ok(IndentWidth::DEFAULT));
    }

    #[test]
    fn zero_indent_is_rejected() {
        let config = Config {
            indent_size: 0,
            ..Config::default()
        };
        assert_eq!(config.indent_width(), Err(IndentWidthError::Zero));
    }
}
