use bython_syntax::IndentWidth;

use crate::logging::LogFormat;

/// Default number of spaces emitted per indentation level.
pub const DEFAULT_INDENT_SIZE: usize = IndentWidth::DEFAULT.get();

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default number of spaces emitted per indentation level.
#[must_use]
pub const fn default_indent_size() -> usize {
    DEFAULT_INDENT_SIZE
}

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}
