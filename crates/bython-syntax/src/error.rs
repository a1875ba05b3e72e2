//! Error types for transcoding operations.
//!
//! Transcoding is deliberately permissive: unbalanced braces, unterminated
//! strings and malformed literals degrade to best-effort output. The only
//! failure raised by the core is a mixed block style, plus read failures when
//! the driver pulls lines from an external reader.

use std::fmt;
use std::io;

use thiserror::Error;

/// The block-delimiting style evidenced by a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockStyle {
    /// Blocks are opened with `{` and closed with `}`.
    Brace,
    /// Blocks are introduced by a trailing `:` and delimited by indentation.
    Colon,
}

impl fmt::Display for BlockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brace => write!(f, "brace-style block"),
            Self::Colon => write!(f, "colon-style block"),
        }
    }
}

/// Errors from transcoding operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranscodeError {
    /// A line contradicts the block style established earlier in the run.
    #[error(
        "mixed syntax detected: {found} found at line {found_line}, but {established} was established at line {established_line}"
    )]
    MixedSyntax {
        /// Style of the offending line.
        found: BlockStyle,
        /// One-based number of the offending line.
        found_line: usize,
        /// Style locked in by the earlier line.
        established: BlockStyle,
        /// One-based number of the line that locked the style in.
        established_line: usize,
    },

    /// Reading source lines from the underlying reader failed.
    #[error("failed to read source: {0}")]
    Read(#[source] io::Error),
}

impl TranscodeError {
    /// Creates a mixed syntax error.
    #[must_use]
    pub const fn mixed_syntax(
        found: BlockStyle,
        found_line: usize,
        established: BlockStyle,
        established_line: usize,
    ) -> Self {
        Self::MixedSyntax {
            found,
            found_line,
            established,
            established_line,
        }
    }

    /// Returns the offending line number for mixed syntax errors.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MixedSyntax { found_line, .. } => Some(*found_line),
            Self::Read(_) => None,
        }
    }
}

/// Rejected indent unit widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IndentWidthError {
    /// The width of one indentation level must be at least one column.
    #[error("indent width must be a positive integer")]
    Zero,
}
