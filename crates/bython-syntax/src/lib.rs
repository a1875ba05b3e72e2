//! Brace-to-indentation transcoding for the Bython toolchain.
//!
//! Bython is Python written with curly-brace blocks and optional `;`
//! terminators. This crate rewrites it, line by line, into ordinary
//! indentation-and-colon Python:
//!
//! - **Brace classification** via [`classify`] separates block braces from
//!   dict/set/comprehension braces and from braces inside strings and f-string
//!   expressions
//! - **Transcoding** via [`Transcoder`] turns block braces into indentation
//!   while copying data literals through untouched
//! - **Mixed-style detection** via [`StyleDetector`] rejects sources that mix
//!   brace blocks with colon blocks, citing both lines
//!
//! [`Bython`] drives all three over a complete source.
//!
//! # Example
//!
//! ```
//! use bython_syntax::{Bython, IndentWidth};
//!
//! let mut bython = Bython::new(IndentWidth::try_from(2)?);
//! let output = bython.transcode_str("if x > 0 {\n    print(\"positive\");\n}")?;
//! assert_eq!(output, "if x > 0:\n  print(\"positive\")\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Limitations
//!
//! Quote state is tracked per line only, so triple-quoted strings spanning
//! several lines are not understood. Sources already written with colons are
//! passed through with terminators stripped but their nesting is not
//! reflowed.

mod checks;
mod classifier;
mod detector;
mod error;
mod keywords;
mod pipeline;
mod transcoder;

pub use checks::{StyleCheck, StyleChecks};
pub use classifier::{
    BraceKind, BraceTag, classify, first_data_literal_brace, first_structural_brace,
    leading_indent_width, net_brace_depth,
};
pub use detector::{StyleDetector, StyleVerdict};
pub use error::{BlockStyle, IndentWidthError, TranscodeError};
pub use keywords::{
    BLOCK_KEYWORDS, COMMENT_MARKER, ENTRY_POINT_MARKER, STATEMENT_TERMINATOR, is_block_header,
};
pub use pipeline::Bython;
pub use transcoder::{IndentWidth, Transcoder, TranscoderState};

/// Log target for transcoding events.
pub(crate) const SYNTAX_TARGET: &str = "bython_syntax";

#[cfg(test)]
mod tests;
