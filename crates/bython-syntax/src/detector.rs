//! Detection of sources that mix brace blocks with colon blocks.

use tracing::debug;

use crate::SYNTAX_TARGET;
use crate::checks::StyleCheck;
use crate::classifier::first_structural_brace;
use crate::error::{BlockStyle, TranscodeError};
use crate::keywords::{is_block_header, is_comment};

/// The block style locked in for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleVerdict {
    /// No block construct has been seen yet.
    #[default]
    Undetermined,
    /// A structural brace was seen first, at `line`.
    Brace {
        /// One-based line number of the first structural brace.
        line: usize,
    },
    /// A colon-terminated block header was seen first, at `line`.
    Colon {
        /// One-based line number of the first colon block header.
        line: usize,
    },
}

impl StyleVerdict {
    /// Returns the established style and the line that established it.
    #[must_use]
    pub const fn established(self) -> Option<(BlockStyle, usize)> {
        match self {
            Self::Undetermined => None,
            Self::Brace { line } => Some((BlockStyle::Brace, line)),
            Self::Colon { line } => Some((BlockStyle::Colon, line)),
        }
    }

    const fn locked(style: BlockStyle, line: usize) -> Self {
        match style {
            BlockStyle::Brace => Self::Brace { line },
            BlockStyle::Colon => Self::Colon { line },
        }
    }
}

/// Sticky, one-shot detector of mixed block styles.
///
/// The first line that evidences a style locks it in. A later line evidencing
/// the other style fails the run; lines that are neither (plain statements,
/// comments, blanks, data literals) are ignored.
#[derive(Debug, Clone, Default)]
pub struct StyleDetector {
    verdict: StyleVerdict,
}

impl StyleDetector {
    /// Creates an undetermined detector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verdict: StyleVerdict::Undetermined,
        }
    }

    /// Returns the current verdict.
    #[must_use]
    pub const fn verdict(&self) -> StyleVerdict {
        self.verdict
    }
}

/// Classifies the block style a line evidences, if any.
fn evidence(trimmed: &str) -> Option<BlockStyle> {
    if trimmed.is_empty() || is_comment(trimmed) {
        return None;
    }
    if first_structural_brace(trimmed).is_some() {
        return Some(BlockStyle::Brace);
    }
    (is_block_header(trimmed) && trimmed.ends_with(':')).then_some(BlockStyle::Colon)
}

impl StyleCheck for StyleDetector {
    fn check_line(&mut self, line: &str, line_number: usize) -> Result<(), TranscodeError> {
        let Some(found) = evidence(line.trim()) else {
            return Ok(());
        };

        match self.verdict.established() {
            None => {
                debug!(
                    target: SYNTAX_TARGET,
                    style = %found,
                    line = line_number,
                    "block style established"
                );
                self.verdict = StyleVerdict::locked(found, line_number);
                Ok(())
            }
            Some((established, _)) if established == found => Ok(()),
            Some((established, established_line)) => Err(TranscodeError::mixed_syntax(
                found,
                line_number,
                established,
                established_line,
            )),
        }
    }

    fn reset(&mut self) {
        self.verdict = StyleVerdict::Undetermined;
    }
}
