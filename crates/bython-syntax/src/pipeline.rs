//! Whole-source driver combining the style checks and the transcoder.

use std::io::BufRead;

use tracing::debug;

use crate::SYNTAX_TARGET;
use crate::checks::StyleChecks;
use crate::error::TranscodeError;
use crate::transcoder::{IndentWidth, Transcoder};

/// Transcodes complete sources.
///
/// Each call starts a fresh run: checks and transcoder state are reset, every
/// line is checked before it is transcoded, and output is only returned once
/// the whole source has been processed without error.
///
/// # Examples
///
/// ```ignore
/// use bython_syntax::{Bython, IndentWidth};
///
/// let mut bython = Bython::new(IndentWidth::try_from(2)?);
/// let output = bython.transcode_str("if ready {\n    go();\n}")?;
/// assert_eq!(output, "if ready:\n  go()\n");
/// ```
#[derive(Debug)]
pub struct Bython {
    transcoder: Transcoder,
    checks: StyleChecks,
}

impl Bython {
    /// Creates a driver running the default style checks.
    #[must_use]
    pub fn new(width: IndentWidth) -> Self {
        Self::with_checks(width, StyleChecks::default())
    }

    /// Creates a driver running a custom set of checks.
    #[must_use]
    pub fn with_checks(width: IndentWidth, checks: StyleChecks) -> Self {
        Self {
            transcoder: Transcoder::new(width),
            checks,
        }
    }

    /// Returns the configured indent width.
    #[must_use]
    pub const fn width(&self) -> IndentWidth {
        self.transcoder.width()
    }

    /// Clears transcoder and check state.
    pub fn reset(&mut self) {
        self.transcoder.reset();
        self.checks.reset();
    }

    /// Transcodes a sequence of lines without line terminators.
    ///
    /// A blank first output line is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::MixedSyntax`] when the source mixes brace and
    /// colon blocks; any output produced before the failure is discarded.
    pub fn transcode_lines<I, S>(&mut self, lines: I) -> Result<Vec<String>, TranscodeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();
        let mut output = Vec::new();
        let mut consumed = 0_usize;

        for (index, line) in lines.into_iter().enumerate() {
            let number = index + 1;
            self.checks.check_line(line.as_ref(), number)?;
            output.extend(self.transcoder.process_line(line.as_ref()));
            consumed = number;
        }

        if output.first().is_some_and(String::is_empty) {
            output.remove(0);
        }

        debug!(
            target: SYNTAX_TARGET,
            lines_in = consumed,
            lines_out = output.len(),
            open_blocks = self.transcoder.state().open_blocks(),
            "transcoded source"
        );
        Ok(output)
    }

    /// Transcodes a source string, returning newline-terminated output.
    ///
    /// # Errors
    ///
    /// See [`Bython::transcode_lines`].
    pub fn transcode_str(&mut self, source: &str) -> Result<String, TranscodeError> {
        self.transcode_lines(source.lines()).map(render)
    }

    /// Reads and transcodes a whole source from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::Read`] when reading fails, otherwise see
    /// [`Bython::transcode_lines`].
    pub fn transcode_reader<R: BufRead>(&mut self, reader: R) -> Result<String, TranscodeError> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(TranscodeError::Read)?;
        self.transcode_lines(lines).map(render)
    }
}

fn render(lines: Vec<String>) -> String {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    lines
        .into_iter()
        .fold(String::with_capacity(capacity), |mut output, line| {
            output.push_str(&line);
            output.push('\n');
            output
        })
}
