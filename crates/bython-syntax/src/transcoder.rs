//! Line-at-a-time conversion of brace blocks into indentation.

use std::num::NonZeroUsize;

use tracing::{trace, warn};

use crate::SYNTAX_TARGET;
use crate::classifier::{
    first_data_literal_brace, first_structural_brace, leading_indent_width, net_brace_depth,
};
use crate::error::IndentWidthError;
use crate::keywords::{is_block_header, is_comment, strip_terminator};

/// Width, in spaces, of one emitted indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentWidth(NonZeroUsize);

impl IndentWidth {
    /// Four spaces, the usual Python convention.
    pub const DEFAULT: Self = match NonZeroUsize::new(4) {
        Some(width) => Self(width),
        None => Self(NonZeroUsize::MIN),
    };

    /// Wraps a non-zero width.
    #[must_use]
    pub const fn new(width: NonZeroUsize) -> Self {
        Self(width)
    }

    /// Returns the width in columns.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for IndentWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for IndentWidth {
    type Error = IndentWidthError;

    fn try_from(width: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(width)
            .map(Self)
            .ok_or(IndentWidthError::Zero)
    }
}

/// Mutable counters carried from one line to the next.
///
/// `indent_level` and `open_blocks` move together; they are kept apart so the
/// invariant can be asserted. `literal_depth` is non-zero only while a
/// multi-line dict, set or comprehension is being copied through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscoderState {
    indent_level: usize,
    open_blocks: usize,
    literal_depth: usize,
    literal_base_indent: usize,
}

impl TranscoderState {
    /// Current nesting depth of emitted code.
    #[must_use]
    pub const fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Number of structural braces still open.
    #[must_use]
    pub const fn open_blocks(&self) -> usize {
        self.open_blocks
    }

    /// Unmatched braces of the data literal being copied, zero outside one.
    #[must_use]
    pub const fn literal_depth(&self) -> usize {
        self.literal_depth
    }

    /// Source indentation of the line that opened the current data literal.
    #[must_use]
    pub const fn literal_base_indent(&self) -> usize {
        self.literal_base_indent
    }

    const fn in_literal(&self) -> bool {
        self.literal_depth > 0
    }

    const fn open_block(&mut self) {
        self.indent_level += 1;
        self.open_blocks += 1;
    }

    const fn close_block(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.open_blocks = self.open_blocks.saturating_sub(1);
    }

    fn enter_literal(&mut self, base_indent: usize, depth: isize) {
        self.literal_base_indent = base_indent;
        self.literal_depth = 0;
        self.adjust_literal(depth);
    }

    const fn adjust_literal(&mut self, delta: isize) {
        self.literal_depth = self.literal_depth.saturating_add_signed(delta);
        if self.literal_depth == 0 {
            self.literal_base_indent = 0;
        }
    }
}

/// Converts brace-style lines into indentation-style lines.
///
/// One transcoder serves one run: feed it every line of a source in order,
/// then [`reset`](Self::reset) it before the next source.
#[derive(Debug, Clone)]
pub struct Transcoder {
    width: IndentWidth,
    unit: String,
    state: TranscoderState,
}

/// Outcome of dispatching one piece of a line.
enum Step<'a> {
    Done,
    Reprocess(&'a str),
}

impl Transcoder {
    /// Creates a transcoder emitting `width` spaces per level.
    #[must_use]
    pub fn new(width: IndentWidth) -> Self {
        Self {
            width,
            unit: " ".repeat(width.get()),
            state: TranscoderState::default(),
        }
    }

    /// Returns the configured indent width.
    #[must_use]
    pub const fn width(&self) -> IndentWidth {
        self.width
    }

    /// Returns the counters carried between lines.
    #[must_use]
    pub const fn state(&self) -> &TranscoderState {
        &self.state
    }

    /// Clears all counters.
    pub fn reset(&mut self) {
        self.state = TranscoderState::default();
    }

    /// Transcodes one raw line into zero or more output lines.
    ///
    /// A line starting with a closing brace that ends a structural block is
    /// peeled and the remainder is dispatched again, so `} else {` and `}}`
    /// are handled as one unit. Each pass works on a strictly shorter slice.
    pub fn process_line(&mut self, raw: &str) -> Vec<String> {
        let mut output = Vec::new();
        let mut remainder = raw;
        while let Step::Reprocess(rest) = self.dispatch(remainder, &mut output) {
            remainder = rest;
        }
        output
    }

    fn dispatch<'a>(&mut self, raw: &'a str, output: &mut Vec<String>) -> Step<'a> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            output.push(String::new());
            return Step::Done;
        }

        if is_comment(trimmed) {
            output.push(self.indented(trimmed));
            return Step::Done;
        }

        if let Some(after_brace) = trimmed.strip_prefix('}') {
            return self.closing_line(raw, trimmed, after_brace.trim(), output);
        }

        if self.state.in_literal() {
            output.push(self.literal_line(raw, trimmed));
            return Step::Done;
        }

        let structural = first_structural_brace(trimmed);
        if let Some(literal) = first_data_literal_brace(trimmed)
            && structural.is_none_or(|brace| literal < brace)
        {
            self.state
                .enter_literal(leading_indent_width(raw), net_brace_depth(trimmed));
            trace!(
                target: SYNTAX_TARGET,
                depth = self.state.literal_depth,
                "entered multi-line data literal"
            );
            output.push(self.statement(trimmed));
            return Step::Done;
        }

        match structural {
            Some(brace) => self.structural_line(trimmed, brace, output),
            None => output.push(self.statement(trimmed)),
        }
        Step::Done
    }

    fn closing_line<'a>(
        &mut self,
        raw: &str,
        trimmed: &str,
        rest: &'a str,
        output: &mut Vec<String>,
    ) -> Step<'a> {
        if self.state.in_literal() {
            output.push(self.literal_line(raw, trimmed));
            return Step::Done;
        }

        if self.state.open_blocks > 0 {
            self.state.close_block();
            let remainder = strip_terminator(rest).trim_end();
            return if remainder.is_empty() {
                Step::Done
            } else {
                Step::Reprocess(remainder)
            };
        }

        warn!(
            target: SYNTAX_TARGET,
            line = trimmed,
            "closing brace without an open block"
        );
        output.push(self.statement(trimmed));
        Step::Done
    }

    fn structural_line(&mut self, trimmed: &str, brace: usize, output: &mut Vec<String>) {
        let head = trimmed.get(..brace).unwrap_or_default().trim();
        let tail = trimmed.get(brace + 1..).unwrap_or_default().trim();

        if !is_block_header(head) {
            output.push(self.statement(trimmed));
            return;
        }

        if head.ends_with(':') {
            output.push(self.indented(head));
        } else {
            output.push(self.indented(&format!("{head}:")));
        }
        self.state.open_block();

        if tail == "}" {
            output.push(self.indented("pass"));
            self.state.close_block();
            return;
        }

        if tail.is_empty() {
            return;
        }

        match tail.strip_suffix('}').filter(|_| net_brace_depth(tail) < 0) {
            Some(body) => {
                output.push(self.statement(body.trim_end()));
                self.state.close_block();
            }
            None => output.push(self.statement(tail)),
        }
    }

    /// Re-indents a line inside a data literal relative to the line that
    /// opened it, then updates the literal depth.
    ///
    /// The emitted indent is the relative level alone; the structural indent
    /// is not added.
    fn literal_line(&mut self, raw: &str, trimmed: &str) -> String {
        let offset = leading_indent_width(raw).checked_sub(self.state.literal_base_indent);
        let relative = offset.map_or(0, |columns| {
            let levels = columns.checked_div(self.width.get()).unwrap_or_default();
            if columns > 0 { levels.max(1) } else { levels }
        });

        let line = format!(
            "{}{}",
            self.unit.repeat(relative),
            strip_terminator(trimmed)
        );
        self.state.adjust_literal(net_brace_depth(trimmed));
        line
    }

    fn statement(&self, text: &str) -> String {
        self.indented(strip_terminator(text))
    }

    fn indented(&self, text: &str) -> String {
        format!("{}{text}", self.unit.repeat(self.state.indent_level))
    }
}
