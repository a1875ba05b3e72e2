//! Per-line brace classification.
//!
//! The classifier is a stateless oracle over a single line. It scans left to
//! right tracking quote state and tags every `{` and `}` it meets:
//!
//! - braces inside a string literal are [`BraceKind::Inert`];
//! - inside an f-string, a `{` skips to its matching `}` and the whole
//!   embedded expression is inert, whatever its nesting depth;
//! - an opening brace outside strings is a [`BraceKind::DataLiteral`] when the
//!   text before it ends with `=`, `:`, `(`, `[`, `,` or `return`, and a
//!   [`BraceKind::Structural`] candidate otherwise;
//! - a closing brace outside strings is [`BraceKind::Closing`]. Which opener it
//!   closes is for the caller to track.
//!
//! Quote state never crosses line boundaries, so triple-quoted strings that
//! span lines are not modelled. Nested quoting inside an f-string expression
//! is not modelled either.

/// Role of a brace character within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BraceKind {
    /// An opening brace that may delimit a block of statements.
    Structural,
    /// An opening brace of a dict, set or comprehension literal.
    DataLiteral,
    /// A closing brace outside any string.
    Closing,
    /// A brace inside a string or an f-string expression.
    Inert,
}

impl BraceKind {
    /// Returns true for braces that open a structural block or a literal.
    #[must_use]
    pub const fn is_opening(self) -> bool {
        matches!(self, Self::Structural | Self::DataLiteral)
    }
}

/// A brace found on a line, with its byte offset and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BraceTag {
    /// Byte offset of the brace within the line.
    pub index: usize,
    /// How the brace was classified.
    pub kind: BraceKind,
}

impl BraceTag {
    const fn new(index: usize, kind: BraceKind) -> Self {
        Self { index, kind }
    }
}

/// Trailing tokens after which an opening brace starts a data literal.
const DATA_LITERAL_PREFIXES: &[&str] = &["=", ":", "(", "[", ",", "return"];

/// Letters that may prefix a Python string literal.
const STRING_PREFIX_LETTERS: &[u8] = b"rRbBuUfF";

/// Transient quote state for one line scan.
#[derive(Debug, Default)]
struct ScanState {
    quote: Option<u8>,
    interpolated: bool,
}

impl ScanState {
    fn toggle_quote(&mut self, quote: u8, interpolated: bool) {
        match self.quote {
            None => {
                self.quote = Some(quote);
                self.interpolated = interpolated;
            }
            Some(open) if open == quote => {
                self.quote = None;
                self.interpolated = false;
            }
            Some(_) => {}
        }
    }

    const fn in_string(&self) -> bool {
        self.quote.is_some()
    }
}

/// Tags every brace on `line`.
///
/// # Examples
///
/// ```ignore
/// let tags = classify("if ready {");
/// assert_eq!(tags[0].kind, BraceKind::Structural);
/// ```
#[must_use]
pub fn classify(line: &str) -> Vec<BraceTag> {
    let bytes = line.as_bytes();
    let mut tags = Vec::new();
    let mut state = ScanState::default();
    let mut index = 0;

    while let Some(&byte) = bytes.get(index) {
        match byte {
            b'"' | b'\'' if !is_escaped(bytes, index) => {
                let interpolated = !state.in_string() && has_interpolation_prefix(bytes, index);
                state.toggle_quote(byte, interpolated);
            }
            b'{' if state.interpolated => {
                let end = matching_close(bytes, index).unwrap_or(index);
                tag_inert_span(bytes, index, end, &mut tags);
                index = end;
            }
            b'{' | b'}' if state.in_string() => tags.push(BraceTag::new(index, BraceKind::Inert)),
            b'{' => tags.push(BraceTag::new(index, opening_kind(line, index))),
            b'}' => tags.push(BraceTag::new(index, BraceKind::Closing)),
            _ => {}
        }
        index += 1;
    }

    tags
}

/// Returns the byte offset of the first structural brace on `line`.
#[must_use]
pub fn first_structural_brace(line: &str) -> Option<usize> {
    classify(line)
        .into_iter()
        .find(|tag| tag.kind == BraceKind::Structural)
        .map(|tag| tag.index)
}

/// Returns the byte offset of the data literal that is still open at the end
/// of `line`.
///
/// Literals opened and closed on the same line yield `None`: only a literal
/// that continues onto following lines needs tracking.
#[must_use]
pub fn first_data_literal_brace(line: &str) -> Option<usize> {
    let mut depth = 0_usize;
    let mut start = None;

    for tag in classify(line) {
        match tag.kind {
            BraceKind::DataLiteral => {
                if depth == 0 {
                    start = Some(tag.index);
                }
                depth += 1;
            }
            BraceKind::Closing if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    start = None;
                }
            }
            _ => {}
        }
    }

    start.filter(|_| depth > 0)
}

/// Returns opening braces minus closing braces, ignoring inert braces.
#[must_use]
pub fn net_brace_depth(line: &str) -> isize {
    classify(line)
        .into_iter()
        .map(|tag| match tag.kind {
            kind if kind.is_opening() => 1,
            BraceKind::Closing => -1,
            _ => 0,
        })
        .sum()
}

/// Counts leading spaces and tabs.
#[must_use]
pub fn leading_indent_width(line: &str) -> usize {
    line.bytes()
        .take_while(|&byte| matches!(byte, b' ' | b'\t'))
        .count()
}

fn opening_kind(line: &str, index: usize) -> BraceKind {
    let before = line.get(..index).unwrap_or_default().trim_end();
    if DATA_LITERAL_PREFIXES
        .iter()
        .any(|prefix| before.ends_with(prefix))
    {
        BraceKind::DataLiteral
    } else {
        BraceKind::Structural
    }
}

/// A quote is escaped when preceded by an odd run of backslashes.
fn is_escaped(bytes: &[u8], index: usize) -> bool {
    let preceding = bytes.get(..index).unwrap_or_default();
    let backslashes = preceding
        .iter()
        .rev()
        .take_while(|&&byte| byte == b'\\')
        .count();
    !backslashes.is_multiple_of(2)
}

/// Checks whether the quote at `index` carries an `f` string prefix such as
/// `f"`, `F'`, `rf"` or `Fr'`.
fn has_interpolation_prefix(bytes: &[u8], index: usize) -> bool {
    let preceding = bytes.get(..index).unwrap_or_default();
    let prefix_len = preceding
        .iter()
        .rev()
        .take(2)
        .take_while(|&&byte| STRING_PREFIX_LETTERS.contains(&byte))
        .count();
    let prefix_start = index - prefix_len;
    let prefix = preceding.get(prefix_start..).unwrap_or_default();
    let standalone = prefix_start
        .checked_sub(1)
        .and_then(|before| bytes.get(before))
        .is_none_or(|byte| !byte.is_ascii_alphanumeric() && *byte != b'_');

    standalone && prefix.iter().any(|&byte| matches!(byte, b'f' | b'F'))
}

fn matching_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0_usize;
    for (offset, &byte) in bytes.get(open..)?.iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn tag_inert_span(bytes: &[u8], start: usize, end: usize, tags: &mut Vec<BraceTag>) {
    let span = bytes.get(start..=end).unwrap_or_default();
    tags.extend(
        span.iter()
            .enumerate()
            .filter(|&(_, &byte)| matches!(byte, b'{' | b'}'))
            .map(|(offset, _)| BraceTag::new(start + offset, BraceKind::Inert)),
    );
}
