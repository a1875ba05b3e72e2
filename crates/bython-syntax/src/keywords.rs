//! Lexical markers and the block keyword table.

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Optional statement terminator stripped from emitted lines.
pub const STATEMENT_TERMINATOR: char = ';';

/// Token that marks the program entry point guard (`if __name__ == "__main__"`).
pub const ENTRY_POINT_MARKER: &str = "__main__";

/// Keywords that introduce a nested block, including their trailing separator
/// where the keyword never stands alone.
pub const BLOCK_KEYWORDS: &[&str] = &[
    "if ",
    "elif ",
    "else",
    "while ",
    "for ",
    "def ",
    "class ",
    "try",
    "except",
    "finally",
    "with ",
    "async def ",
    "async for ",
    "async with ",
    "match ",
    "case ",
];

/// Returns true when `text` opens a nested block.
///
/// Matching is purely syntactic: the trimmed text must start with one of
/// [`BLOCK_KEYWORDS`], equal a keyword without its separator, or mention the
/// [`ENTRY_POINT_MARKER`].
#[must_use]
pub fn is_block_header(text: &str) -> bool {
    let candidate = text.trim();
    let keyword_match = BLOCK_KEYWORDS
        .iter()
        .any(|keyword| candidate.starts_with(keyword) || candidate == keyword.trim_end());
    keyword_match || candidate.contains(ENTRY_POINT_MARKER)
}

/// Returns true when the trimmed line is a comment.
#[must_use]
pub fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with(COMMENT_MARKER)
}

/// Removes a single trailing statement terminator.
#[must_use]
pub fn strip_terminator(text: &str) -> &str {
    text.strip_suffix(STATEMENT_TERMINATOR).unwrap_or(text)
}
