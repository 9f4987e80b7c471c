/// How a raw script line takes part in a dialogue.
///
/// Only the first byte is inspected. Scripts are hand written and have no
/// real grammar, so this is a best-effort heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `AUTHOR: quote`
    AuthorTurn,
    /// Whitespace-indented quote that continues the previous author.
    Continuation,
    /// Blank lines, punctuation, anything else. Skipped silently.
    Unusable,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        match line.as_bytes().first() {
            Some(b) if b.is_ascii_alphanumeric() => LineKind::AuthorTurn,
            Some(b' ') | Some(b'\t') => LineKind::Continuation,
            _ => LineKind::Unusable,
        }
    }
}

/// Single-byte whitespace as the script format understands it.
pub(crate) fn is_script_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

pub(crate) fn trim_start_script(s: &str) -> &str {
    s.trim_start_matches(is_script_whitespace)
}

pub(crate) fn trim_end_script(s: &str) -> &str {
    s.trim_end_matches(is_script_whitespace)
}

pub(crate) fn trim_script(s: &str) -> &str {
    trim_end_script(trim_start_script(s))
}
