use crate::quiz::{Question, UNKNOWN_AUTHOR, UNKNOWN_QUOTE};
use crate::script::line::{trim_end_script, trim_script, trim_start_script};
use crate::script::{LineKind, Script};

/// Longest author name kept by default, in characters.
pub const DEFAULT_AUTHOR_LIMIT: usize = 499;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Author names longer than this are cut, never rejected. `None` keeps
    /// them whole.
    pub author_limit: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            author_limit: Some(DEFAULT_AUTHOR_LIMIT),
        }
    }
}

/// Tries to build a [`Question`] anchored at `index`.
///
/// Returns `None` when the anchor line is unusable or when no usable turn
/// follows it. That is the normal outcome for many random anchors and not
/// an error.
pub fn extract(script: &Script, index: usize, options: &ExtractOptions) -> Option<Question> {
    let line = script.line(index)?;

    let (author, quote) = match script.kind(index)? {
        LineKind::Unusable => return None,
        LineKind::Continuation => (
            preceding_author(script, index, options),
            trim_start_script(line).to_string(),
        ),
        LineKind::AuthorTurn => split_turn(line, options, false),
    };

    let (next_author, next_quote) = (index + 1..script.len()).find_map(|i| {
        let next = script.line(i)?;
        match script.kind(i)? {
            LineKind::Unusable => None,
            LineKind::Continuation => Some((author.clone(), trim_start_script(next).to_string())),
            LineKind::AuthorTurn => Some(split_turn(next, options, true)),
        }
    })?;

    Some(Question {
        line_num: index,
        author,
        quote: trim_end_script(&quote).to_string(),
        next_author,
        next_quote: trim_end_script(&next_quote).to_string(),
    })
}

// Scans toward the top of the script and stops at the first author turn.
// No "last author seen" state is kept between calls.
fn preceding_author(script: &Script, index: usize, options: &ExtractOptions) -> String {
    (0..index)
        .rev()
        .find(|&i| script.kind(i) == Some(LineKind::AuthorTurn))
        .and_then(|i| script.line(i))
        .map(|line| {
            let name = line.split_once(':').map_or(line, |(name, _)| name);
            author_name(name, options)
        })
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Splits `AUTHOR: quote` on the first colon.
///
/// A turn with no colon is all author and gets the unknown-quote sentinel.
/// Quotes of following turns lose their tab characters.
fn split_turn(line: &str, options: &ExtractOptions, drop_tabs: bool) -> (String, String) {
    match line.split_once(':') {
        Some((name, rest)) => {
            let rest = trim_start_script(rest);
            let quote: String = if drop_tabs {
                rest.chars().filter(|&c| c != '\t').collect()
            } else {
                rest.to_string()
            };
            (author_name(name, options), quote)
        }
        None => (author_name(line, options), UNKNOWN_QUOTE.to_string()),
    }
}

fn author_name(raw: &str, options: &ExtractOptions) -> String {
    let name = trim_script(raw);
    match options.author_limit {
        Some(limit) => name.chars().take(limit).collect(),
        None => name.to_string(),
    }
}
