pub mod line;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::ScriptError;
pub use line::LineKind;

/// The dialogue transcript, one entry per source line.
///
/// Built once and never mutated afterwards. Line kinds are classified at
/// load time so the extractor can scan in both directions without
/// re-inspecting text.
#[derive(Debug, Clone)]
pub struct Script {
    lines: Vec<String>,
    kinds: Vec<LineKind>,
}

impl Script {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let io_err = |source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let lines = read_lines(BufReader::new(file)).map_err(io_err)?;
        let script = Self::from_lines(lines)?;

        info!("Loaded {} lines from {}", script.len(), path.display());
        Ok(script)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ScriptError> {
        let lines = read_lines(reader).map_err(|source| ScriptError::Io {
            path: PathBuf::from("-"),
            source,
        })?;
        Self::from_lines(lines)
    }

    /// Builds a script from lines that are already split.
    ///
    /// Anything from the first carriage return or newline onwards is dropped.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ScriptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| {
                let mut line: String = line.into();
                if let Some(end) = line.find(|c| c == '\r' || c == '\n') {
                    line.truncate(end);
                }
                line
            })
            .collect();

        if lines.is_empty() {
            return Err(ScriptError::Empty);
        }

        let kinds: Vec<LineKind> = lines.iter().map(|l| LineKind::classify(l)).collect();
        debug!(
            "Classified script: {} author turns, {} continuations, {} unusable",
            kinds.iter().filter(|k| **k == LineKind::AuthorTurn).count(),
            kinds.iter().filter(|k| **k == LineKind::Continuation).count(),
            kinds.iter().filter(|k| **k == LineKind::Unusable).count(),
        );

        Ok(Self { lines, kinds })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    // Never true once loaded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn kind(&self, index: usize) -> Option<LineKind> {
        self.kinds.get(index).copied()
    }
}

// Lossy decoding: scripts in legacy encodings still load.
fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_line_endings() {
        let script = Script::from_reader(Cursor::new("Alice: Hi\r\nBob: Yo\n\n\tmore\r")).unwrap();
        assert_eq!(script.len(), 4);
        assert_eq!(script.line(0), Some("Alice: Hi"));
        assert_eq!(script.line(1), Some("Bob: Yo"));
        assert_eq!(script.line(2), Some(""));
        assert_eq!(script.line(3), Some("\tmore"));
        assert_eq!(script.line(4), None);
    }

    #[test]
    fn carriage_return_cuts_the_rest_of_the_line() {
        let script = Script::from_lines(["Alice: one\rtwo"]).unwrap();
        assert_eq!(script.line(0), Some("Alice: one"));
    }

    #[test]
    fn kinds_are_precomputed() {
        let script = Script::from_lines(["Alice: Hi", "\tcont", "", "..."]).unwrap();
        assert_eq!(script.kind(0), Some(LineKind::AuthorTurn));
        assert_eq!(script.kind(1), Some(LineKind::Continuation));
        assert_eq!(script.kind(2), Some(LineKind::Unusable));
        assert_eq!(script.kind(3), Some(LineKind::Unusable));
        assert_eq!(script.kind(4), None);
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(matches!(
            Script::from_reader(Cursor::new("")),
            Err(ScriptError::Empty)
        ));
        assert!(matches!(
            Script::from_lines(Vec::<String>::new()),
            Err(ScriptError::Empty)
        ));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let bytes: &[u8] = b"Ren\xe9: salut\nBob: hi\n";
        let script = Script::from_reader(bytes).unwrap();
        assert_eq!(script.len(), 2);
        assert!(script.line(0).unwrap().starts_with("Ren"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Script::open("/definitely/not/here.txt").unwrap_err();
        match err {
            ScriptError::Io { path, .. } => assert_eq!(path, PathBuf::from("/definitely/not/here.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
