//! Script loading
//!
//! Reads a script file line by line and joins the lines with no separator.
//! Line breaks are not restored, so scripts that rely on newlines to end
//! statements will not evaluate the way they read on disk.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Script contents with every line terminator removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptText(String);

impl ScriptText {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Append one line, dropping any `\n` or `\r` it carries
    pub fn push_line(&mut self, line: &str) {
        self.0.extend(line.chars().filter(|c| !matches!(c, '\n' | '\r')));
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ScriptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of loading a script
///
/// Read failures are not propagated. `Ignored` keeps the error visible while
/// the caller goes on with whatever text was read before it.
#[derive(Debug)]
pub enum LoadOutcome {
    Complete(ScriptText),
    Ignored { partial: ScriptText, error: io::Error },
}

impl LoadOutcome {
    pub fn text(&self) -> &ScriptText {
        match self {
            LoadOutcome::Complete(text) => text,
            LoadOutcome::Ignored { partial, .. } => partial,
        }
    }

    pub fn ignored_error(&self) -> Option<&io::Error> {
        match self {
            LoadOutcome::Complete(_) => None,
            LoadOutcome::Ignored { error, .. } => Some(error),
        }
    }

    /// Split into the text to evaluate and the error that was ignored
    pub fn into_parts(self) -> (ScriptText, Option<io::Error>) {
        match self {
            LoadOutcome::Complete(text) => (text, None),
            LoadOutcome::Ignored { partial, error } => (partial, Some(error)),
        }
    }
}

/// Load a script file. The file is closed before this returns.
pub fn load_script(path: &Path) -> LoadOutcome {
    match File::open(path) {
        Ok(file) => read_script(BufReader::new(file)),
        Err(error) => LoadOutcome::Ignored {
            partial: ScriptText::new(),
            error,
        },
    }
}

/// Concatenate every line of `reader`. Invalid UTF-8 is replaced rather
/// than treated as a read failure.
pub fn read_script<R: BufRead>(mut reader: R) -> LoadOutcome {
    let mut text = ScriptText::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return LoadOutcome::Complete(text),
            Ok(_) => text.push_line(&String::from_utf8_lossy(&buf)),
            Err(error) => {
                return LoadOutcome::Ignored {
                    partial: text,
                    error,
                }
            }
        }
    }
}
