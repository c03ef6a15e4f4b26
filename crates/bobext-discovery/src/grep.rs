//! Line-oriented regular-expression search in text files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use bobext_util::errors::BobExtError;
use regex::{Captures, Regex};

/// One line that matched an [`egrep`] pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepMatch {
    line_number: usize,
    line: String,
    groups: Vec<Option<String>>,
}

impl GrepMatch {
    fn from_captures(line_number: usize, line: &str, caps: &Captures<'_>) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            groups: caps
                .iter()
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }

    /// 1-based line number in the searched file.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The whole line, without its line terminator.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The text matched by the whole pattern.
    pub fn as_str(&self) -> &str {
        self.group(0).unwrap_or_default()
    }

    /// Capture group `index`; `0` is the whole match. `None` for groups that
    /// did not participate in the match or do not exist.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index)?.as_deref()
    }

    /// Parse capture group `index`, e.g. a numeric version define.
    pub fn parse_group<T: FromStr>(&self, index: usize) -> Option<T> {
        self.group(index)?.parse().ok()
    }

    /// Number of capture groups, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.groups.len().saturating_sub(1)
    }
}

/// Match `pattern` against every line of the file at `path`.
///
/// A line matches when the pattern matches starting at its first character;
/// the line terminator is removed first, so `$` matches at the end of the
/// line. Invalid UTF-8 is replaced rather than rejected. Results are in line
/// order.
pub fn egrep(path: impl AsRef<Path>, pattern: &str) -> Result<Vec<GrepMatch>, BobExtError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let regex = Regex::new(pattern)?;

    let mut matches = Vec::new();
    let mut buffer = Vec::new();
    let mut line_number = 0;
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;

        let text = String::from_utf8_lossy(&buffer);
        let line = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if let Some(caps) = regex.captures(line) {
            if caps.get(0).is_some_and(|m| m.start() == 0) {
                matches.push(GrepMatch::from_captures(line_number, line, &caps));
            }
        }
    }

    tracing::debug!(
        "egrep {}: {} match(es) for {pattern}",
        path.display(),
        matches.len()
    );
    Ok(matches)
}
