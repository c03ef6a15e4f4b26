//! Requirements files: one requirement per line, `#` comments, blank lines
//! ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read requirement entries from `reader`.
///
/// Lines are trimmed; empty lines and lines starting with `#` are dropped.
/// Everything else is kept verbatim, in order, including version
/// constraints such as `package-a >= 0.42`. No validation or deduplication
/// is performed.
pub fn load_requirements<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut requirements = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        requirements.push(entry.to_string());
    }
    Ok(requirements)
}

/// Open `path` and read its requirement entries.
pub fn load_requirements_file(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let requirements = load_requirements(BufReader::new(file))?;
    tracing::debug!(
        "Loaded {} requirement(s) from {}",
        requirements.len(),
        path.display()
    );
    Ok(requirements)
}
