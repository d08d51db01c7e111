use crate::config::Language;
use crate::layout;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// A source file found in `src/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    /// Relative to the project root, e.g. `src/main.c`.
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl SourceRecord {
    pub fn object_path(&self) -> PathBuf {
        layout::object_path(&self.path)
    }
}

/// Lists the sources directly inside `<root>/src` for `language`.
///
/// Subdirectories are not entered. Results are sorted by file name so the
/// compile order and `compile_commands.json` are reproducible. A missing or
/// empty `src/` gives an empty list; deciding that this is fatal is up to the
/// caller.
pub fn scan(root: &Path, language: Language) -> Vec<SourceRecord> {
    let accepted = language.source_extensions();
    let mut sources = Vec::new();

    for entry in WalkDir::new(root.join(layout::SRC_DIR))
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let is_source = extension(entry.file_name())
            .is_some_and(|ext| accepted.iter().any(|a| a.as_bytes() == ext));
        if !is_source || !entry.path().is_file() {
            continue;
        }

        let path = Path::new(layout::SRC_DIR).join(entry.file_name());
        sources.push(SourceRecord {
            modified: super::mtime_or_epoch(entry.path()),
            path,
        });
    }

    sources
}

/// Everything after the last `.` in a file name. Unlike
/// `Path::extension`, a name like `.c` counts as having extension `c`.
fn extension(name: &OsStr) -> Option<&[u8]> {
    let bytes = name.as_encoded_bytes();
    let dot = bytes.iter().rposition(|&b| b == b'.')?;
    Some(&bytes[dot + 1..])
}
