use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Modification time of `path`, or the epoch if it cannot be read.
pub fn mtime_or_epoch(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// A source is stale when it is strictly newer than its object.
///
/// Missing files count as the epoch, so a missing object is stale against
/// any existing source, and a missing source is never stale.
pub fn is_stale(source: &Path, object: &Path) -> bool {
    mtime_or_epoch(source) > mtime_or_epoch(object)
}
