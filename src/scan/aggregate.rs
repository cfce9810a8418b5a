//! Recursive directory size

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Total size in bytes of every regular file below `path`.
///
/// Symlinks are skipped and never followed (the starting path itself is
/// listed through a link, as `read_dir` does). Any entry or listing that
/// cannot be read contributes zero, so this never fails.
///
/// Pending directories live on an explicit stack rather than the call stack;
/// the sum is order-independent so the result equals the recursive
/// definition.
pub fn dir_size(path: &Path) -> u64 {
    let mut total: u64 = 0;
    let mut pending: Vec<PathBuf> = vec![path.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(e) => e,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "cannot list directory, counting 0");
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!(path = %dir.display(), error = %e, "cannot read entry, counting 0");
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    debug!(path = %entry.path().display(), error = %e, "cannot stat entry");
                    continue;
                }
            };

            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_file() {
                match entry.metadata() {
                    Ok(meta) => total = total.saturating_add(meta.len()),
                    Err(e) => {
                        debug!(path = %entry.path().display(), error = %e, "cannot stat file");
                    }
                }
            } else if file_type.is_dir() {
                pending.push(entry.path());
            }
        }
    }

    total
}
