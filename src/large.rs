//! Large-file report
//!
//! Instead of walking a tree level by level, this view collects every file
//! above a threshold in one pass, groups the hits by containing directory and
//! prints the groups as a flattened tree.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use tracing::debug;

use crate::output::{Branch, Node, TreeLine, TreeOutput};

/// Threshold used when none (or an unparsable one) is given, in MB.
pub const DEFAULT_THRESHOLD_MB: f64 = 98.0;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size threshold in MB, remembering whether it came from the command line.
///
/// The default prints as a whole number (`98`); a value given by the user
/// prints as a float, so `1` shows as `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub mb: f64,
    pub explicit: bool,
}

impl Threshold {
    pub fn explicit(mb: f64) -> Self {
        Self { mb, explicit: true }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            mb: DEFAULT_THRESHOLD_MB,
            explicit: false,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mb.is_nan() {
            write!(f, "nan")
        } else if self.explicit && self.mb.fract() == 0.0 {
            write!(f, "{:.1}", self.mb)
        } else {
            write!(f, "{}", self.mb)
        }
    }
}

/// A file that passed the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeFile {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
}

/// Large files sharing a containing directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeFileGroup {
    /// Directory relative to the scan root; empty for the root itself.
    pub relative_dir: String,
    /// Biggest first. Equal sizes keep the order the walk found them in.
    pub files: Vec<LargeFile>,
}

impl LargeFileGroup {
    /// Path components of `relative_dir`; none for the root group.
    pub fn components(&self) -> Vec<&str> {
        if self.relative_dir.is_empty() {
            Vec::new()
        } else {
            self.relative_dir.split(MAIN_SEPARATOR_STR).collect()
        }
    }
}

/// Strictly greater than `threshold_mb` megabytes (1 MB = 1024 * 1024 bytes).
pub fn is_large_file(size: u64, threshold_mb: f64) -> bool {
    size as f64 > threshold_mb * BYTES_PER_MB
}

/// Every regular file below `root` bigger than `threshold_mb`, depth-first in
/// directory-listing order.
///
/// Symlinks are skipped. A file that cannot be stat'ed is left out; a
/// directory that cannot be listed contributes nothing.
pub fn find_large_files(root: &Path, threshold_mb: f64) -> Vec<LargeFile> {
    let mut found = Vec::new();
    collect_large(root, threshold_mb, &mut found);
    found
}

fn collect_large(path: &Path, threshold_mb: f64, found: &mut Vec<LargeFile>) {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot list directory");
            return;
        }
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_symlink() {
            continue;
        }

        let entry_path = entry.path();
        if file_type.is_file() {
            match entry.metadata() {
                Ok(meta) if is_large_file(meta.len(), threshold_mb) => found.push(LargeFile {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    size: meta.len(),
                    path: entry_path,
                }),
                Ok(_) => {}
                Err(e) => debug!(path = %entry_path.display(), error = %e, "cannot stat file"),
            }
        } else if file_type.is_dir() {
            collect_large(&entry_path, threshold_mb, found);
        }
    }
}

/// Sum of the sizes of `files`.
pub fn total_size(files: &[LargeFile]) -> u64 {
    files
        .iter()
        .fold(0u64, |acc, f| acc.saturating_add(f.size))
}

/// Group `files` by containing directory relative to `root`.
///
/// Groups come out ordered by relative path (root group first); within a
/// group files are sorted by size descending, stable on ties.
pub fn group_by_directory(files: Vec<LargeFile>, root: &Path) -> Vec<LargeFileGroup> {
    let mut groups: BTreeMap<String, Vec<LargeFile>> = BTreeMap::new();

    for file in files {
        let key = relative_dir(&file.path, root);
        groups.entry(key).or_default().push(file);
    }

    groups
        .into_iter()
        .map(|(relative_dir, mut files)| {
            files.sort_by_key(|f| Reverse(f.size));
            LargeFileGroup {
                relative_dir,
                files,
            }
        })
        .collect()
}

fn relative_dir(file: &Path, root: &Path) -> String {
    let Some(parent) = file.parent() else {
        return String::new();
    };
    match parent.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(MAIN_SEPARATOR_STR),
        Err(_) => parent.to_string_lossy().into_owned(),
    }
}

/// Render groups as a flattened tree.
///
/// Every component of a nested group path gets its own line, so groups that
/// share a prefix repeat the shared components.
pub fn render_groups<O: TreeOutput>(groups: &[LargeFileGroup], output: &mut O) -> io::Result<()> {
    let group_count = groups.len();

    for (i, group) in groups.iter().enumerate() {
        let parts = group.components();

        if parts.is_empty() {
            output.line(&TreeLine::new(0, Branch::Bare, Node::RootGroup))?;
        } else {
            for (j, part) in parts.iter().enumerate() {
                let branch = if i + 1 == group_count && j + 1 == parts.len() {
                    Branch::Last
                } else {
                    Branch::Middle
                };
                output.line(&TreeLine::new(
                    j,
                    branch,
                    Node::PathComponent {
                        name: (*part).to_string(),
                    },
                ))?;
            }
        }

        let file_depth = parts.len() + 1;
        for (k, file) in group.files.iter().enumerate() {
            output.line(&TreeLine::new(
                file_depth,
                Branch::for_position(k, group.files.len()),
                Node::LargeFile {
                    name: file.name.clone(),
                    size: file.size,
                },
            ))?;
        }

        output.blank()?;
    }

    Ok(())
}
