//! One-level directory listing with per-entry classification

use std::fs::{self, DirEntry, FileType};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::aggregate::dir_size;
use super::sort::sort_entries;
use crate::error::AnalyzerError;

/// What a symlink resolves to, in host stat semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    File,
    Directory,
    Other,
    Dangling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink(LinkTarget),
    /// Sockets, FIFOs, devices.
    Other,
}

/// One entry of a directory listing, sized at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryRecord {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
}

impl DirEntryRecord {
    /// Directory, following symlinks.
    pub fn is_dir(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::Directory | EntryKind::Symlink(LinkTarget::Directory)
        )
    }

    /// Regular file, following symlinks.
    pub fn is_file(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::File | EntryKind::Symlink(LinkTarget::File)
        )
    }

    pub fn is_symlink(&self) -> bool {
        matches!(self.kind, EntryKind::Symlink(_))
    }
}

/// How a listing reacts when the filesystem refuses a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the listing and hand the error to the caller.
    Propagate,
    /// Keep going: unreadable listings are empty, unreadable sizes are 0.
    ZeroFill,
}

/// Which entries a listing keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Everything, classified through symlinks.
    All,
    /// Real directories only; symlinks are dropped.
    Directories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub policy: ErrorPolicy,
    pub selection: Selection,
}

impl ListOptions {
    /// Full tree listing: every entry, errors abort the level.
    pub fn full_tree() -> Self {
        Self {
            policy: ErrorPolicy::Propagate,
            selection: Selection::All,
        }
    }

    /// Directories-only listing: errors degrade to empty/zero.
    pub fn dirs_only() -> Self {
        Self {
            policy: ErrorPolicy::ZeroFill,
            selection: Selection::Directories,
        }
    }
}

/// List the immediate entries of `path`, sized but not sorted.
pub fn list_entries(
    path: &Path,
    options: &ListOptions,
) -> Result<Vec<DirEntryRecord>, AnalyzerError> {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(e) => return recover(options.policy, AnalyzerError::from_io(path, e), Vec::new()),
    };

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                recover(options.policy, AnalyzerError::from_io(path, e), ())?;
                continue;
            }
        };
        if let Some(record) = classify(&entry, options)? {
            records.push(record);
        }
    }

    trace!(path = %path.display(), count = records.len(), "listed directory");
    Ok(records)
}

/// [`list_entries`] followed by [`sort_entries`].
pub fn list_sorted(
    path: &Path,
    options: &ListOptions,
) -> Result<Vec<DirEntryRecord>, AnalyzerError> {
    let mut records = list_entries(path, options)?;
    sort_entries(&mut records);
    Ok(records)
}

fn classify(
    entry: &DirEntry,
    options: &ListOptions,
) -> Result<Option<DirEntryRecord>, AnalyzerError> {
    let path = entry.path();
    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) => return recover(options.policy, AnalyzerError::from_io(&path, e), None),
    };

    let kind = entry_kind(&path, file_type);
    let keep = match options.selection {
        Selection::All => true,
        Selection::Directories => kind == EntryKind::Directory,
    };
    if !keep {
        return Ok(None);
    }

    let name = entry.file_name().to_string_lossy().into_owned();
    let mut record = DirEntryRecord {
        name,
        path,
        kind,
        size: 0,
    };
    record.size = match entry_size(&record) {
        Ok(size) => size,
        Err(e) => recover(options.policy, e, 0)?,
    };

    Ok(Some(record))
}

fn entry_kind(path: &Path, file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        let target = match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => LinkTarget::Directory,
            Ok(meta) if meta.is_file() => LinkTarget::File,
            Ok(_) => LinkTarget::Other,
            Err(_) => LinkTarget::Dangling,
        };
        EntryKind::Symlink(target)
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Directories are aggregated; everything else is stat'ed through links.
fn entry_size(record: &DirEntryRecord) -> Result<u64, AnalyzerError> {
    if record.is_dir() {
        return Ok(dir_size(&record.path));
    }
    fs::metadata(&record.path)
        .map(|meta| meta.len())
        .map_err(|e| AnalyzerError::from_io(&record.path, e))
}

/// Apply `policy` to `err`: propagate it, or log it and use `fallback`.
fn recover<T>(policy: ErrorPolicy, err: AnalyzerError, fallback: T) -> Result<T, AnalyzerError> {
    match policy {
        ErrorPolicy::Propagate => Err(err),
        ErrorPolicy::ZeroFill => {
            debug!(error = %err, "recovered from filesystem error");
            Ok(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    fn names(records: &[DirEntryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_full_listing_classifies_and_sizes() {
        let dir = TestDir::new();
        dir.add_sized("file.bin", 30);
        dir.add_sized("sub/inner.bin", 70);
        dir.add_sized("sub/more/deep.bin", 5);

        let records = list_sorted(dir.path(), &ListOptions::full_tree()).unwrap();
        assert_eq!(names(&records), vec!["sub", "file.bin"]);
        assert_eq!(records[0].kind, EntryKind::Directory);
        assert_eq!(records[0].size, 75);
        assert_eq!(records[1].kind, EntryKind::File);
        assert_eq!(records[1].size, 30);
    }

    #[test]
    fn test_listing_is_one_level() {
        let dir = TestDir::new();
        dir.add_sized("a/b/c.bin", 1);
        let records = list_entries(dir.path(), &ListOptions::full_tree()).unwrap();
        assert_eq!(names(&records), vec!["a"]);
    }

    #[test]
    fn test_dirs_only_drops_files() {
        let dir = TestDir::new();
        dir.add_sized("file.bin", 500);
        dir.add_sized("small/x.bin", 1);
        dir.add_sized("big/y.bin", 2);

        let records = list_sorted(dir.path(), &ListOptions::dirs_only()).unwrap();
        assert_eq!(names(&records), vec!["big", "small"]);
        assert!(records.iter().all(DirEntryRecord::is_dir));
    }

    #[test]
    fn test_missing_directory_per_policy() {
        let dir = TestDir::new();
        let missing = dir.path().join("gone");

        let err = list_entries(&missing, &ListOptions::full_tree()).unwrap_err();
        assert!(matches!(err, AnalyzerError::NotFound { .. }));

        let records = list_entries(&missing, &ListOptions::dirs_only()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_to_file_is_listed_as_file_in_full_tree() {
        use std::os::unix::fs::symlink;

        let dir = TestDir::new();
        let target = dir.add_sized("target.bin", 40);
        symlink(&target, dir.path().join("link.bin")).expect("Failed to create symlink");

        let records = list_sorted(dir.path(), &ListOptions::full_tree()).unwrap();
        assert_eq!(names(&records), vec!["link.bin", "target.bin"]);
        let link = &records[0];
        assert_eq!(link.kind, EntryKind::Symlink(LinkTarget::File));
        assert!(link.is_file());
        assert!(link.is_symlink());
        assert_eq!(link.size, 40);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_excluded_from_dirs_only() {
        use std::os::unix::fs::symlink;

        let dir = TestDir::new();
        dir.add_sized("real/a.bin", 3);
        symlink(dir.path().join("real"), dir.path().join("alias")).expect("Failed to symlink");

        let records = list_sorted(dir.path(), &ListOptions::dirs_only()).unwrap();
        assert_eq!(names(&records), vec!["real"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_symlink_per_policy() {
        use std::os::unix::fs::symlink;

        let dir = TestDir::new();
        dir.add_sized("real.bin", 3);
        symlink("nowhere.bin", dir.path().join("broken")).expect("Failed to symlink");

        // A full-tree listing gives up on the whole level.
        let err = list_entries(dir.path(), &ListOptions::full_tree()).unwrap_err();
        assert!(matches!(err, AnalyzerError::NotFound { .. }));

        let zero_fill = ListOptions {
            policy: ErrorPolicy::ZeroFill,
            selection: Selection::All,
        };
        let records = list_sorted(dir.path(), &zero_fill).unwrap();
        assert_eq!(names(&records), vec!["real.bin", "broken"]);
        assert_eq!(records[1].kind, EntryKind::Symlink(LinkTarget::Dangling));
        assert_eq!(records[1].size, 0);
    }
}
