//! Filesystem scanning: size aggregation, one-level listings and ordering
//!
//! - `aggregate`: total size of a directory, never fails
//! - `entry`: classify the entries of one directory into `DirEntryRecord`s
//! - `sort`: the size-descending, name-ascending order shared by every view
//!
//! Nothing here caches. Each call re-reads the filesystem, so a subdirectory
//! is sized once while its parent level is sorted and again when it is
//! rendered.

mod aggregate;
mod entry;
mod sort;

pub use aggregate::dir_size;
pub use entry::{
    DirEntryRecord, EntryKind, ErrorPolicy, LinkTarget, ListOptions, Selection, list_entries,
    list_sorted,
};
pub use sort::sort_entries;
