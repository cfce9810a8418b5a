//! sizetree - disk usage as a size-ordered tree
//!
//! Three views over the same scan primitives:
//!
//! - [`TreeWalker`]: every file and directory with its size
//! - [`DirsWalker`]: directories only
//! - [`large`]: files above a threshold, grouped by directory

pub mod cli;
pub mod error;
pub mod large;
pub mod output;
pub mod scan;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{AnalyzerError, RootProblem};
pub use large::{
    LargeFile, LargeFileGroup, Threshold, find_large_files, group_by_directory, render_groups,
};
pub use output::{LineBuffer, OutputConfig, StreamingFormatter, TreeLine, TreeOutput};
pub use scan::{DirEntryRecord, ErrorPolicy, ListOptions, dir_size, list_sorted, sort_entries};
pub use size::{FormattedSize, format_size};
pub use tree::{DirsWalker, TreeWalker, WalkerConfig};
