//! DirsWalker - directories only

use std::io;
use std::path::Path;

use tracing::debug;

use super::config::WalkerConfig;
use crate::output::{Branch, Node, TreeLine, TreeOutput};
use crate::scan::{DirEntryRecord, ListOptions, list_sorted};

/// Renders the directory skeleton below a root, biggest first.
///
/// Unreadable directories are shown with size 0 and no children. Every level
/// is listed fresh when it is descended into.
pub struct DirsWalker {
    config: WalkerConfig,
}

impl DirsWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, sending one line per directory to `output`.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<()> {
        let dirs = subdirectories(root);
        self.print_level(&dirs, 0, None, output)
    }

    fn print_level<O: TreeOutput>(
        &self,
        dirs: &[DirEntryRecord],
        depth: usize,
        parent: Option<&Path>,
        output: &mut O,
    ) -> io::Result<()> {
        if self.config.at_max_depth(depth) {
            return Ok(());
        }

        for (i, dir) in dirs.iter().enumerate() {
            let branch = Branch::for_position(i, dirs.len());

            // Children must live under the directory that listed them.
            if parent.is_some_and(|p| !dir.path.starts_with(p)) {
                continue;
            }

            output.line(&TreeLine::new(
                depth,
                branch,
                Node::Subdir {
                    name: dir.name.clone(),
                    size: dir.size,
                },
            ))?;

            let children = subdirectories(&dir.path);
            if !children.is_empty() {
                self.print_level(&children, depth + 1, Some(&dir.path), output)?;
            }
        }

        Ok(())
    }
}

/// Sorted subdirectories of `path`; empty when it cannot be listed.
fn subdirectories(path: &Path) -> Vec<DirEntryRecord> {
    list_sorted(path, &ListOptions::dirs_only()).unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "cannot list subdirectories");
        Vec::new()
    })
}
