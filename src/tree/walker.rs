//! TreeWalker - files and directories with sizes

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::config::WalkerConfig;
use crate::output::{Branch, Node, TreeLine, TreeOutput};
use crate::scan::{ListOptions, dir_size, list_sorted};

/// Renders every file and directory below a root, biggest first.
///
/// A level whose listing fails (unreadable directory, entry that cannot be
/// stat'ed while sorting) renders no children. An entry that disappears
/// between listing and rendering is shown with an error marker.
pub struct TreeWalker {
    config: WalkerConfig,
    stat: fn(&Path) -> io::Result<fs::Metadata>,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            stat: |path| fs::metadata(path),
        }
    }

    /// Replace the render-time stat, e.g. to simulate entries that vanish
    /// after listing.
    pub fn with_stat(mut self, stat: fn(&Path) -> io::Result<fs::Metadata>) -> Self {
        self.stat = stat;
        self
    }

    /// Walk `root`, sending one line per rendered entry to `output`.
    /// The root itself is not printed.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<()> {
        self.walk_dir(root, 0, 0, output)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        indent: usize,
        current_depth: usize,
        output: &mut O,
    ) -> io::Result<()> {
        let entries = match list_sorted(path, &ListOptions::full_tree()) {
            Ok(e) => e,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable level");
                return Ok(());
            }
        };

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            // Checked per entry: the level has already been listed and sized.
            if self.config.at_max_depth(current_depth) {
                continue;
            }

            let branch = Branch::for_position(i, total);
            if !entry.is_dir() && !entry.is_file() {
                continue;
            }

            let meta = match (self.stat)(&entry.path) {
                Ok(m) => m,
                Err(e) => {
                    debug!(path = %entry.path.display(), error = %e, "entry vanished after listing");
                    output.line(&TreeLine::new(
                        indent,
                        branch,
                        Node::Inaccessible {
                            name: entry.name.clone(),
                        },
                    ))?;
                    continue;
                }
            };

            if entry.is_dir() {
                // Sized again: nothing is cached between levels.
                let size = dir_size(&entry.path);
                output.line(&TreeLine::new(
                    indent,
                    branch,
                    Node::Dir {
                        name: entry.name.clone(),
                        size,
                    },
                ))?;
                self.walk_dir(&entry.path, indent + 1, current_depth + 1, output)?;
            } else {
                output.line(&TreeLine::new(
                    indent,
                    branch,
                    Node::File {
                        name: entry.name.clone(),
                        size: meta.len(),
                    },
                ))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LineBuffer;
    use crate::test_utils::TestDir;

    fn render(root: &Path, config: WalkerConfig) -> Vec<String> {
        let mut out = LineBuffer::new();
        TreeWalker::new(config).walk(root, &mut out).unwrap();
        out.into_lines()
    }

    #[test]
    fn test_full_tree_layout() {
        let dir = TestDir::new();
        dir.add_sized("small.txt", 10);
        dir.add_sized("big.bin", 3000);
        dir.add_sized("docs/a.md", 1024);
        dir.add_sized("docs/b.md", 1024);

        let lines = render(dir.path(), WalkerConfig::default());
        assert_eq!(
            lines,
            vec![
                "├── big.bin - 2.93 KB",
                "├── [docs] (dir) - 2.0 KB",
                "    ├── a.md - 1.0 KB",
                "    └── b.md - 1.0 KB",
                "└── small.txt - 10.0 B",
            ]
        );
    }

    #[test]
    fn test_last_sibling_at_every_depth() {
        let dir = TestDir::new();
        dir.add_sized("a/b/c/leaf.bin", 5);

        let lines = render(dir.path(), WalkerConfig::default());
        assert_eq!(
            lines,
            vec![
                "└── [a] (dir) - 5.0 B",
                "    └── [b] (dir) - 5.0 B",
                "        └── [c] (dir) - 5.0 B",
                "            └── leaf.bin - 5.0 B",
            ]
        );
    }

    #[test]
    fn test_equal_sizes_break_ties_by_name() {
        let dir = TestDir::new();
        dir.add_sized("b.bin", 10);
        dir.add_sized("a.bin", 10);
        dir.add_sized("c.bin", 5);

        let lines = render(dir.path(), WalkerConfig::default());
        assert_eq!(
            lines,
            vec!["├── a.bin - 10.0 B", "├── b.bin - 10.0 B", "└── c.bin - 5.0 B"]
        );
    }

    #[test]
    fn test_max_depth_cuts_entries() {
        let dir = TestDir::new();
        dir.add_sized("top.bin", 1);
        dir.add_sized("level1/mid.bin", 2);
        dir.add_sized("level1/level2/deep.bin", 3);

        let lines = render(dir.path(), WalkerConfig::with_max_depth(1));
        assert_eq!(lines, vec!["├── [level1] (dir) - 5.0 B", "└── top.bin - 1.0 B"]);

        assert!(render(dir.path(), WalkerConfig::with_max_depth(0)).is_empty());
    }

    #[test]
    fn test_entry_failing_restat_gets_error_marker() {
        fn vanishing(path: &Path) -> io::Result<fs::Metadata> {
            let name = path.file_name().and_then(|n| n.to_str());
            if matches!(name, Some("gone.bin" | "gone")) {
                Err(io::Error::from(io::ErrorKind::NotFound))
            } else {
                fs::metadata(path)
            }
        }

        let dir = TestDir::new();
        dir.add_sized("keep.bin", 30);
        dir.add_sized("gone.bin", 20);
        dir.add_sized("gone/inner.bin", 10);

        let mut out = LineBuffer::new();
        TreeWalker::new(WalkerConfig::default())
            .with_stat(vanishing)
            .walk(dir.path(), &mut out)
            .unwrap();
        // The failed directory is not descended into.
        assert_eq!(
            out.into_lines(),
            vec![
                "├── keep.bin - 30.0 B",
                "├── gone.bin [error al acceder]",
                "└── gone [error al acceder]",
            ]
        );
    }

    #[test]
    fn test_empty_directory_renders_nothing() {
        let dir = TestDir::new();
        assert!(render(dir.path(), WalkerConfig::default()).is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_file_is_shown_but_not_counted() {
        use std::os::unix::fs::symlink;

        let dir = TestDir::new();
        dir.add_sized("sub/real.bin", 100);
        let outside = TestDir::new();
        let target = outside.add_sized("target.bin", 2048);
        symlink(&target, dir.path().join("sub/link.bin")).expect("Failed to create symlink");

        let lines = render(dir.path(), WalkerConfig::default());
        // The directory total skips the link, the listing still shows it.
        assert_eq!(
            lines,
            vec![
                "└── [sub] (dir) - 100.0 B",
                "    ├── link.bin - 2.0 KB",
                "    └── real.bin - 100.0 B",
            ]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_symlink_hides_its_level() {
        use std::os::unix::fs::symlink;

        let dir = TestDir::new();
        dir.add_sized("ok/file.bin", 1);
        dir.add_sized("bad/file.bin", 2);
        symlink("missing", dir.path().join("bad/broken")).expect("Failed to create symlink");

        let lines = render(dir.path(), WalkerConfig::default());
        assert_eq!(
            lines,
            vec![
                "├── [bad] (dir) - 2.0 B",
                "└── [ok] (dir) - 1.0 B",
                "    └── file.bin - 1.0 B",
            ]
        );
    }
}
