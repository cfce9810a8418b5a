//! Glue shared by the three binaries: root resolution, argument fallbacks,
//! color detection, logging setup and the per-view report sequences.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Component, Path, PathBuf};

use crate::error::{AnalyzerError, RootProblem};
use crate::large::{self, Threshold};
use crate::output::{self, TreeOutput};
use crate::scan::dir_size;
use crate::tree::{DirsWalker, TreeWalker, WalkerConfig};

/// Environment variable holding the stderr log level (`error` .. `trace`).
pub const LOG_ENV: &str = "SIZETREE_LOG";

/// Install the stderr log subscriber. Defaults to `warn`.
pub fn init_logging() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::WARN);

    // A subscriber may already be set when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

/// Determine whether to use color output based on the environment.
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    io::stdout().is_terminal()
}

/// Make `path` absolute (resolving symlinks where it exists) and check that
/// it is a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf, AnalyzerError> {
    let resolved = normalize(path);

    match fs::metadata(&resolved) {
        Ok(meta) if meta.is_dir() => Ok(resolved),
        Ok(_) => Err(AnalyzerError::InvalidRoot {
            path: resolved,
            reason: RootProblem::NotADirectory,
        }),
        Err(_) => Err(AnalyzerError::InvalidRoot {
            path: resolved,
            reason: RootProblem::Missing,
        }),
    }
}

/// Canonicalize the longest existing prefix of `path`, then apply the rest
/// lexically: `..` pops a component and `.` is dropped.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    if let Ok(canonical) = fs::canonicalize(&absolute) {
        return canonical;
    }

    for prefix in absolute.ancestors().skip(1) {
        let Ok(mut base) = fs::canonicalize(prefix) else {
            continue;
        };
        let Ok(rest) = absolute.strip_prefix(prefix) else {
            continue;
        };
        for component in rest.components() {
            match component {
                Component::ParentDir => {
                    base.pop();
                }
                Component::Normal(name) => base.push(name),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
        return base;
    }

    absolute
}

/// Parse a threshold in MB. `None` means the default.
pub fn parse_threshold(raw: Option<&str>) -> Result<Threshold, AnalyzerError> {
    match raw {
        None => Ok(Threshold::default()),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .map(Threshold::explicit)
            .map_err(|_| AnalyzerError::InvalidThreshold {
                value: s.to_string(),
            }),
    }
}

/// Full tree view: header, tree, trailing blank line.
pub fn run_tree<O: TreeOutput>(root: &Path, out: &mut O) -> io::Result<()> {
    let total = dir_size(root);
    output::write_tree_header(out, root, total)?;
    TreeWalker::new(WalkerConfig::default()).walk(root, out)?;
    output::write_tree_footer(out)
}

/// Directories-only view: header and tree.
pub fn run_dirs<O: TreeOutput>(root: &Path, out: &mut O) -> io::Result<()> {
    let total = dir_size(root);
    output::write_dirs_header(out, root, total)?;
    DirsWalker::new(WalkerConfig::default()).walk(root, out)
}

/// Large-files view. Returns how many files passed the threshold.
pub fn run_large<O: TreeOutput>(
    root: &Path,
    threshold: Threshold,
    out: &mut O,
) -> io::Result<usize> {
    output::write_large_header(out, root, threshold)?;

    let files = large::find_large_files(root, threshold.mb);
    if files.is_empty() {
        output::write_large_empty(out, threshold)?;
        return Ok(0);
    }

    let count = files.len();
    output::write_large_summary(out, count, large::total_size(&files), dir_size(root))?;
    let groups = large::group_by_directory(files, root);
    large::render_groups(&groups, out)?;
    Ok(count)
}
