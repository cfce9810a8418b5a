//! Shared helpers for line layout

/// Leading whitespace added per depth level.
pub const INDENT: &str = "    ";

/// Leading whitespace for a line at `depth`: four spaces per level.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}
