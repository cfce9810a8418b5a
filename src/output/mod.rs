//! Line-oriented output for the tree views
//!
//! Renderers never print directly. They hand [`TreeLine`]s and plain text to a
//! [`TreeOutput`] sink:
//!
//! - `StreamingFormatter` - writes to stdout as lines arrive, colored on a TTY
//! - `LineBuffer` - keeps plain lines in memory (tests, library callers)
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `line` - The `TreeLine` model and the `TreeOutput` trait
//! - `utils` - Indentation and connector helpers
//! - `streaming` - Colored stdout formatter
//! - `buffer` - In-memory formatter
//! - `report` - Headers and summaries printed around each tree

mod buffer;
mod config;
mod line;
mod report;
mod streaming;
mod utils;

pub use buffer::LineBuffer;
pub use config::OutputConfig;
pub use line::{Branch, Node, TreeLine, TreeOutput};
pub use report::{
    write_dirs_header, write_large_empty, write_large_header, write_large_summary,
    write_tree_footer, write_tree_header,
};
pub use streaming::StreamingFormatter;
pub use utils::{INDENT, indent};
