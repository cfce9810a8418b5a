//! The unit of output shared by every view

use std::fmt;
use std::io;

use super::utils::indent;
use crate::size::format_size;

/// Connector drawn before a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// `├── `: more siblings follow.
    Middle,
    /// `└── `: last sibling.
    Last,
    /// No connector.
    Bare,
}

impl Branch {
    /// Connector for position `index` among `len` siblings.
    pub fn for_position(index: usize, len: usize) -> Self {
        if index + 1 == len {
            Branch::Last
        } else {
            Branch::Middle
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Branch::Middle => "├── ",
            Branch::Last => "└── ",
            Branch::Bare => "",
        }
    }
}

/// What a line describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Full tree directory: `[name] (dir) - 1.0 KB`
    Dir { name: String, size: u64 },
    /// Full tree file: `name - 1.0 KB`
    File { name: String, size: u64 },
    /// Entry that vanished or became unreadable after listing.
    Inaccessible { name: String },
    /// Directories-only view: `[name] - 1.0 KB`
    Subdir { name: String, size: u64 },
    /// One component of a large-file group path: `[name]/`
    PathComponent { name: String },
    /// Group of large files sitting directly in the scan root.
    RootGroup,
    /// Large-files view: `→ name - 1.0 KB`
    LargeFile { name: String, size: u64 },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Dir { name, size } => write!(f, "[{}] (dir) - {}", name, format_size(*size)),
            Node::File { name, size } => write!(f, "{} - {}", name, format_size(*size)),
            Node::Inaccessible { name } => write!(f, "{} [error al acceder]", name),
            Node::Subdir { name, size } => write!(f, "[{}] - {}", name, format_size(*size)),
            Node::PathComponent { name } => write!(f, "[{}]/", name),
            Node::RootGroup => write!(f, "[Directorio raíz]/"),
            Node::LargeFile { name, size } => write!(f, "→ {} - {}", name, format_size(*size)),
        }
    }
}

/// One rendered row: indentation, connector, label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub branch: Branch,
    pub node: Node,
}

impl TreeLine {
    pub fn new(depth: usize, branch: Branch, node: Node) -> Self {
        Self {
            depth,
            branch,
            node,
        }
    }

    /// Indentation plus connector.
    pub fn prefix(&self) -> String {
        format!("{}{}", indent(self.depth), self.branch.glyph())
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix(), self.node)
    }
}

/// Sink for rendered output.
pub trait TreeOutput {
    fn line(&mut self, line: &TreeLine) -> io::Result<()>;

    /// Free text (headers, summaries), written as its own line.
    fn text(&mut self, text: &str) -> io::Result<()>;

    fn blank(&mut self) -> io::Result<()> {
        self.text("")
    }
}
