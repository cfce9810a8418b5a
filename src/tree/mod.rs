//! Size-ordered tree rendering
//!
//! Two walkers share the same layout rules (four spaces per level, `├── ` or
//! `└── ` by sibling position) and the same sorted listings:
//!
//! - `TreeWalker`: files and directories, with sizes
//! - `DirsWalker`: directories only
//!
//! Both recurse depth-first and re-list every directory they descend into.

mod config;
mod dirs;
mod walker;

pub use config::WalkerConfig;
pub use dirs::DirsWalker;
pub use walker::TreeWalker;
