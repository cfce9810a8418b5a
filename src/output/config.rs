//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }
}
