//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Stop rendering entries once this many levels have been descended.
    /// The cut-off level is still listed and sized; its entries are just not
    /// shown.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Check if entries at `depth` are past the limit.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
