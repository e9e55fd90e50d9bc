//! Evaluation Context

/// Default number of decimals for percentage rendering.
pub const DEFAULT_PERCENTAGE_DECIMALS: usize = 2;

/// Per-call settings passed to plugins
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Decimals used by `to_percentage` when the caller omits them
    pub percentage_decimals: usize,
}

impl EvalContext {
    pub fn new() -> Self {
        Self {
            percentage_decimals: DEFAULT_PERCENTAGE_DECIMALS,
        }
    }

    pub fn with_percentage_decimals(mut self, decimals: usize) -> Self {
        self.percentage_decimals = decimals;
        self
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
