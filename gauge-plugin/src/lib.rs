//! Gauge Plugin System
//!
//! Every formatting and conversion utility is exposed as a named
//! `FunctionPlugin` so it can be called dynamically through a
//! `PluginRegistry`.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, DEFAULT_PERCENTAGE_DECIMALS};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext};
    pub use gauge_core::prelude::*;
}
