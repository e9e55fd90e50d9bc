//! Gauge - Unit conversion and formatting utilities
//!
//! Re-exports the three domain crates and bundles their functions into a
//! single registry that can be called by name:
//!
//! ```
//! use gauge::{Gauge, Value};
//!
//! let gauge = Gauge::new();
//! let f = gauge.call("convert_temperature", &[Value::from(0.0), Value::from("C"), Value::from("F")]);
//! assert_eq!(f.as_number(), Some(32.0));
//! ```

pub mod logging;
mod settings;

pub use settings::{Settings, SettingsError, MAX_PERCENTAGE_DECIMALS};
pub use gauge_core::{codes, GaugeError, Severity, Value};
pub use gauge_plugin::{EvalContext, FunctionMeta, FunctionPlugin, PluginRegistry};
pub use gauge_number as number;
pub use gauge_text as text;
pub use gauge_units as units;

use std::sync::Arc;

/// Registry with the units, number and text libraries loaded
pub fn standard_registry() -> PluginRegistry {
    let registry = PluginRegistry::new();
    let registry = gauge_units::load_units_library(registry);
    let registry = gauge_number::load_number_library(registry);
    gauge_text::load_text_library(registry)
}

/// Main Gauge engine
#[derive(Clone)]
pub struct Gauge {
    registry: Arc<PluginRegistry>,
    settings: Settings,
}

impl Gauge {
    pub fn new() -> Self {
        Self::with_registry(standard_registry())
    }

    pub fn with_registry(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Call a registered function by name. Never panics; failures come back
    /// as `Value::Error`.
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        let ctx = self.settings.eval_context();
        self.registry.call_function(name, args, &ctx)
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new()
    }
}
