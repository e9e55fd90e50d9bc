//! Temperature units
//!
//! Temperature scales are offset from each other, so every pair is an
//! affine function rather than a rate.

use std::sync::LazyLock;
use crate::table::ConversionTable;
use crate::ConversionUnsupported;

unit_enum! {
    /// Units of temperature
    pub enum TemperatureUnit: Temperature {
        Celsius => ("C", "celsius"),
        Fahrenheit => ("F", "fahrenheit"),
        Kelvin => ("K", "kelvin"),
    }
}

const ABSOLUTE_ZERO_C: f64 = 273.15;

static TEMPERATURE: LazyLock<ConversionTable<TemperatureUnit>> = LazyLock::new(|| {
    use TemperatureUnit::*;
    ConversionTable::new()
        .function(Celsius, Fahrenheit, |c| c * 9.0 / 5.0 + 32.0)
        .function(Celsius, Kelvin, |c| c + ABSOLUTE_ZERO_C)
        .function(Fahrenheit, Celsius, |f| (f - 32.0) * 5.0 / 9.0)
        .function(Fahrenheit, Kelvin, |f| (f - 32.0) * 5.0 / 9.0 + ABSOLUTE_ZERO_C)
        .function(Kelvin, Celsius, |k| k - ABSOLUTE_ZERO_C)
        .function(Kelvin, Fahrenheit, |k| (k - ABSOLUTE_ZERO_C) * 9.0 / 5.0 + 32.0)
});

pub fn temperature_table() -> &'static ConversionTable<TemperatureUnit> {
    &TEMPERATURE
}

/// Convert `value` between "C", "F" and "K"
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
    TEMPERATURE.convert_symbols(value, from, to)
}
