//! Gauge Units - Table-driven unit conversion
//!
//! Converts scalar values between units of six physical quantities:
//! - Length (m, km, cm, mm, µm, nm, in, ft, yd, mi, nmi, ly)
//! - Weight (g, kg, lb, oz, mg, ton, ct, stone, gr, dwt, t, ozt, mton, ...)
//! - Temperature (C, F, K)
//! - Volume (ml, cl, dl, l, kl, m3, ..., gal, qt, pt, cup, fl-oz, tbsp, tsp)
//! - Speed (m/s, km/h, mi/h, ft/s, kn)
//! - Area (m2, km2, cm2, mm2, in2, ft2, mi2, ac, ha)
//!
//! Each quantity owns a static table of published rates keyed by ordered
//! unit pairs. There is no base-unit normalization: a pair converts only if
//! its rate is tabulated, and a unit never converts to itself.

#[macro_use]
mod unit;
mod error;
mod table;
mod quantity;
mod length;
mod weight;
mod temperature;
mod volume;
mod speed;
mod area;
mod convert;

pub use unit::UnitKind;
pub use error::{ConversionUnsupported, UnknownQuantity, UnknownUnit};
pub use table::{Conversion, ConversionTable};
pub use quantity::Quantity;
pub use length::{convert_length, length_table, LengthUnit};
pub use weight::{convert_weight, weight_table, WeightUnit};
pub use temperature::{convert_temperature, temperature_table, TemperatureUnit};
pub use volume::{convert_volume, volume_table, VolumeUnit};
pub use speed::{convert_speed, speed_table, SpeedUnit};
pub use area::{area_table, convert_area, AreaUnit};

use gauge_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Conversion (6 functions)
        .with_function(convert::ConvertLength)
        .with_function(convert::ConvertWeight)
        .with_function(convert::ConvertTemperature)
        .with_function(convert::ConvertVolume)
        .with_function(convert::ConvertSpeed)
        .with_function(convert::ConvertArea)

        // Inspection (1 function)
        .with_function(convert::ListUnits)
}
