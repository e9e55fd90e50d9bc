//! Gauge Number - Number formatting utilities
//!
//! Thousands grouping, radix rendering, base-to-base conversion, angle
//! conversion, percentages and half-up rounding.

mod angle;
mod format;
mod radix;
mod functions;

pub use angle::{to_degrees, to_radians};
pub use format::{number_to_string, number_with_commas, round, round_to, to_percentage};
pub use radix::{convert_base, to_binary, to_decimal, to_hex, to_octal, Base, UnknownBase, NOT_A_NUMBER};
pub use gauge_plugin::DEFAULT_PERCENTAGE_DECIMALS;

pub use radix::to_binary as to_binary_string;
pub use radix::to_hex as to_hex_string;
pub use radix::to_octal as to_octal_string;
pub use format::to_percentage as to_percentage_string;

use gauge_plugin::PluginRegistry;

/// Load number functions into registry
pub fn load_number_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::NumberWithCommas)
        .with_function(functions::ToBinary)
        .with_function(functions::ToOctal)
        .with_function(functions::ToHex)
        .with_function(functions::ToDecimal)
        .with_function(functions::ConvertBase)
        .with_function(functions::ToDegrees)
        .with_function(functions::ToRadians)
        .with_function(functions::ToPercentage)
        .with_function(functions::Round)
        .with_function(functions::RoundTo)
        // Alternate names
        .with_alias("to_binary_string", "to_binary")
        .with_alias("to_hex_string", "to_hex")
        .with_alias("to_octal_string", "to_octal")
        .with_alias("to_percentage_string", "to_percentage")
}
