//! Speed units and their published conversion rates

use std::sync::LazyLock;
use crate::table::ConversionTable;
use crate::ConversionUnsupported;

unit_enum! {
    /// Units of speed
    pub enum SpeedUnit: Speed {
        MetersPerSecond => ("m/s", "meters per second"),
        KilometersPerHour => ("km/h", "kilometers per hour"),
        MilesPerHour => ("mi/h", "miles per hour"),
        FeetPerSecond => ("ft/s", "feet per second"),
        Knot => ("kn", "knot"),
    }
}

static SPEED: LazyLock<ConversionTable<SpeedUnit>> = LazyLock::new(|| {
    use SpeedUnit::*;
    ConversionTable::new()
        .rates(
            MetersPerSecond,
            &[
                (KilometersPerHour, 3.6), (MilesPerHour, 2.23694), (FeetPerSecond, 3.28084), (Knot, 1.94384),
            ],
        )
        .rates(
            KilometersPerHour,
            &[
                (MetersPerSecond, 0.277778), (MilesPerHour, 0.621371), (FeetPerSecond, 0.911344), (Knot, 0.539957),
            ],
        )
        .rates(
            MilesPerHour,
            &[
                (MetersPerSecond, 0.44704), (KilometersPerHour, 1.60934), (FeetPerSecond, 1.46667), (Knot, 0.868976),
            ],
        )
        .rates(
            FeetPerSecond,
            &[
                (MetersPerSecond, 0.3048), (KilometersPerHour, 1.09728), (MilesPerHour, 0.681818), (Knot, 0.592484),
            ],
        )
        .rates(
            Knot,
            &[
                (MetersPerSecond, 0.514444), (KilometersPerHour, 1.852), (MilesPerHour, 1.15078), (FeetPerSecond, 1.68781),
            ],
        )
});

pub fn speed_table() -> &'static ConversionTable<SpeedUnit> {
    &SPEED
}

/// Convert `value` between two speed symbols (e.g., "m/s" to "km/h")
pub fn convert_speed(value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
    SPEED.convert_symbols(value, from, to)
}
