//! Volume units and their published conversion rates

use std::sync::LazyLock;
use crate::table::ConversionTable;
use crate::ConversionUnsupported;

unit_enum! {
    /// Units of volume
    pub enum VolumeUnit: Volume {
        Milliliter => ("ml", "milliliter"),
        Centiliter => ("cl", "centiliter"),
        Deciliter => ("dl", "deciliter"),
        Liter => ("l", "liter"),
        Kiloliter => ("kl", "kiloliter"),
        CubicMeter => ("m3", "cubic meter"),
        CubicMillimeter => ("mm3", "cubic millimeter"),
        CubicCentimeter => ("cm3", "cubic centimeter"),
        CubicDecimeter => ("dm3", "cubic decimeter"),
        CubicHectometer => ("hm3", "cubic hectometer"),
        CubicKilometer => ("km3", "cubic kilometer"),
        CubicInch => ("in3", "cubic inch"),
        CubicFoot => ("ft3", "cubic foot"),
        CubicYard => ("yd3", "cubic yard"),
        Gallon => ("gal", "gallon"),
        Quart => ("qt", "quart"),
        Pint => ("pt", "pint"),
        Cup => ("cup", "cup"),
        FluidOunce => ("fl-oz", "fluid ounce"),
        Tablespoon => ("tbsp", "tablespoon"),
        Teaspoon => ("tsp", "teaspoon"),
    }
}

static VOLUME: LazyLock<ConversionTable<VolumeUnit>> = LazyLock::new(|| {
    use VolumeUnit::*;
    ConversionTable::new()
        .rates(
            Milliliter,
            &[
                (Centiliter, 0.1), (Deciliter, 0.01), (Liter, 0.001), (Kiloliter, 0.000001),
                (CubicMeter, 0.000001), (CubicMillimeter, 1000.0), (CubicCentimeter, 1.0), (CubicDecimeter, 0.001),
                (CubicHectometer, 0.000000001), (CubicKilometer, 0.000000000001), (CubicInch, 0.0610237), (CubicFoot, 0.0000353147),
                (CubicYard, 0.00000130795), (Gallon, 0.000264172), (Quart, 0.00105669), (Pint, 0.00211338),
                (Cup, 0.00416667), (FluidOunce, 0.033814), (Tablespoon, 0.067628), (Teaspoon, 0.202884),
            ],
        )
        .rates(
            Centiliter,
            &[
                (Milliliter, 10.0), (Deciliter, 0.1), (Liter, 0.01), (Kiloliter, 0.00001),
                (CubicMeter, 0.00001), (CubicMillimeter, 10000.0), (CubicCentimeter, 10.0), (CubicDecimeter, 0.01),
                (CubicHectometer, 0.00000001), (CubicKilometer, 0.00000000001), (CubicInch, 0.610237), (CubicFoot, 0.00353147),
                (CubicYard, 0.000130795), (Gallon, 0.0264172), (Quart, 0.105669), (Pint, 0.211338),
                (Cup, 0.416667), (FluidOunce, 3.3814), (Tablespoon, 6.7628), (Teaspoon, 20.2884),
            ],
        )
        .rates(
            Deciliter,
            &[
                (Milliliter, 100.0), (Centiliter, 10.0), (Liter, 0.1), (Kiloliter, 0.0001),
                (CubicMeter, 0.0001), (CubicMillimeter, 100000.0), (CubicCentimeter, 100.0), (CubicDecimeter, 0.1),
                (CubicHectometer, 0.0000001), (CubicKilometer, 0.0000000001), (CubicInch, 6.10237), (CubicFoot, 0.0353147),
                (CubicYard, 0.00130795), (Gallon, 0.264172), (Quart, 1.05669), (Pint, 2.11338),
                (Cup, 4.16667), (FluidOunce, 33.814), (Tablespoon, 67.628), (Teaspoon, 202.884),
            ],
        )
        .rates(
            Liter,
            &[
                (Milliliter, 1000.0), (Centiliter, 100.0), (Deciliter, 10.0), (Kiloliter, 0.001),
                (CubicMeter, 0.001), (CubicMillimeter, 1000000.0), (CubicCentimeter, 1000.0), (CubicDecimeter, 1.0),
                (CubicHectometer, 0.000001), (CubicKilometer, 0.000000001), (CubicInch, 61.0237), (CubicFoot, 0.0353147),
                (CubicYard, 0.00130795), (Gallon, 0.264172), (Quart, 1.05669), (Pint, 2.11338),
                (Cup, 4.16667), (FluidOunce, 33.814), (Tablespoon, 67.628), (Teaspoon, 202.884),
            ],
        )
        .rates(
            Kiloliter,
            &[
                (Milliliter, 1000000.0), (Centiliter, 100000.0), (Deciliter, 10000.0), (Liter, 1000.0),
                (CubicMeter, 1.0), (CubicMillimeter, 1000000000.0), (CubicCentimeter, 1000000.0), (CubicDecimeter, 1000.0),
                (CubicHectometer, 0.001), (CubicKilometer, 0.000001), (CubicInch, 61023.7), (CubicFoot, 35.3147),
                (CubicYard, 1.30795), (Gallon, 264.172), (Quart, 1056.69), (Pint, 2113.38),
                (Cup, 4166.67), (FluidOunce, 33814.0), (Tablespoon, 67628.0), (Teaspoon, 202884.0),
            ],
        )
        .rates(
            CubicMeter,
            &[
                (Milliliter, 1000000.0), (Centiliter, 100000.0), (Deciliter, 10000.0), (Liter, 1000.0),
                (Kiloliter, 1.0), (CubicMillimeter, 1000000000.0), (CubicCentimeter, 1000000.0), (CubicDecimeter, 1000.0),
                (CubicHectometer, 0.001), (CubicKilometer, 0.000001), (CubicInch, 61023.7), (CubicFoot, 35.3147),
                (CubicYard, 1.30795), (Gallon, 264.172), (Quart, 1056.69), (Pint, 2113.38),
                (Cup, 4166.67), (FluidOunce, 33814.0), (Tablespoon, 67628.0), (Teaspoon, 202884.0),
            ],
        )
        .rates(
            CubicMillimeter,
            &[
                (Milliliter, 0.001), (Centiliter, 0.0001), (Deciliter, 0.00001), (Liter, 0.000001),
                (Kiloliter, 0.000000001), (CubicMeter, 0.000000001), (CubicCentimeter, 0.001), (CubicDecimeter, 0.000001),
                (CubicHectometer, 0.000000000001), (CubicKilometer, 0.000000000000001), (CubicInch, 0.0000610237), (CubicFoot, 0.0000000353147),
                (CubicYard, 0.00000000130795), (Gallon, 0.000000264172), (Quart, 0.00000105669), (Pint, 0.00000211338),
                (Cup, 0.00000416667), (FluidOunce, 0.000033814), (Tablespoon, 0.000067628), (Teaspoon, 0.000202884),
            ],
        )
        .rates(
            CubicCentimeter,
            &[
                (Milliliter, 1.0), (Centiliter, 0.1), (Deciliter, 0.01), (Liter, 0.001),
                (Kiloliter, 0.000001), (CubicMeter, 0.000001), (CubicMillimeter, 1000.0), (CubicDecimeter, 0.001),
                (CubicHectometer, 0.000000001), (CubicKilometer, 0.000000000001), (CubicInch, 0.0610237), (CubicFoot, 0.0000353147),
                (CubicYard, 0.00000130795), (Gallon, 0.000264172), (Quart, 0.00105669), (Pint, 0.00211338),
                (Cup, 0.00416667), (FluidOunce, 0.033814), (Tablespoon, 0.067628), (Teaspoon, 0.202884),
            ],
        )
        .rates(
            CubicDecimeter,
            &[
                (Milliliter, 1000.0), (Centiliter, 100.0), (Deciliter, 10.0), (Liter, 1.0),
                (Kiloliter, 0.001), (CubicMeter, 0.001), (CubicMillimeter, 1000000.0), (CubicCentimeter, 1000.0),
                (CubicHectometer, 0.000001), (CubicKilometer, 0.000000001), (CubicInch, 61.0237), (CubicFoot, 0.0353147),
                (CubicYard, 0.00130795), (Gallon, 0.264172), (Quart, 1.05669), (Pint, 2.11338),
                (Cup, 4.16667), (FluidOunce, 33.814), (Tablespoon, 67.628), (Teaspoon, 202.884),
            ],
        )
        .rates(
            CubicHectometer,
            &[
                (Milliliter, 1000000000.0), (Centiliter, 100000000.0), (Deciliter, 10000000.0), (Liter, 1000000.0),
                (Kiloliter, 1000.0), (CubicMeter, 1000.0), (CubicMillimeter, 1000000000000.0), (CubicCentimeter, 1000000000.0),
                (CubicDecimeter, 1000000.0), (CubicKilometer, 0.001), (CubicInch, 61023700.0), (CubicFoot, 35314.7),
                (CubicYard, 1307.95), (Gallon, 264172.0), (Quart, 1056690.0), (Pint, 2113380.0),
                (Cup, 4166670.0), (FluidOunce, 338140.0), (Tablespoon, 676280.0), (Teaspoon, 2028840.0),
            ],
        )
        .rates(
            CubicKilometer,
            &[
                (Milliliter, 1000000000000.0), (Centiliter, 100000000000.0), (Deciliter, 10000000000.0), (Liter, 1000000000.0),
                (Kiloliter, 1000000.0), (CubicMeter, 1000000.0), (CubicMillimeter, 1000000000000000.0), (CubicCentimeter, 1000000000000.0),
                (CubicDecimeter, 1000000000.0), (CubicHectometer, 1000.0), (CubicInch, 61023700000.0), (CubicFoot, 353147.0),
                (CubicYard, 13079500.0), (Gallon, 2641720000.0), (Quart, 10566900000.0), (Pint, 21133800000.0),
                (Cup, 41666700000.0), (FluidOunce, 338140000.0), (Tablespoon, 676280000.0), (Teaspoon, 2028840000.0),
            ],
        )
        .rates(
            CubicInch,
            &[
                (Milliliter, 16.3871), (Centiliter, 1.63871), (Deciliter, 0.163871), (Liter, 0.0163871),
                (Kiloliter, 0.0000163871), (CubicMeter, 0.0000163871), (CubicMillimeter, 16387.1), (CubicCentimeter, 16.3871),
                (CubicDecimeter, 0.0163871), (CubicHectometer, 0.0000000163871), (CubicKilometer, 0.0000000000163871), (CubicFoot, 0.000578704),
                (CubicYard, 0.0000214335), (Gallon, 0.004329), (Quart, 0.017316), (Pint, 0.034632),
                (Cup, 0.0682794), (FluidOunce, 0.554113), (Tablespoon, 1.10823), (Teaspoon, 3.32469),
            ],
        )
        .rates(
            CubicFoot,
            &[
                (Milliliter, 28316.8), (Centiliter, 2831.68), (Deciliter, 283.168), (Liter, 28.3168),
                (Kiloliter, 0.0283168), (CubicMeter, 0.0283168), (CubicMillimeter, 28316800.0), (CubicCentimeter, 28316.8),
                (CubicDecimeter, 28.3168), (CubicHectometer, 0.0000283168), (CubicKilometer, 0.0000000283168), (CubicInch, 1728.0),
                (CubicYard, 0.037037), (Gallon, 7.48052), (Quart, 29.9221), (Pint, 59.8442),
                (Cup, 118.294), (FluidOunce, 957.506), (Tablespoon, 1915.01), (Teaspoon, 5745.03),
            ],
        )
        .rates(
            CubicYard,
            &[
                (Milliliter, 764554.857), (Centiliter, 76455.4857), (Deciliter, 7645.54857), (Liter, 764.554857),
                (Kiloliter, 0.764554857), (CubicMeter, 0.764554857), (CubicMillimeter, 764554857.0), (CubicCentimeter, 764554.857),
                (CubicDecimeter, 764.554857), (CubicHectometer, 0.000764554857), (CubicKilometer, 0.000000764554857), (CubicInch, 46656.0),
                (CubicFoot, 27.0), (Gallon, 201.974), (Quart, 807.896), (Pint, 1615.79),
                (Cup, 3178.87), (FluidOunce, 25852.7), (Tablespoon, 51705.5), (Teaspoon, 155116.0),
            ],
        )
        .rates(
            Gallon,
            &[
                (Milliliter, 3785.41), (Centiliter, 378.541), (Deciliter, 37.8541), (Liter, 3.78541),
                (Kiloliter, 0.00378541), (CubicMeter, 0.00378541), (CubicMillimeter, 3785410.0), (CubicCentimeter, 3785.41),
                (CubicDecimeter, 3.78541), (CubicHectometer, 0.00000378541), (CubicKilometer, 0.00000000378541), (CubicInch, 231.0),
                (CubicFoot, 0.133681), (CubicYard, 0.00495113), (Quart, 4.0), (Pint, 8.0),
                (Cup, 15.7725), (FluidOunce, 128.0), (Tablespoon, 256.0), (Teaspoon, 768.0),
            ],
        )
        .rates(
            Quart,
            &[
                (Milliliter, 946.353), (Centiliter, 94.6353), (Deciliter, 9.46353), (Liter, 0.946353),
                (Kiloliter, 0.000946353), (CubicMeter, 0.000946353), (CubicMillimeter, 946353.0), (CubicCentimeter, 946.353),
                (CubicDecimeter, 0.946353), (CubicHectometer, 0.000000946353), (CubicKilometer, 0.000000000946353), (CubicInch, 57.75),
                (CubicFoot, 0.0334201), (CubicYard, 0.0012378), (Gallon, 0.25), (Pint, 2.0),
                (Cup, 3.94314), (FluidOunce, 31.5), (Tablespoon, 63.0), (Teaspoon, 189.0),
            ],
        )
        .rates(
            Pint,
            &[
                (Milliliter, 473.176), (Centiliter, 47.3176), (Deciliter, 4.73176), (Liter, 0.473176),
                (Kiloliter, 0.000473176), (CubicMeter, 0.000473176), (CubicMillimeter, 473176.0), (CubicCentimeter, 473.176),
                (CubicDecimeter, 0.473176), (CubicHectometer, 0.000000473176), (CubicKilometer, 0.000000000473176), (CubicInch, 28.875),
                (CubicFoot, 0.0167101), (CubicYard, 0.000618891), (Gallon, 0.125), (Quart, 0.5),
                (Cup, 1.97157), (FluidOunce, 16.0), (Tablespoon, 32.0), (Teaspoon, 96.0),
            ],
        )
        .rates(
            Cup,
            &[
                (Milliliter, 240.0), (Centiliter, 24.0), (Deciliter, 2.4), (Liter, 0.24),
                (Kiloliter, 0.00024), (CubicMeter, 0.00024), (CubicMillimeter, 240000.0), (CubicCentimeter, 240.0),
                (CubicDecimeter, 0.24), (CubicHectometer, 0.00000024), (CubicKilometer, 0.00000000024), (CubicInch, 14.4375),
                (CubicFoot, 0.00835503), (CubicYard, 0.000309353), (Gallon, 0.0625), (Quart, 0.25),
                (Pint, 0.50721), (FluidOunce, 8.0), (Tablespoon, 16.0), (Teaspoon, 48.0),
            ],
        )
        .rates(
            FluidOunce,
            &[
                (Milliliter, 29.5735), (Centiliter, 2.95735), (Deciliter, 0.295735), (Liter, 0.0295735),
                (Kiloliter, 0.0000295735), (CubicMeter, 0.0000295735), (CubicMillimeter, 29573.5), (CubicCentimeter, 29.5735),
                (CubicDecimeter, 0.0295735), (CubicHectometer, 0.0000000295735), (CubicKilometer, 0.0000000000295735), (CubicInch, 1.80469),
                (CubicFoot, 0.00104438), (CubicYard, 0.0000386807), (Gallon, 0.0078125), (Quart, 0.03125),
                (Pint, 0.0625), (Cup, 0.125), (Tablespoon, 2.0), (Teaspoon, 6.0),
            ],
        )
        .rates(
            Tablespoon,
            &[
                (Milliliter, 14.7868), (Centiliter, 1.47868), (Deciliter, 0.147868), (Liter, 0.0147868),
                (Kiloliter, 0.0000147868), (CubicMeter, 0.0000147868), (CubicMillimeter, 14786.8), (CubicCentimeter, 14.7868),
                (CubicDecimeter, 0.0147868), (CubicHectometer, 0.0000000147868), (CubicKilometer, 0.0000000000147868), (CubicInch, 0.902344),
                (CubicFoot, 0.00052219), (CubicYard, 0.0000193368), (Gallon, 0.00390625), (Quart, 0.015625),
                (Pint, 0.03125), (Cup, 0.0625), (FluidOunce, 0.5), (Teaspoon, 3.0),
            ],
        )
        .rates(
            Teaspoon,
            &[
                (Milliliter, 4.92892), (Centiliter, 0.492892), (Deciliter, 0.0492892), (Liter, 0.00492892),
                (Kiloliter, 0.00000492892), (CubicMeter, 0.00000492892), (CubicMillimeter, 4928.92), (CubicCentimeter, 4.92892),
                (CubicDecimeter, 0.00492892), (CubicHectometer, 0.00000000492892), (CubicKilometer, 0.00000000000492892), (CubicInch, 0.300781),
                (CubicFoot, 0.000173611), (CubicYard, 0.0000064307), (Gallon, 0.00130208), (Quart, 0.00520833),
                (Pint, 0.0104167), (Cup, 0.0208333), (FluidOunce, 0.166667), (Tablespoon, 0.333333),
            ],
        )
});

pub fn volume_table() -> &'static ConversionTable<VolumeUnit> {
    &VOLUME
}

/// Convert `value` between two volume symbols (e.g., "ml" to "l")
pub fn convert_volume(value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
    VOLUME.convert_symbols(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::{assert_close, assert_published};
    use crate::unit::UnitKind;

    #[test]
    fn test_metric() {
        assert_close(convert_volume(1000.0, "ml", "l").unwrap(), 1.0);
        assert_close(convert_volume(1.0, "l", "ml").unwrap(), 1000.0);
        assert_close(convert_volume(1.0, "m3", "l").unwrap(), 1000.0);
    }

    #[test]
    fn test_us_customary() {
        assert_close(convert_volume(1.0, "gal", "m3").unwrap(), 0.00378541);
        assert_close(convert_volume(1.0, "gal", "qt").unwrap(), 4.0);
        assert_close(convert_volume(1.0, "cup", "fl-oz").unwrap(), 8.0);
    }

    #[test]
    fn test_published_cup_to_pint() {
        assert_eq!(volume_table().rate(VolumeUnit::Cup, VolumeUnit::Pint), Some(0.50721));
    }

    #[test]
    fn test_hyphenated_symbol() {
        assert_close(convert_volume(2.0, "fl-oz", "tbsp").unwrap(), 4.0);
        assert!(convert_volume(2.0, "floz", "tbsp").is_err());
    }

    #[test]
    fn test_every_unit_reaches_every_other() {
        for &unit in VolumeUnit::ALL {
            assert_eq!(volume_table().targets(unit).len(), VolumeUnit::ALL.len() - 1);
        }
    }

    #[test]
    fn test_every_published_rate() {
        assert_published(volume_table(), PUBLISHED);
    }

    /// Every published rate, keyed by symbol
    const PUBLISHED: &[(&str, &[(&str, f64)])] = &[
        ("ml", &[
            ("cl", 0.1), ("dl", 0.01), ("l", 0.001), ("kl", 0.000001), ("m3", 0.000001),
            ("mm3", 1000.0), ("cm3", 1.0), ("dm3", 0.001), ("hm3", 0.000000001),
            ("km3", 0.000000000001), ("in3", 0.0610237), ("ft3", 0.0000353147),
            ("yd3", 0.00000130795), ("gal", 0.000264172), ("qt", 0.00105669), ("pt", 0.00211338),
            ("cup", 0.00416667), ("fl-oz", 0.033814), ("tbsp", 0.067628), ("tsp", 0.202884),
        ]),
        ("cl", &[
            ("ml", 10.0), ("dl", 0.1), ("l", 0.01), ("kl", 0.00001), ("m3", 0.00001),
            ("mm3", 10000.0), ("cm3", 10.0), ("dm3", 0.01), ("hm3", 0.00000001),
            ("km3", 0.00000000001), ("in3", 0.610237), ("ft3", 0.00353147), ("yd3", 0.000130795),
            ("gal", 0.0264172), ("qt", 0.105669), ("pt", 0.211338), ("cup", 0.416667),
            ("fl-oz", 3.3814), ("tbsp", 6.7628), ("tsp", 20.2884),
        ]),
        ("dl", &[
            ("ml", 100.0), ("cl", 10.0), ("l", 0.1), ("kl", 0.0001), ("m3", 0.0001),
            ("mm3", 100000.0), ("cm3", 100.0), ("dm3", 0.1), ("hm3", 0.0000001),
            ("km3", 0.0000000001), ("in3", 6.10237), ("ft3", 0.0353147), ("yd3", 0.00130795),
            ("gal", 0.264172), ("qt", 1.05669), ("pt", 2.11338), ("cup", 4.16667),
            ("fl-oz", 33.814), ("tbsp", 67.628), ("tsp", 202.884),
        ]),
        ("l", &[
            ("ml", 1000.0), ("cl", 100.0), ("dl", 10.0), ("kl", 0.001), ("m3", 0.001),
            ("mm3", 1000000.0), ("cm3", 1000.0), ("dm3", 1.0), ("hm3", 0.000001),
            ("km3", 0.000000001), ("in3", 61.0237), ("ft3", 0.0353147), ("yd3", 0.00130795),
            ("gal", 0.264172), ("qt", 1.05669), ("pt", 2.11338), ("cup", 4.16667),
            ("fl-oz", 33.814), ("tbsp", 67.628), ("tsp", 202.884),
        ]),
        ("kl", &[
            ("ml", 1000000.0), ("cl", 100000.0), ("dl", 10000.0), ("l", 1000.0), ("m3", 1.0),
            ("mm3", 1000000000.0), ("cm3", 1000000.0), ("dm3", 1000.0), ("hm3", 0.001),
            ("km3", 0.000001), ("in3", 61023.7), ("ft3", 35.3147), ("yd3", 1.30795),
            ("gal", 264.172), ("qt", 1056.69), ("pt", 2113.38), ("cup", 4166.67),
            ("fl-oz", 33814.0), ("tbsp", 67628.0), ("tsp", 202884.0),
        ]),
        ("m3", &[
            ("ml", 1000000.0), ("cl", 100000.0), ("dl", 10000.0), ("l", 1000.0), ("kl", 1.0),
            ("mm3", 1000000000.0), ("cm3", 1000000.0), ("dm3", 1000.0), ("hm3", 0.001),
            ("km3", 0.000001), ("in3", 61023.7), ("ft3", 35.3147), ("yd3", 1.30795),
            ("gal", 264.172), ("qt", 1056.69), ("pt", 2113.38), ("cup", 4166.67),
            ("fl-oz", 33814.0), ("tbsp", 67628.0), ("tsp", 202884.0),
        ]),
        ("mm3", &[
            ("ml", 0.001), ("cl", 0.0001), ("dl", 0.00001), ("l", 0.000001), ("kl", 0.000000001),
            ("m3", 0.000000001), ("cm3", 0.001), ("dm3", 0.000001), ("hm3", 0.000000000001),
            ("km3", 0.000000000000001), ("in3", 0.0000610237), ("ft3", 0.0000000353147),
            ("yd3", 0.00000000130795), ("gal", 0.000000264172), ("qt", 0.00000105669),
            ("pt", 0.00000211338), ("cup", 0.00000416667), ("fl-oz", 0.000033814),
            ("tbsp", 0.000067628), ("tsp", 0.000202884),
        ]),
        ("cm3", &[
            ("ml", 1.0), ("cl", 0.1), ("dl", 0.01), ("l", 0.001), ("kl", 0.000001),
            ("m3", 0.000001), ("mm3", 1000.0), ("dm3", 0.001), ("hm3", 0.000000001),
            ("km3", 0.000000000001), ("in3", 0.0610237), ("ft3", 0.0000353147),
            ("yd3", 0.00000130795), ("gal", 0.000264172), ("qt", 0.00105669), ("pt", 0.00211338),
            ("cup", 0.00416667), ("fl-oz", 0.033814), ("tbsp", 0.067628), ("tsp", 0.202884),
        ]),
        ("dm3", &[
            ("ml", 1000.0), ("cl", 100.0), ("dl", 10.0), ("l", 1.0), ("kl", 0.001), ("m3", 0.001),
            ("mm3", 1000000.0), ("cm3", 1000.0), ("hm3", 0.000001), ("km3", 0.000000001),
            ("in3", 61.0237), ("ft3", 0.0353147), ("yd3", 0.00130795), ("gal", 0.264172),
            ("qt", 1.05669), ("pt", 2.11338), ("cup", 4.16667), ("fl-oz", 33.814), ("tbsp", 67.628),
            ("tsp", 202.884),
        ]),
        ("hm3", &[
            ("ml", 1000000000.0), ("cl", 100000000.0), ("dl", 10000000.0), ("l", 1000000.0),
            ("kl", 1000.0), ("m3", 1000.0), ("mm3", 1000000000000.0), ("cm3", 1000000000.0),
            ("dm3", 1000000.0), ("km3", 0.001), ("in3", 61023700.0), ("ft3", 35314.7),
            ("yd3", 1307.95), ("gal", 264172.0), ("qt", 1056690.0), ("pt", 2113380.0),
            ("cup", 4166670.0), ("fl-oz", 338140.0), ("tbsp", 676280.0), ("tsp", 2028840.0),
        ]),
        ("km3", &[
            ("ml", 1000000000000.0), ("cl", 100000000000.0), ("dl", 10000000000.0),
            ("l", 1000000000.0), ("kl", 1000000.0), ("m3", 1000000.0), ("mm3", 1000000000000000.0),
            ("cm3", 1000000000000.0), ("dm3", 1000000000.0), ("hm3", 1000.0),
            ("in3", 61023700000.0), ("ft3", 353147.0), ("yd3", 13079500.0), ("gal", 2641720000.0),
            ("qt", 10566900000.0), ("pt", 21133800000.0), ("cup", 41666700000.0),
            ("fl-oz", 338140000.0), ("tbsp", 676280000.0), ("tsp", 2028840000.0),
        ]),
        ("in3", &[
            ("ml", 16.3871), ("cl", 1.63871), ("dl", 0.163871), ("l", 0.0163871),
            ("kl", 0.0000163871), ("m3", 0.0000163871), ("mm3", 16387.1), ("cm3", 16.3871),
            ("dm3", 0.0163871), ("hm3", 0.0000000163871), ("km3", 0.0000000000163871),
            ("ft3", 0.000578704), ("yd3", 0.0000214335), ("gal", 0.004329), ("qt", 0.017316),
            ("pt", 0.034632), ("cup", 0.0682794), ("fl-oz", 0.554113), ("tbsp", 1.10823),
            ("tsp", 3.32469),
        ]),
        ("ft3", &[
            ("ml", 28316.8), ("cl", 2831.68), ("dl", 283.168), ("l", 28.3168), ("kl", 0.0283168),
            ("m3", 0.0283168), ("mm3", 28316800.0), ("cm3", 28316.8), ("dm3", 28.3168),
            ("hm3", 0.0000283168), ("km3", 0.0000000283168), ("in3", 1728.0), ("yd3", 0.037037),
            ("gal", 7.48052), ("qt", 29.9221), ("pt", 59.8442), ("cup", 118.294),
            ("fl-oz", 957.506), ("tbsp", 1915.01), ("tsp", 5745.03),
        ]),
        ("yd3", &[
            ("ml", 764554.857), ("cl", 76455.4857), ("dl", 7645.54857), ("l", 764.554857),
            ("kl", 0.764554857), ("m3", 0.764554857), ("mm3", 764554857.0), ("cm3", 764554.857),
            ("dm3", 764.554857), ("hm3", 0.000764554857), ("km3", 0.000000764554857),
            ("in3", 46656.0), ("ft3", 27.0), ("gal", 201.974), ("qt", 807.896), ("pt", 1615.79),
            ("cup", 3178.87), ("fl-oz", 25852.7), ("tbsp", 51705.5), ("tsp", 155116.0),
        ]),
        ("gal", &[
            ("ml", 3785.41), ("cl", 378.541), ("dl", 37.8541), ("l", 3.78541), ("kl", 0.00378541),
            ("m3", 0.00378541), ("mm3", 3785410.0), ("cm3", 3785.41), ("dm3", 3.78541),
            ("hm3", 0.00000378541), ("km3", 0.00000000378541), ("in3", 231.0), ("ft3", 0.133681),
            ("yd3", 0.00495113), ("qt", 4.0), ("pt", 8.0), ("cup", 15.7725), ("fl-oz", 128.0),
            ("tbsp", 256.0), ("tsp", 768.0),
        ]),
        ("qt", &[
            ("ml", 946.353), ("cl", 94.6353), ("dl", 9.46353), ("l", 0.946353), ("kl", 0.000946353),
            ("m3", 0.000946353), ("mm3", 946353.0), ("cm3", 946.353), ("dm3", 0.946353),
            ("hm3", 0.000000946353), ("km3", 0.000000000946353), ("in3", 57.75), ("ft3", 0.0334201),
            ("yd3", 0.0012378), ("gal", 0.25), ("pt", 2.0), ("cup", 3.94314), ("fl-oz", 31.5),
            ("tbsp", 63.0), ("tsp", 189.0),
        ]),
        ("pt", &[
            ("ml", 473.176), ("cl", 47.3176), ("dl", 4.73176), ("l", 0.473176), ("kl", 0.000473176),
            ("m3", 0.000473176), ("mm3", 473176.0), ("cm3", 473.176), ("dm3", 0.473176),
            ("hm3", 0.000000473176), ("km3", 0.000000000473176), ("in3", 28.875),
            ("ft3", 0.0167101), ("yd3", 0.000618891), ("gal", 0.125), ("qt", 0.5), ("cup", 1.97157),
            ("fl-oz", 16.0), ("tbsp", 32.0), ("tsp", 96.0),
        ]),
        ("cup", &[
            ("ml", 240.0), ("cl", 24.0), ("dl", 2.4), ("l", 0.24), ("kl", 0.00024), ("m3", 0.00024),
            ("mm3", 240000.0), ("cm3", 240.0), ("dm3", 0.24), ("hm3", 0.00000024),
            ("km3", 0.00000000024), ("in3", 14.4375), ("ft3", 0.00835503), ("yd3", 0.000309353),
            ("gal", 0.0625), ("qt", 0.25), ("pt", 0.50721), ("fl-oz", 8.0), ("tbsp", 16.0),
            ("tsp", 48.0),
        ]),
        ("fl-oz", &[
            ("ml", 29.5735), ("cl", 2.95735), ("dl", 0.295735), ("l", 0.0295735),
            ("kl", 0.0000295735), ("m3", 0.0000295735), ("mm3", 29573.5), ("cm3", 29.5735),
            ("dm3", 0.0295735), ("hm3", 0.0000000295735), ("km3", 0.0000000000295735),
            ("in3", 1.80469), ("ft3", 0.00104438), ("yd3", 0.0000386807), ("gal", 0.0078125),
            ("qt", 0.03125), ("pt", 0.0625), ("cup", 0.125), ("tbsp", 2.0), ("tsp", 6.0),
        ]),
        ("tbsp", &[
            ("ml", 14.7868), ("cl", 1.47868), ("dl", 0.147868), ("l", 0.0147868),
            ("kl", 0.0000147868), ("m3", 0.0000147868), ("mm3", 14786.8), ("cm3", 14.7868),
            ("dm3", 0.0147868), ("hm3", 0.0000000147868), ("km3", 0.0000000000147868),
            ("in3", 0.902344), ("ft3", 0.00052219), ("yd3", 0.0000193368), ("gal", 0.00390625),
            ("qt", 0.015625), ("pt", 0.03125), ("cup", 0.0625), ("fl-oz", 0.5), ("tsp", 3.0),
        ]),
        ("tsp", &[
            ("ml", 4.92892), ("cl", 0.492892), ("dl", 0.0492892), ("l", 0.00492892),
            ("kl", 0.00000492892), ("m3", 0.00000492892), ("mm3", 4928.92), ("cm3", 4.92892),
            ("dm3", 0.00492892), ("hm3", 0.00000000492892), ("km3", 0.00000000000492892),
            ("in3", 0.300781), ("ft3", 0.000173611), ("yd3", 0.0000064307), ("gal", 0.00130208),
            ("qt", 0.00520833), ("pt", 0.0104167), ("cup", 0.0208333), ("fl-oz", 0.166667),
            ("tbsp", 0.333333),
        ]),
    ];
}
