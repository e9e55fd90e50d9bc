//! Area units and their published conversion rates

use std::sync::LazyLock;
use crate::table::ConversionTable;
use crate::ConversionUnsupported;

unit_enum! {
    /// Units of area
    pub enum AreaUnit: Area {
        SquareMeter => ("m2", "square meter"),
        SquareKilometer => ("km2", "square kilometer"),
        SquareCentimeter => ("cm2", "square centimeter"),
        SquareMillimeter => ("mm2", "square millimeter"),
        SquareInch => ("in2", "square inch"),
        SquareFoot => ("ft2", "square foot"),
        SquareMile => ("mi2", "square mile"),
        Acre => ("ac", "acre"),
        Hectare => ("ha", "hectare"),
    }
}

static AREA: LazyLock<ConversionTable<AreaUnit>> = LazyLock::new(|| {
    use AreaUnit::*;
    ConversionTable::new()
        .rates(
            SquareMeter,
            &[
                (SquareKilometer, 0.000001), (SquareCentimeter, 10000.0), (SquareMillimeter, 1000000.0), (SquareInch, 1550.0),
                (SquareFoot, 10.7639), (SquareMile, 0.000000386102), (Acre, 0.000247105), (Hectare, 0.0001),
            ],
        )
        .rates(
            SquareKilometer,
            &[
                (SquareMeter, 1000000.0), (SquareCentimeter, 10000000000.0), (SquareMillimeter, 1000000000000.0), (SquareInch, 1550000000.0),
                (SquareFoot, 10763900.0), (SquareMile, 0.386102), (Acre, 247.105), (Hectare, 100.0),
            ],
        )
        .rates(
            SquareCentimeter,
            &[
                (SquareMeter, 0.0001), (SquareKilometer, 0.0000000001), (SquareMillimeter, 100.0), (SquareInch, 0.155),
                (SquareFoot, 0.00107639), (SquareMile, 0.0000000000386102), (Acre, 0.000000247105), (Hectare, 0.0000001),
            ],
        )
        .rates(
            SquareMillimeter,
            &[
                (SquareMeter, 0.000001), (SquareKilometer, 0.000000000001), (SquareCentimeter, 0.01), (SquareInch, 0.00155),
                (SquareFoot, 0.0000107639), (SquareMile, 0.000000000000386102), (Acre, 0.000000000247105), (Hectare, 0.0000000001),
            ],
        )
        .rates(
            SquareInch,
            &[
                (SquareMeter, 0.00064516), (SquareKilometer, 0.00000000064516), (SquareCentimeter, 6.4516), (SquareMillimeter, 645.16),
                (SquareFoot, 0.00694444), (SquareMile, 0.000000000249097), (Acre, 0.000159), (Hectare, 0.0000645),
            ],
        )
        .rates(
            SquareFoot,
            &[
                (SquareMeter, 0.092903), (SquareKilometer, 0.000000092903), (SquareCentimeter, 929.03), (SquareMillimeter, 92903.0),
                (SquareInch, 144.0), (SquareMile, 0.0000000358701), (Acre, 0.0000229568), (Hectare, 0.0000092903),
            ],
        )
        .rates(
            SquareMile,
            &[
                (SquareMeter, 2589990.0), (SquareKilometer, 2.58999), (SquareCentimeter, 25899900000.0), (SquareMillimeter, 2589990000000.0),
                (SquareInch, 4014489600.0), (SquareFoot, 27878400.0), (Acre, 640.0), (Hectare, 258.999),
            ],
        )
        .rates(
            Acre,
            &[
                (SquareMeter, 4046.86), (SquareKilometer, 0.00404686), (SquareCentimeter, 40468600.0), (SquareMillimeter, 4046860000.0),
                (SquareInch, 6272640.0), (SquareFoot, 43560.0), (SquareMile, 0.0015625), (Hectare, 0.404686),
            ],
        )
        .rates(
            Hectare,
            &[
                (SquareMeter, 10000.0), (SquareKilometer, 0.01), (SquareCentimeter, 100000000.0), (SquareMillimeter, 10000000000.0),
                (SquareInch, 15500031.0), (SquareFoot, 107639.0), (SquareMile, 0.00386102), (Acre, 2.47105),
            ],
        )
});

pub fn area_table() -> &'static ConversionTable<AreaUnit> {
    &AREA
}

/// Convert `value` between two area symbols (e.g., "m2" to "ha")
pub fn convert_area(value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
    AREA.convert_symbols(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::{assert_close, assert_published};
    use crate::unit::UnitKind;

    #[test]
    fn test_conversions() {
        assert_close(convert_area(1e6, "m2", "km2").unwrap(), 1.0);
        assert_close(convert_area(1000.0, "ft2", "m2").unwrap(), 92.903);
        assert_close(convert_area(1.0, "ha", "m2").unwrap(), 10000.0);
        assert_close(convert_area(1.0, "ac", "ft2").unwrap(), 43560.0);
    }

    #[test]
    fn test_unsupported() {
        assert!(convert_area(1.0, "ha", "ha").is_err());
        assert!(convert_area(1.0, "m^2", "ha").is_err());
    }

    #[test]
    fn test_targets() {
        let targets = area_table().targets(AreaUnit::Hectare);
        assert_eq!(targets.len(), 8);
        assert_eq!(targets[0], AreaUnit::SquareMeter);
        assert!(!targets.contains(&AreaUnit::Hectare));
        assert_eq!(AreaUnit::ALL.len(), 9);
    }

    #[test]
    fn test_every_published_rate() {
        assert_published(area_table(), PUBLISHED);
    }

    /// Every published rate, keyed by symbol
    const PUBLISHED: &[(&str, &[(&str, f64)])] = &[
        ("m2", &[
            ("km2", 0.000001), ("cm2", 10000.0), ("mm2", 1000000.0), ("in2", 1550.0),
            ("ft2", 10.7639), ("mi2", 0.000000386102), ("ac", 0.000247105), ("ha", 0.0001),
        ]),
        ("km2", &[
            ("m2", 1000000.0), ("cm2", 10000000000.0), ("mm2", 1000000000000.0),
            ("in2", 1550000000.0), ("ft2", 10763900.0), ("mi2", 0.386102), ("ac", 247.105),
            ("ha", 100.0),
        ]),
        ("cm2", &[
            ("m2", 0.0001), ("km2", 0.0000000001), ("mm2", 100.0), ("in2", 0.155),
            ("ft2", 0.00107639), ("mi2", 0.0000000000386102), ("ac", 0.000000247105),
            ("ha", 0.0000001),
        ]),
        ("mm2", &[
            ("m2", 0.000001), ("km2", 0.000000000001), ("cm2", 0.01), ("in2", 0.00155),
            ("ft2", 0.0000107639), ("mi2", 0.000000000000386102), ("ac", 0.000000000247105),
            ("ha", 0.0000000001),
        ]),
        ("in2", &[
            ("m2", 0.00064516), ("km2", 0.00000000064516), ("cm2", 6.4516), ("mm2", 645.16),
            ("ft2", 0.00694444), ("mi2", 0.000000000249097), ("ac", 0.000159), ("ha", 0.0000645),
        ]),
        ("ft2", &[
            ("m2", 0.092903), ("km2", 0.000000092903), ("cm2", 929.03), ("mm2", 92903.0),
            ("in2", 144.0), ("mi2", 0.0000000358701), ("ac", 0.0000229568), ("ha", 0.0000092903),
        ]),
        ("mi2", &[
            ("m2", 2589990.0), ("km2", 2.58999), ("cm2", 25899900000.0), ("mm2", 2589990000000.0),
            ("in2", 4014489600.0), ("ft2", 27878400.0), ("ac", 640.0), ("ha", 258.999),
        ]),
        ("ac", &[
            ("m2", 4046.86), ("km2", 0.00404686), ("cm2", 40468600.0), ("mm2", 4046860000.0),
            ("in2", 6272640.0), ("ft2", 43560.0), ("mi2", 0.0015625), ("ha", 0.404686),
        ]),
        ("ha", &[
            ("m2", 10000.0), ("km2", 0.01), ("cm2", 100000000.0), ("mm2", 10000000000.0),
            ("in2", 15500031.0), ("ft2", 107639.0), ("mi2", 0.00386102), ("ac", 2.47105),
        ]),
    ];
}
