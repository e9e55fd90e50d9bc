//! Length units and their published conversion rates

use std::sync::LazyLock;
use crate::table::ConversionTable;
use crate::ConversionUnsupported;

unit_enum! {
    /// Units of length
    pub enum LengthUnit: Length {
        Meter => ("m", "meter"),
        Kilometer => ("km", "kilometer"),
        Centimeter => ("cm", "centimeter"),
        Millimeter => ("mm", "millimeter"),
        Micrometer => ("µm", "micrometer"),
        Nanometer => ("nm", "nanometer"),
        Inch => ("in", "inch"),
        Foot => ("ft", "foot"),
        Yard => ("yd", "yard"),
        Mile => ("mi", "mile"),
        NauticalMile => ("nmi", "nautical mile"),
        LightYear => ("ly", "light year"),
    }
}

static LENGTH: LazyLock<ConversionTable<LengthUnit>> = LazyLock::new(|| {
    use LengthUnit::*;
    ConversionTable::new()
        .rates(
            Meter,
            &[
                (Kilometer, 0.001), (Centimeter, 100.0), (Millimeter, 1000.0), (Micrometer, 1e6),
                (Nanometer, 1e9), (Inch, 39.3701), (Foot, 3.28084), (Yard, 1.09361),
                (Mile, 0.000621371), (NauticalMile, 0.000539957), (LightYear, 1.057e-16),
            ],
        )
        .rates(
            Kilometer,
            &[
                (Meter, 1000.0), (Centimeter, 100000.0), (Millimeter, 1e6), (Micrometer, 1e9),
                (Nanometer, 1e12), (Inch, 39370.1), (Foot, 3280.84), (Yard, 1093.61),
                (Mile, 0.621371), (NauticalMile, 0.539957), (LightYear, 1.057e-13),
            ],
        )
        .rates(
            Centimeter,
            &[
                (Meter, 0.01), (Kilometer, 0.00001), (Millimeter, 10.0), (Micrometer, 1e4),
                (Nanometer, 1e7), (Inch, 0.393701), (Foot, 0.0328084), (Yard, 0.0109361),
                (Mile, 0.0000062137), (NauticalMile, 0.00000539957), (LightYear, 1.057e-18),
            ],
        )
        .rates(
            Millimeter,
            &[
                (Meter, 0.001), (Kilometer, 0.000001), (Centimeter, 0.1), (Micrometer, 1000.0),
                (Nanometer, 1e6), (Inch, 0.0393701), (Foot, 0.00328084), (Yard, 0.00109361),
                (Mile, 0.00000062137), (NauticalMile, 0.000000539957), (LightYear, 1.057e-19),
            ],
        )
        .rates(
            Micrometer,
            &[
                (Meter, 1e-6), (Kilometer, 1e-9), (Centimeter, 0.0001), (Millimeter, 0.001),
                (Nanometer, 1000.0), (Inch, 3.93701e-5), (Foot, 3.28084e-6), (Yard, 1.09361e-6),
                (Mile, 6.2137e-10), (NauticalMile, 5.39957e-10), (LightYear, 1.057e-22),
            ],
        )
        .rates(
            Nanometer,
            &[
                (Meter, 1e-9), (Kilometer, 1e-12), (Centimeter, 1e-7), (Millimeter, 1e-6),
                (Micrometer, 0.001), (Inch, 3.93701e-8), (Foot, 3.28084e-9), (Yard, 1.09361e-9),
                (Mile, 6.2137e-13), (NauticalMile, 5.39957e-13), (LightYear, 1.057e-25),
            ],
        )
        .rates(
            Inch,
            &[
                (Meter, 0.0254), (Kilometer, 0.0000254), (Centimeter, 2.54), (Millimeter, 25.4),
                (Micrometer, 25400.0), (Nanometer, 25400000.0), (Foot, 0.0833333), (Yard, 0.0277778),
                (Mile, 0.0000157828), (NauticalMile, 0.0000137149), (LightYear, 2.68478e-17),
            ],
        )
        .rates(
            Foot,
            &[
                (Meter, 0.3048), (Kilometer, 0.0003048), (Centimeter, 30.48), (Millimeter, 304.8),
                (Micrometer, 304800.0), (Nanometer, 304800000.0), (Inch, 12.0), (Yard, 0.333333),
                (Mile, 0.000189394), (NauticalMile, 0.000164579), (LightYear, 3.22174e-16),
            ],
        )
        .rates(
            Yard,
            &[
                (Meter, 0.9144), (Kilometer, 0.0009144), (Centimeter, 91.44), (Millimeter, 914.4),
                (Micrometer, 914400.0), (Nanometer, 914400000.0), (Inch, 36.0), (Foot, 3.0),
                (Mile, 0.000568182), (NauticalMile, 0.000493737), (LightYear, 9.66523e-16),
            ],
        )
        .rates(
            Mile,
            &[
                (Meter, 1609.34), (Kilometer, 1.60934), (Centimeter, 160934.0), (Millimeter, 1609340.0),
                (Micrometer, 1.60934e9), (Nanometer, 1.60934e12), (Inch, 63360.0), (Foot, 5280.0),
                (Yard, 1760.0), (NauticalMile, 0.868976), (LightYear, 1.70108e-13),
            ],
        )
        .rates(
            NauticalMile,
            &[
                (Meter, 1852.0), (Kilometer, 1.852), (Centimeter, 185200.0), (Millimeter, 1852000.0),
                (Micrometer, 1.852e9), (Nanometer, 1.852e12), (Inch, 72913.4), (Foot, 6076.12),
                (Yard, 2025.37), (Mile, 1.15078), (LightYear, 2.25919e-13),
            ],
        )
        .rates(
            LightYear,
            &[
                (Meter, 9.461e15), (Kilometer, 9.461e12), (Centimeter, 9.461e17), (Millimeter, 9.461e18),
                (Micrometer, 9.461e21), (Nanometer, 9.461e24), (Inch, 3.725e17), (Foot, 3.104e16),
                (Yard, 1.035e16), (Mile, 5.87863e12), (NauticalMile, 4.41755e12),
            ],
        )
});

pub fn length_table() -> &'static ConversionTable<LengthUnit> {
    &LENGTH
}

/// Convert `value` between two length symbols (e.g., "m" to "km")
pub fn convert_length(value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
    LENGTH.convert_symbols(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::{assert_close, assert_published};
    use crate::unit::UnitKind;

    #[test]
    fn test_metric_prefixes() {
        assert_close(convert_length(1000.0, "m", "km").unwrap(), 1.0);
        assert_close(convert_length(1.0, "km", "cm").unwrap(), 100000.0);
        assert_close(convert_length(1.0, "µm", "nm").unwrap(), 1000.0);
    }

    #[test]
    fn test_imperial() {
        assert_close(convert_length(1.0, "mi", "m").unwrap(), 1609.34);
        assert_close(convert_length(1.0, "ft", "in").unwrap(), 12.0);
        assert_close(convert_length(2.0, "yd", "ft").unwrap(), 6.0);
    }

    #[test]
    fn test_zero_is_zero() {
        assert_eq!(convert_length(0.0, "nmi", "ly").unwrap(), 0.0);
    }

    #[test]
    fn test_unsupported() {
        let err = convert_length(5.0, "m", "m").unwrap_err();
        assert_eq!(err.to_string(), "Conversion from \"m\" to \"m\" is not supported.");
        let err = convert_length(5.0, "furlong", "m").unwrap_err();
        assert_eq!(err.to_string(), "Conversion from \"furlong\" to \"m\" is not supported.");
        assert!(convert_length(1.0, "M", "km").is_err());
    }

    #[test]
    fn test_every_unit_reaches_every_other() {
        for &unit in LengthUnit::ALL {
            assert_eq!(length_table().targets(unit).len(), LengthUnit::ALL.len() - 1);
        }
    }

    #[test]
    fn test_typed_convert() {
        let inches = length_table().convert(1.0, LengthUnit::Meter, LengthUnit::Inch).unwrap();
        assert_close(inches, 39.3701);
        assert_eq!(length_table().rate(LengthUnit::Yard, LengthUnit::Foot), Some(3.0));
    }

    #[test]
    fn test_every_published_rate() {
        assert_published(length_table(), PUBLISHED);
    }

    /// Every published rate, keyed by symbol
    const PUBLISHED: &[(&str, &[(&str, f64)])] = &[
        ("m", &[
            ("km", 0.001), ("cm", 100.0), ("mm", 1000.0), ("µm", 1e6), ("nm", 1e9), ("in", 39.3701),
            ("ft", 3.28084), ("yd", 1.09361), ("mi", 0.000621371), ("nmi", 0.000539957),
            ("ly", 1.057e-16),
        ]),
        ("km", &[
            ("m", 1000.0), ("cm", 100000.0), ("mm", 1e6), ("µm", 1e9), ("nm", 1e12),
            ("in", 39370.1), ("ft", 3280.84), ("yd", 1093.61), ("mi", 0.621371), ("nmi", 0.539957),
            ("ly", 1.057e-13),
        ]),
        ("cm", &[
            ("m", 0.01), ("km", 0.00001), ("mm", 10.0), ("µm", 1e4), ("nm", 1e7), ("in", 0.393701),
            ("ft", 0.0328084), ("yd", 0.0109361), ("mi", 0.0000062137), ("nmi", 0.00000539957),
            ("ly", 1.057e-18),
        ]),
        ("mm", &[
            ("m", 0.001), ("km", 0.000001), ("cm", 0.1), ("µm", 1000.0), ("nm", 1e6),
            ("in", 0.0393701), ("ft", 0.00328084), ("yd", 0.00109361), ("mi", 0.00000062137),
            ("nmi", 0.000000539957), ("ly", 1.057e-19),
        ]),
        ("µm", &[
            ("m", 1e-6), ("km", 1e-9), ("cm", 0.0001), ("mm", 0.001), ("nm", 1000.0),
            ("in", 3.93701e-5), ("ft", 3.28084e-6), ("yd", 1.09361e-6), ("mi", 6.2137e-10),
            ("nmi", 5.39957e-10), ("ly", 1.057e-22),
        ]),
        ("nm", &[
            ("m", 1e-9), ("km", 1e-12), ("cm", 1e-7), ("mm", 1e-6), ("µm", 0.001),
            ("in", 3.93701e-8), ("ft", 3.28084e-9), ("yd", 1.09361e-9), ("mi", 6.2137e-13),
            ("nmi", 5.39957e-13), ("ly", 1.057e-25),
        ]),
        ("in", &[
            ("m", 0.0254), ("km", 0.0000254), ("cm", 2.54), ("mm", 25.4), ("µm", 25400.0),
            ("nm", 25400000.0), ("ft", 0.0833333), ("yd", 0.0277778), ("mi", 0.0000157828),
            ("nmi", 0.0000137149), ("ly", 2.68478e-17),
        ]),
        ("ft", &[
            ("m", 0.3048), ("km", 0.0003048), ("cm", 30.48), ("mm", 304.8), ("µm", 304800.0),
            ("nm", 304800000.0), ("in", 12.0), ("yd", 0.333333), ("mi", 0.000189394),
            ("nmi", 0.000164579), ("ly", 3.22174e-16),
        ]),
        ("yd", &[
            ("m", 0.9144), ("km", 0.0009144), ("cm", 91.44), ("mm", 914.4), ("µm", 914400.0),
            ("nm", 914400000.0), ("in", 36.0), ("ft", 3.0), ("mi", 0.000568182),
            ("nmi", 0.000493737), ("ly", 9.66523e-16),
        ]),
        ("mi", &[
            ("m", 1609.34), ("km", 1.60934), ("cm", 160934.0), ("mm", 1609340.0), ("µm", 1.60934e9),
            ("nm", 1.60934e12), ("in", 63360.0), ("ft", 5280.0), ("yd", 1760.0), ("nmi", 0.868976),
            ("ly", 1.70108e-13),
        ]),
        ("nmi", &[
            ("m", 1852.0), ("km", 1.852), ("cm", 185200.0), ("mm", 1852000.0), ("µm", 1.852e9),
            ("nm", 1.852e12), ("in", 72913.4), ("ft", 6076.12), ("yd", 2025.37), ("mi", 1.15078),
            ("ly", 2.25919e-13),
        ]),
        ("ly", &[
            ("m", 9.461e15), ("km", 9.461e12), ("cm", 9.461e17), ("mm", 9.461e18), ("µm", 9.461e21),
            ("nm", 9.461e24), ("in", 3.725e17), ("ft", 3.104e16), ("yd", 1.035e16),
            ("mi", 5.87863e12), ("nmi", 4.41755e12),
        ]),
    ];
}
