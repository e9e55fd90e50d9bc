//! The six supported physical quantities

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::unit::UnitKind;
use crate::{
    area, length, speed, temperature, volume, weight, AreaUnit, ConversionUnsupported, LengthUnit,
    SpeedUnit, TemperatureUnit, UnknownQuantity, VolumeUnit, WeightUnit,
};

/// A physical dimension with its own closed unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Length,
    Weight,
    Temperature,
    Volume,
    Speed,
    Area,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::Length,
        Quantity::Weight,
        Quantity::Temperature,
        Quantity::Volume,
        Quantity::Speed,
        Quantity::Area,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Weight => "weight",
            Quantity::Temperature => "temperature",
            Quantity::Volume => "volume",
            Quantity::Speed => "speed",
            Quantity::Area => "area",
        }
    }

    /// Unit symbols of this quantity, in declaration order
    pub fn units(self) -> Vec<&'static str> {
        match self {
            Quantity::Length => symbols::<LengthUnit>(),
            Quantity::Weight => symbols::<WeightUnit>(),
            Quantity::Temperature => symbols::<TemperatureUnit>(),
            Quantity::Volume => symbols::<VolumeUnit>(),
            Quantity::Speed => symbols::<SpeedUnit>(),
            Quantity::Area => symbols::<AreaUnit>(),
        }
    }

    /// Convert between two unit symbols of this quantity
    pub fn convert(self, value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
        match self {
            Quantity::Length => length::convert_length(value, from, to),
            Quantity::Weight => weight::convert_weight(value, from, to),
            Quantity::Temperature => temperature::convert_temperature(value, from, to),
            Quantity::Volume => volume::convert_volume(value, from, to),
            Quantity::Speed => speed::convert_speed(value, from, to),
            Quantity::Area => area::convert_area(value, from, to),
        }
    }

    /// Symbols `from` can be converted to. Empty for unknown symbols.
    pub fn targets(self, from: &str) -> Vec<&'static str> {
        match self {
            Quantity::Length => length::length_table().target_symbols(from),
            Quantity::Weight => weight::weight_table().target_symbols(from),
            Quantity::Temperature => temperature::temperature_table().target_symbols(from),
            Quantity::Volume => volume::volume_table().target_symbols(from),
            Quantity::Speed => speed::speed_table().target_symbols(from),
            Quantity::Area => area::area_table().target_symbols(from),
        }
    }
}

fn symbols<U: UnitKind>() -> Vec<&'static str> {
    U::ALL.iter().map(|unit| unit.symbol()).collect()
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = UnknownQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Quantity::Length),
            "weight" | "mass" => Ok(Quantity::Weight),
            "temperature" => Ok(Quantity::Temperature),
            "volume" => Ok(Quantity::Volume),
            "speed" | "velocity" => Ok(Quantity::Speed),
            "area" => Ok(Quantity::Area),
            _ => Err(UnknownQuantity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_synonyms() {
        assert_eq!("length".parse::<Quantity>(), Ok(Quantity::Length));
        assert_eq!("Mass".parse::<Quantity>(), Ok(Quantity::Weight));
        assert_eq!(" velocity ".parse::<Quantity>(), Ok(Quantity::Speed));
        assert_eq!("time".parse::<Quantity>(), Err(UnknownQuantity("time".to_string())));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::Temperature.to_string(), "temperature");
    }

    #[test]
    fn test_units_listing() {
        assert_eq!(Quantity::Temperature.units(), vec!["C", "F", "K"]);
        assert_eq!(Quantity::Speed.units(), vec!["m/s", "km/h", "mi/h", "ft/s", "kn"]);
        assert_eq!(Quantity::Length.units().len(), 12);
        assert_eq!(Quantity::Weight.units().len(), 20);
        assert_eq!(Quantity::Volume.units().len(), 21);
        assert_eq!(Quantity::Area.units().len(), 9);
    }

    #[test]
    fn test_dispatch() {
        let km = Quantity::Length.convert(1000.0, "m", "km").unwrap();
        assert!((km - 1.0).abs() < 1e-12);
        let f = Quantity::Temperature.convert(100.0, "C", "F").unwrap();
        assert!((f - 212.0).abs() < 1e-12);
        assert!(Quantity::Area.convert(1.0, "m2", "m2").is_err());
    }

    #[test]
    fn test_targets() {
        assert_eq!(Quantity::Temperature.targets("K"), vec!["C", "F"]);
        assert_eq!(Quantity::Weight.targets("mton").len(), 18);
        assert!(Quantity::Length.targets("parsec").is_empty());
    }
}
