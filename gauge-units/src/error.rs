//! Errors raised by the conversion engines

use gauge_core::{codes, GaugeError};
use thiserror::Error;
use crate::Quantity;

/// No rate or function exists for the requested unit pair.
///
/// Raised for identity pairs, pairs missing from the published tables,
/// and unit strings outside the quantity's enumeration alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Conversion from \"{from}\" to \"{to}\" is not supported.")]
pub struct ConversionUnsupported {
    pub from: String,
    pub to: String,
}

impl ConversionUnsupported {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

/// A symbol that is not part of a quantity's unit enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {quantity} unit: \"{symbol}\"")]
pub struct UnknownUnit {
    pub quantity: Quantity,
    pub symbol: String,
}

/// A quantity name that is not one of the six supported quantities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quantity: \"{0}\"")]
pub struct UnknownQuantity(pub String);

impl From<ConversionUnsupported> for GaugeError {
    fn from(err: ConversionUnsupported) -> Self {
        GaugeError::conversion_unsupported(&err.from, &err.to)
    }
}

impl From<UnknownQuantity> for GaugeError {
    fn from(err: UnknownQuantity) -> Self {
        GaugeError::new(codes::UNKNOWN_QUANTITY, err.to_string())
            .with_suggestion("Use one of: length, weight, temperature, volume, speed, area")
    }
}
