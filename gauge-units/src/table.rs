//! Static conversion tables keyed by ordered unit pairs

use std::collections::HashMap;
use crate::unit::UnitKind;
use crate::ConversionUnsupported;

/// How a value in one unit becomes a value in another
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// `value_to = value_from * rate`
    Rate(f64),
    /// Affine conversions such as Celsius to Fahrenheit
    Function(fn(f64) -> f64),
}

impl Conversion {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Conversion::Rate(rate) => value * rate,
            Conversion::Function(f) => f(value),
        }
    }
}

/// Immutable map from `(from, to)` to a conversion.
///
/// Entries are tabulated independently, so `rate(a, b) * rate(b, a)` is
/// not guaranteed to be 1. A unit never maps to itself.
#[derive(Debug)]
pub struct ConversionTable<U: UnitKind> {
    entries: HashMap<(U, U), Conversion>,
}

impl<U: UnitKind> ConversionTable<U> {
    pub(crate) fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Add one row of multiplicative rates out of `from`
    pub(crate) fn rates(mut self, from: U, row: &[(U, f64)]) -> Self {
        for &(to, rate) in row {
            debug_assert!(from != to, "identity entry for {}", from);
            self.entries.insert((from, to), Conversion::Rate(rate));
        }
        self
    }

    /// Add a single function entry
    pub(crate) fn function(mut self, from: U, to: U, f: fn(f64) -> f64) -> Self {
        debug_assert!(from != to, "identity entry for {}", from);
        self.entries.insert((from, to), Conversion::Function(f));
        self
    }

    pub fn get(&self, from: U, to: U) -> Option<Conversion> {
        self.entries.get(&(from, to)).copied()
    }

    /// The published multiplicative rate, if the pair is rate-based
    pub fn rate(&self, from: U, to: U) -> Option<f64> {
        match self.get(from, to)? {
            Conversion::Rate(rate) => Some(rate),
            Conversion::Function(_) => None,
        }
    }

    pub fn convert(&self, value: f64, from: U, to: U) -> Result<f64, ConversionUnsupported> {
        match self.get(from, to) {
            Some(conversion) => Ok(conversion.apply(value)),
            None => {
                tracing::debug!(quantity = %U::QUANTITY, %from, %to, "unsupported conversion");
                Err(ConversionUnsupported::new(from.symbol(), to.symbol()))
            }
        }
    }

    /// Convert between raw symbols. Symbols outside the enumeration fail
    /// exactly like a missing pair, echoing the caller's strings.
    pub fn convert_symbols(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
        match (U::from_symbol(from), U::from_symbol(to)) {
            (Some(f), Some(t)) => self.convert(value, f, t),
            _ => {
                tracing::debug!(quantity = %U::QUANTITY, from, to, "unknown unit symbol");
                Err(ConversionUnsupported::new(from, to))
            }
        }
    }

    /// Units reachable from `from`, in declaration order
    pub fn targets(&self, from: U) -> Vec<U> {
        U::ALL.iter()
            .copied()
            .filter(|&to| self.entries.contains_key(&(from, to)))
            .collect()
    }

    pub(crate) fn target_symbols(&self, from: &str) -> Vec<&'static str> {
        match U::from_symbol(from) {
            Some(unit) => self.targets(unit).into_iter().map(|u| u.symbol()).collect(),
            None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
