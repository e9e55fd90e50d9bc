//! Unit identifiers shared by every quantity

use std::fmt;
use std::hash::Hash;
use crate::{Quantity, UnknownUnit};

/// A member of one quantity's closed unit enumeration
pub trait UnitKind: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The quantity this unit measures
    const QUANTITY: Quantity;

    /// Every unit of the quantity, in declaration order
    const ALL: &'static [Self];

    /// The unit symbol (e.g., "km", "lb-t", "fl-oz")
    fn symbol(self) -> &'static str;

    /// The unit name (e.g., "kilometer")
    fn name(self) -> &'static str;

    /// Exact, case-sensitive symbol lookup
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.symbol() == symbol)
    }

    /// Parse a symbol, naming the quantity on failure
    fn parse(symbol: &str) -> Result<Self, UnknownUnit> {
        Self::from_symbol(symbol).ok_or_else(|| UnknownUnit {
            quantity: Self::QUANTITY,
            symbol: symbol.to_string(),
        })
    }
}

/// Declare a unit enum together with its `UnitKind`, `Display`, `FromStr`
/// and serde impls. Units serialize as their symbol.
macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $quantity:ident {
            $( $variant:ident => ($symbol:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                #[doc = $label]
                #[serde(rename = $symbol)]
                $variant,
            )+
        }

        impl $crate::unit::UnitKind for $name {
            const QUANTITY: $crate::Quantity = $crate::Quantity::$quantity;
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn symbol(self) -> &'static str {
                match self {
                    $( $name::$variant => $symbol, )+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::unit::UnitKind::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownUnit;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::unit::UnitKind>::parse(s)
            }
        }
    };
}
