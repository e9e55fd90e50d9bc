//! Radix rendering and base-to-base conversion

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A numeral base accepted by [`convert_base`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Bin,
    Oct,
    Dec,
    Hex,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Bin => 2,
            Base::Oct => 8,
            Base::Dec => 10,
            Base::Hex => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::Bin => "bin",
            Base::Oct => "oct",
            Base::Dec => "dec",
            Base::Hex => "hex",
        }
    }

    fn render(self, magnitude: u128) -> String {
        match self {
            Base::Bin => format!("{:b}", magnitude),
            Base::Oct => format!("{:o}", magnitude),
            Base::Dec => format!("{}", magnitude),
            Base::Hex => format!("{:X}", magnitude),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown base: \"{0}\" (expected bin, oct, dec or hex)")]
pub struct UnknownBase(pub String);

impl FromStr for Base {
    type Err = UnknownBase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bin" => Ok(Base::Bin),
            "oct" => Ok(Base::Oct),
            "dec" => Ok(Base::Dec),
            "hex" => Ok(Base::Hex),
            _ => Err(UnknownBase(s.to_string())),
        }
    }
}

/// Sentinel returned by [`convert_base`] when the input has no digits
pub const NOT_A_NUMBER: &str = "NaN";

fn signed(negative: bool, magnitude: u128, base: Base) -> String {
    let digits = base.render(magnitude);
    if negative && magnitude != 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

pub fn to_binary(num: i64) -> String {
    signed(num < 0, num.unsigned_abs() as u128, Base::Bin)
}

pub fn to_octal(num: i64) -> String {
    signed(num < 0, num.unsigned_abs() as u128, Base::Oct)
}

pub fn to_decimal(num: i64) -> String {
    num.to_string()
}

/// Uppercase hexadecimal
pub fn to_hex(num: i64) -> String {
    signed(num < 0, num.unsigned_abs() as u128, Base::Hex)
}

/// Parse the longest integer prefix of `value` in base `from`.
///
/// Leading whitespace and a single sign are skipped; a `0x`/`0X` prefix is
/// accepted for hexadecimal. Digits stop at the first character that is not
/// valid in the base. Returns `None` when no digit was read or the
/// magnitude does not fit in 128 bits.
fn parse_prefix(value: &str, from: Base) -> Option<(bool, u128)> {
    let mut rest = value.trim_start();
    let negative = rest.starts_with('-');
    if let Some(stripped) = rest.strip_prefix(&['-', '+'][..]) {
        rest = stripped;
    }
    if from == Base::Hex {
        if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = stripped;
        }
    }

    let radix = from.radix();
    let mut magnitude: u128 = 0;
    let mut read_any = false;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        magnitude = magnitude
            .checked_mul(radix as u128)?
            .checked_add(digit as u128)?;
        read_any = true;
    }
    read_any.then_some((negative, magnitude))
}

/// Re-express the integer written in `value` (base `from`) in base `to`.
///
/// Output digits are uppercase. Input that does not start with a digit of
/// `from` yields `"NaN"`. Integers wider than 128 bits also yield `"NaN"`
/// instead of a rounded approximation.
///
/// ```
/// use gauge_number::{convert_base, Base};
/// assert_eq!(convert_base("FF", Base::Hex, Base::Dec), "255");
/// assert_eq!(convert_base("123", Base::Dec, Base::Hex), "7B");
/// ```
pub fn convert_base(value: &str, from: Base, to: Base) -> String {
    match parse_prefix(value, from) {
        Some((negative, magnitude)) => signed(negative, magnitude, to),
        None => {
            tracing::debug!(value, %from, "no digits to convert");
            NOT_A_NUMBER.to_string()
        }
    }
}
