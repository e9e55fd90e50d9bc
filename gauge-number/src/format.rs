//! Decimal rendering, grouping and rounding

/// Render a number the way a JavaScript `Number#toString` does.
///
/// Integral values print without a fractional part, non-finite values use
/// `NaN`/`Infinity`, and magnitudes outside `[1e-6, 1e21)` switch to
/// exponent notation with an explicit sign.
pub fn number_to_string(num: f64) -> String {
    if num.is_nan() {
        return "NaN".to_string();
    }
    if num.is_infinite() {
        return if num > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if num == 0.0 {
        return "0".to_string();
    }

    let magnitude = num.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", num);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    format!("{}", num)
}

/// Insert `,` between every group of three digits of the integer part.
///
/// Digits after the decimal point are never grouped, so `1234.5678`
/// renders as `1,234.5678` rather than `1,234.5,678`.
///
/// ```
/// use gauge_number::number_with_commas;
/// assert_eq!(number_with_commas(1234567890.0), "1,234,567,890");
/// assert_eq!(number_with_commas(-1000.0), "-1,000");
/// ```
pub fn number_with_commas(num: f64) -> String {
    let rendered = number_to_string(num);
    if rendered.contains('e') || !num.is_finite() {
        return rendered;
    }

    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Scale by 100 and render with a fixed number of decimals and a `%` suffix.
///
/// Exact ties round away from zero, as `Number#toFixed` does:
///
/// ```
/// use gauge_number::to_percentage;
/// assert_eq!(to_percentage(0.125, 0), "13%");
/// assert_eq!(to_percentage(-0.125, 0), "-13%");
/// ```
pub fn to_percentage(num: f64, decimals: usize) -> String {
    let scaled = num * 100.0;
    if !scaled.is_finite() || scaled.abs() >= 1e21 {
        return format!("{}%", number_to_string(scaled));
    }
    format!("{}%", to_fixed(scaled, decimals))
}

/// Fixed-point rendering with ties away from zero. `-0` renders unsigned.
fn to_fixed(num: f64, decimals: usize) -> String {
    let sign = if num < 0.0 { "-" } else { "" };
    let mut magnitude = num.abs();
    if is_exact_tie(magnitude, decimals) {
        // The next float up rounds to the larger neighbour
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }
    format!("{}{:.*}", sign, decimals, magnitude)
}

/// Whether `magnitude` sits exactly halfway between two multiples of
/// `10^-decimals`, i.e. `magnitude * 10^decimals * 2` is an odd integer.
fn is_exact_tie(magnitude: f64, decimals: usize) -> bool {
    if magnitude == 0.0 || !magnitude.is_finite() {
        return false;
    }
    let bits = magnitude.to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exp == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exp - 1075)
    };
    // magnitude * 10^d * 2 == mantissa * 5^d * 2^(exponent + d + 1), and 5^d is odd
    let shift = exponent + decimals as i64 + 1;
    shift <= 0 && i64::from(mantissa.trailing_zeros()) == -shift
}

/// Round to the nearest integer; halves round toward positive infinity,
/// so `round(-5.5) == -5.0`.
pub fn round(num: f64) -> f64 {
    let floor = num.floor();
    if num - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `decimals` places using the same half-up rule as [`round`]
pub fn round_to(num: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round(num * factor) / factor
}
