//! Number formatting functions for the plugin registry

use gauge_plugin::prelude::*;
use crate::{
    convert_base, number_with_commas, round, round_to, to_binary, to_decimal, to_degrees, to_hex,
    to_octal, to_percentage, to_radians, Base,
};

/// Widest `decimals` accepted by `to_percentage`
const MAX_FIXED_DECIMALS: i64 = 100;

pub struct NumberWithCommas;
pub struct ToBinary;
pub struct ToOctal;
pub struct ToHex;
pub struct ToDecimal;
pub struct ToDegrees;
pub struct ToRadians;
pub struct ConvertBase;
pub struct ToPercentage;
pub struct Round;
pub struct RoundTo;

static NUMBER_WITH_COMMAS_ARGS: [ArgMeta; 1] = [ArgMeta::required("num", "Number", "Number to format")];
static NUMBER_WITH_COMMAS_EXAMPLES: [&str; 2] = ["number_with_commas(1000) → \"1,000\"", "number_with_commas(1234567890) → \"1,234,567,890\""];
static NUMBER_WITH_COMMAS_RELATED: [&str; 1] = ["to_percentage"];

static RADIX_ARGS: [ArgMeta; 1] = [ArgMeta::required("num", "Number", "Integer to render")];
static TO_BINARY_EXAMPLES: [&str; 2] = ["to_binary(10) → \"1010\"", "to_binary(255) → \"11111111\""];
static TO_OCTAL_EXAMPLES: [&str; 2] = ["to_octal(8) → \"10\"", "to_octal(64) → \"100\""];
static TO_HEX_EXAMPLES: [&str; 2] = ["to_hex(255) → \"FF\"", "to_hex(4095) → \"FFF\""];
static TO_DECIMAL_EXAMPLES: [&str; 2] = ["to_decimal(255) → \"255\"", "to_decimal(4095) → \"4095\""];
static RADIX_RELATED: [&str; 5] = ["to_binary", "to_octal", "to_hex", "to_decimal", "convert_base"];

static TO_DEGREES_ARGS: [ArgMeta; 1] = [ArgMeta::required("radians", "Number", "Angle in radians")];
static TO_DEGREES_EXAMPLES: [&str; 1] = ["to_degrees(3.141592653589793) → 180"];
static TO_DEGREES_RELATED: [&str; 1] = ["to_radians"];

static TO_RADIANS_ARGS: [ArgMeta; 1] = [ArgMeta::required("degrees", "Number", "Angle in degrees")];
static TO_RADIANS_EXAMPLES: [&str; 1] = ["to_radians(180) → 3.141592653589793"];
static TO_RADIANS_RELATED: [&str; 1] = ["to_degrees"];

static CONVERT_BASE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Text", "Digits in the source base"),
    ArgMeta::required("from_base", "Text", "bin, oct, dec or hex"),
    ArgMeta::required("to_base", "Text", "bin, oct, dec or hex"),
];
static CONVERT_BASE_EXAMPLES: [&str; 3] = [
    "convert_base(\"FF\", \"hex\", \"dec\") → \"255\"",
    "convert_base(\"1010\", \"bin\", \"dec\") → \"10\"",
    "convert_base(\"123\", \"dec\", \"hex\") → \"7B\"",
];
static CONVERT_BASE_RELATED: [&str; 2] = ["to_hex", "to_binary"];

static TO_PERCENTAGE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("num", "Number", "Fraction to render (0.5 is 50%)"),
    ArgMeta::optional("decimals", "Number", "Digits after the decimal point", "2"),
];
static TO_PERCENTAGE_EXAMPLES: [&str; 3] = ["to_percentage(0.1234) → \"12.34%\"", "to_percentage(0.1234, 1) → \"12.3%\"", "to_percentage(1) → \"100.00%\""];
static TO_PERCENTAGE_RELATED: [&str; 2] = ["round_to", "number_with_commas"];

static ROUND_ARGS: [ArgMeta; 1] = [ArgMeta::required("num", "Number", "Value to round")];
static ROUND_EXAMPLES: [&str; 3] = ["round(5.67) → 6", "round(5.24) → 5", "round(-5.5) → -5"];
static ROUND_RELATED: [&str; 1] = ["round_to"];

static ROUND_TO_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("num", "Number", "Value to round"),
    ArgMeta::required("decimals", "Number", "Decimal places (negative rounds to tens, hundreds, ...)"),
];
static ROUND_TO_EXAMPLES: [&str; 2] = ["round_to(5.678, 2) → 5.68", "round_to(5.1234, 1) → 5.1"];
static ROUND_TO_RELATED: [&str; 2] = ["round", "to_percentage"];

fn number_arg(func: &str, arg: &str, value: &Value) -> Result<f64, GaugeError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(GaugeError::arg_type(func, arg, "Number", other.type_name())),
    }
}

fn integer_arg(func: &str, arg: &str, value: &Value) -> Result<i64, GaugeError> {
    let n = number_arg(func, arg, value)?;
    value.as_integer().ok_or_else(|| {
        GaugeError::domain_error(format!("{}() argument '{}' must be an integer, got {}", func, arg, n))
    })
}

fn text_arg<'a>(func: &str, arg: &str, value: &'a Value) -> Result<&'a str, GaugeError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Error(e) => Err(e.clone()),
        other => Err(GaugeError::arg_type(func, arg, "Text", other.type_name())),
    }
}

fn base_arg(func: &str, arg: &str, value: &Value) -> Result<Base, GaugeError> {
    text_arg(func, arg, value)?
        .parse::<Base>()
        .map_err(|e| GaugeError::domain_error(e.to_string()).with_suggestion("Use one of: bin, oct, dec, hex"))
}

fn unary_number(func: &str, args: &[Value], f: fn(f64) -> Value) -> Value {
    if args.len() != 1 {
        return Value::Error(GaugeError::arg_count(func, 1, args.len()));
    }
    match number_arg(func, "num", &args[0]) {
        Ok(n) => f(n),
        Err(e) => Value::Error(e),
    }
}

fn unary_integer(func: &str, args: &[Value], f: fn(i64) -> String) -> Value {
    if args.len() != 1 {
        return Value::Error(GaugeError::arg_count(func, 1, args.len()));
    }
    match integer_arg(func, "num", &args[0]) {
        Ok(n) => Value::Text(f(n)),
        Err(e) => Value::Error(e),
    }
}

impl FunctionPlugin for NumberWithCommas {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "number_with_commas",
            description: "Group the integer digits in threes with commas",
            usage: "number_with_commas(num)",
            args: &NUMBER_WITH_COMMAS_ARGS,
            returns: "Text",
            examples: &NUMBER_WITH_COMMAS_EXAMPLES,
            category: "number",
            related: &NUMBER_WITH_COMMAS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_number("number_with_commas", args, |n| Value::Text(number_with_commas(n)))
    }
}

impl FunctionPlugin for ToBinary {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_binary",
            description: "Render an integer in base 2",
            usage: "to_binary(num)",
            args: &RADIX_ARGS,
            returns: "Text",
            examples: &TO_BINARY_EXAMPLES,
            category: "number",
            related: &RADIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_integer("to_binary", args, to_binary)
    }
}

impl FunctionPlugin for ToOctal {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_octal",
            description: "Render an integer in base 8",
            usage: "to_octal(num)",
            args: &RADIX_ARGS,
            returns: "Text",
            examples: &TO_OCTAL_EXAMPLES,
            category: "number",
            related: &RADIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_integer("to_octal", args, to_octal)
    }
}

impl FunctionPlugin for ToHex {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_hex",
            description: "Render an integer in base 16 with uppercase digits",
            usage: "to_hex(num)",
            args: &RADIX_ARGS,
            returns: "Text",
            examples: &TO_HEX_EXAMPLES,
            category: "number",
            related: &RADIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_integer("to_hex", args, to_hex)
    }
}

impl FunctionPlugin for ToDecimal {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_decimal",
            description: "Render an integer in base 10",
            usage: "to_decimal(num)",
            args: &RADIX_ARGS,
            returns: "Text",
            examples: &TO_DECIMAL_EXAMPLES,
            category: "number",
            related: &RADIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_integer("to_decimal", args, to_decimal)
    }
}

impl FunctionPlugin for ToDegrees {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_degrees",
            description: "Convert radians to degrees",
            usage: "to_degrees(radians)",
            args: &TO_DEGREES_ARGS,
            returns: "Number",
            examples: &TO_DEGREES_EXAMPLES,
            category: "number",
            related: &TO_DEGREES_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_number("to_degrees", args, |n| Value::Number(to_degrees(n)))
    }
}

impl FunctionPlugin for ToRadians {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_radians",
            description: "Convert degrees to radians",
            usage: "to_radians(degrees)",
            args: &TO_RADIANS_ARGS,
            returns: "Number",
            examples: &TO_RADIANS_EXAMPLES,
            category: "number",
            related: &TO_RADIANS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_number("to_radians", args, |n| Value::Number(to_radians(n)))
    }
}

impl FunctionPlugin for ConvertBase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_base",
            description: "Re-express an integer written in one base in another base",
            usage: "convert_base(value, from_base, to_base)",
            args: &CONVERT_BASE_ARGS,
            returns: "Text",
            examples: &CONVERT_BASE_EXAMPLES,
            category: "number",
            related: &CONVERT_BASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 3 {
            return Value::Error(GaugeError::arg_count("convert_base", 3, args.len()));
        }
        let parsed = text_arg("convert_base", "value", &args[0]).and_then(|value| {
            let from = base_arg("convert_base", "from_base", &args[1])?;
            let to = base_arg("convert_base", "to_base", &args[2])?;
            Ok(convert_base(value, from, to))
        });
        match parsed {
            Ok(result) => Value::Text(result),
            Err(e) => Value::Error(e),
        }
    }
}

impl FunctionPlugin for ToPercentage {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_percentage",
            description: "Render a fraction as a percentage with fixed decimals",
            usage: "to_percentage(num, [decimals])",
            args: &TO_PERCENTAGE_ARGS,
            returns: "Text",
            examples: &TO_PERCENTAGE_EXAMPLES,
            category: "number",
            related: &TO_PERCENTAGE_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.is_empty() || args.len() > 2 {
            return Value::Error(GaugeError::arg_count("to_percentage", 1, args.len()));
        }
        let num = match number_arg("to_percentage", "num", &args[0]) {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let decimals = match args.get(1) {
            None | Some(Value::Null) => ctx.percentage_decimals,
            Some(v) => match integer_arg("to_percentage", "decimals", v) {
                Ok(d) if (0..=MAX_FIXED_DECIMALS).contains(&d) => d as usize,
                Ok(d) => {
                    return Value::Error(GaugeError::domain_error(format!(
                        "to_percentage() decimals must be between 0 and {}, got {}",
                        MAX_FIXED_DECIMALS, d
                    )))
                }
                Err(e) => return Value::Error(e),
            },
        };
        Value::Text(to_percentage(num, decimals))
    }
}

impl FunctionPlugin for Round {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "round",
            description: "Round to the nearest integer, halves toward positive infinity",
            usage: "round(num)",
            args: &ROUND_ARGS,
            returns: "Number",
            examples: &ROUND_EXAMPLES,
            category: "number",
            related: &ROUND_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_number("round", args, |n| Value::Number(round(n)))
    }
}

impl FunctionPlugin for RoundTo {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "round_to",
            description: "Round to a number of decimal places",
            usage: "round_to(num, decimals)",
            args: &ROUND_TO_ARGS,
            returns: "Number",
            examples: &ROUND_TO_EXAMPLES,
            category: "number",
            related: &ROUND_TO_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 2 {
            return Value::Error(GaugeError::arg_count("round_to", 2, args.len()));
        }
        let num = match number_arg("round_to", "num", &args[0]) {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        match integer_arg("round_to", "decimals", &args[1]) {
            Ok(d) => match i32::try_from(d) {
                Ok(d) => Value::Number(round_to(num, d)),
                Err(_) => Value::Error(GaugeError::domain_error(format!("round_to() decimals out of range: {}", d))),
            },
            Err(e) => Value::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(plugin: &dyn FunctionPlugin, args: Vec<Value>) -> Value {
        plugin.call(&args, &EvalContext::default())
    }

    #[test]
    fn test_radix_plugins() {
        assert_eq!(call(&ToBinary, vec![Value::from(10.0)]), Value::from("1010"));
        assert_eq!(call(&ToHex, vec![Value::from(255.0)]), Value::from("FF"));
        assert_eq!(call(&ToOctal, vec![Value::from(64.0)]), Value::from("100"));
        assert_eq!(call(&ToDecimal, vec![Value::from(4095.0)]), Value::from("4095"));
    }

    #[test]
    fn test_radix_rejects_fractions() {
        let result = call(&ToHex, vec![Value::from(2.5)]);
        assert_eq!(result.as_error().unwrap().code, codes::DOMAIN_ERROR);
        let result = call(&ToBinary, vec![Value::from("10")]);
        assert_eq!(result.as_error().unwrap().code, codes::ARG_TYPE);
    }

    #[test]
    fn test_convert_base_plugin() {
        let result = call(&ConvertBase, vec![Value::from("FF"), Value::from("hex"), Value::from("dec")]);
        assert_eq!(result, Value::from("255"));
        let result = call(&ConvertBase, vec![Value::from("FF"), Value::from("base36"), Value::from("dec")]);
        assert_eq!(result.as_error().unwrap().code, codes::DOMAIN_ERROR);
        let result = call(&ConvertBase, vec![Value::from("xyz"), Value::from("dec"), Value::from("bin")]);
        assert_eq!(result, Value::from("NaN"));
    }

    #[test]
    fn test_to_percentage_defaults_from_context() {
        assert_eq!(call(&ToPercentage, vec![Value::from(0.1234)]), Value::from("12.34%"));
        assert_eq!(call(&ToPercentage, vec![Value::from(0.1234), Value::from(1.0)]), Value::from("12.3%"));

        let ctx = EvalContext::default().with_percentage_decimals(0);
        assert_eq!(ToPercentage.call(&[Value::from(0.5)], &ctx), Value::from("50%"));

        let result = call(&ToPercentage, vec![Value::from(0.5), Value::from(-1.0)]);
        assert_eq!(result.as_error().unwrap().code, codes::DOMAIN_ERROR);
    }

    #[test]
    fn test_rounding_plugins() {
        assert_eq!(call(&Round, vec![Value::from(-5.5)]), Value::from(-5.0));
        assert_eq!(call(&RoundTo, vec![Value::from(5.678), Value::from(2.0)]).as_number().map(|n| (n * 100.0).round()), Some(568.0));
        let result = call(&RoundTo, vec![Value::from(5.678)]);
        assert_eq!(result.as_error().unwrap().code, codes::ARG_COUNT);
    }

    #[test]
    fn test_errors_propagate() {
        let upstream = GaugeError::domain_error("upstream");
        let result = call(&ToDegrees, vec![Value::Error(upstream.clone())]);
        assert_eq!(result, Value::Error(upstream));
    }
}
