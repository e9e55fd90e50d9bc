//! Helper functions for text operations

use gauge_core::{GaugeError, Value};

/// Extract text from a Value, handling null propagation
pub fn extract_text(value: &Value) -> Result<Option<&str>, GaugeError> {
    match value {
        Value::Text(s) => Ok(Some(s.as_str())),
        Value::Null => Ok(None),
        Value::Error(e) => Err(e.clone()),
        other => Err(GaugeError::type_error("Text", other.type_name())),
    }
}

/// Apply a one-argument string transform to registry arguments.
///
/// `Null` input yields `Null`; errors in the argument propagate.
pub fn unary_text(func: &str, args: &[Value], f: fn(&str) -> String) -> Value {
    if args.len() != 1 {
        return Value::Error(GaugeError::arg_count(func, 1, args.len()));
    }

    match extract_text(&args[0]) {
        Ok(Some(s)) => Value::Text(f(s)),
        Ok(None) => Value::Null,
        Err(e) => Value::Error(e),
    }
}
