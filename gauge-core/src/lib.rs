//! Gauge Core - Fundamental types
//!
//! This crate provides the core types shared by every Gauge library:
//! - `Value`: Runtime values passed through the function registry
//! - `GaugeError`: Structured errors carried inside `Value::Error`

mod value;
mod error;

pub use value::Value;
pub use error::{GaugeError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, GaugeError, Severity};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_number_accessors() {
            let v = Value::from(42.5);
            assert_eq!(v.as_number(), Some(42.5));
            assert_eq!(v.as_text(), None);
            assert_eq!(v.type_name(), "Number");
        }

        #[test]
        fn test_integer_accessor() {
            assert_eq!(Value::from(7.0).as_integer(), Some(7));
            assert_eq!(Value::from(-3.0).as_integer(), Some(-3));
            assert_eq!(Value::from(7.5).as_integer(), None);
            assert_eq!(Value::from(f64::NAN).as_integer(), None);
            assert_eq!(Value::from(1e30).as_integer(), None);
        }

        #[test]
        fn test_text_accessors() {
            let v = Value::from("hello");
            assert_eq!(v.as_text(), Some("hello"));
            assert_eq!(v.type_name(), "Text");
        }

        #[test]
        fn test_display() {
            assert_eq!(Value::from(1000.0).to_string(), "1000");
            assert_eq!(Value::from(0.25).to_string(), "0.25");
            assert_eq!(Value::from("abc").to_string(), "abc");
            assert_eq!(Value::Null.to_string(), "null");
            let list = Value::List(vec![Value::from(1.0), Value::from("x")]);
            assert_eq!(list.to_string(), "[1, x]");
        }

        #[test]
        fn test_get_field() {
            let mut map = std::collections::HashMap::new();
            map.insert("name".to_string(), Value::from("m"));
            let obj = Value::Object(map);
            assert_eq!(obj.get("name").as_text(), Some("m"));
            assert!(obj.get("missing").is_error());
            assert!(Value::from(1.0).get("name").is_error());
        }

        #[test]
        fn test_serialize_tagged() {
            let json = serde_json::to_string(&Value::from(2.0)).unwrap();
            assert_eq!(json, r#"{"type":"Number","value":2.0}"#);
            let back: Value = serde_json::from_str(r#"{"type":"Text","value":"km"}"#).unwrap();
            assert_eq!(back.as_text(), Some("km"));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_display() {
            let err = GaugeError::arg_count("to_hex", 1, 0);
            assert_eq!(err.code, codes::ARG_COUNT);
            assert!(err.to_string().starts_with("[ARG_COUNT] to_hex() expects 1 arguments, got 0"));
        }

        #[test]
        fn test_conversion_unsupported_keeps_message() {
            let err = GaugeError::conversion_unsupported("m", "unsupported");
            assert_eq!(err.code, codes::CONVERSION_UNSUPPORTED);
            assert_eq!(err.message, "Conversion from \"m\" to \"unsupported\" is not supported.");
        }

        #[test]
        fn test_severity_builder() {
            let err = GaugeError::undefined_func("nope");
            assert_eq!(err.severity, Severity::Error);
            let err = err.with_severity(Severity::Fatal);
            assert_eq!(err.severity, Severity::Fatal);
            let err = GaugeError::domain_error("bad").with_severity(Severity::Warning);
            assert_eq!(err.severity, Severity::Warning);
        }

        #[test]
        fn test_error_serializes_without_empty_suggestion() {
            let err = GaugeError::new("X", "y");
            let json = serde_json::to_value(&err).unwrap();
            assert!(json.get("suggestion").is_none());
            assert_eq!(json["severity"], "error");
        }
    }
}
