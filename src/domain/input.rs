// Coercion of loosely typed values (JSON, mappings, sequences) into employee fields.

use crate::utils::error::{RecordError, Result};
use crate::utils::validation;
use serde_json::Value;

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integers pass through, floats only when they have no fractional part, and
/// strings are parsed after trimming. Everything else is rejected with a reason.
pub(crate) fn coerce_int(value: &Value) -> std::result::Result<i64, String> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            match number.as_f64() {
                Some(float) if float.fract() != 0.0 => {
                    Err(format!("expected an integer, got {}", number))
                }
                Some(float) if float.is_finite() && float.abs() < i64::MAX as f64 => {
                    Ok(float as i64)
                }
                _ => Err(format!("integer out of range: {}", number)),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid literal for integer: '{}'", text)),
        other => Err(format!("expected an integer, got {}", kind_of(other))),
    }
}

/// Name fields must arrive as strings; `null` is accepted only for the patronymic.
pub(crate) fn coerce_name(value: &Value, is_patronymic: bool) -> Result<Option<String>> {
    match value {
        Value::String(text) => validation::validate_name(Some(text), is_patronymic),
        Value::Null if is_patronymic => Ok(None),
        _ if is_patronymic => Err(RecordError::validation(
            "Patronymic must be absent or a string",
        )),
        _ => Err(RecordError::validation("Name must be a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int(&json!(7)), Ok(7));
        assert_eq!(coerce_int(&json!(-7)), Ok(-7));
        assert_eq!(coerce_int(&json!(7.0)), Ok(7));
        assert_eq!(
            coerce_int(&json!(7.9)),
            Err("expected an integer, got 7.9".to_string())
        );
        assert!(coerce_int(&json!(-0.5)).is_err());
        assert_eq!(coerce_int(&json!(" 42 ")), Ok(42));
        assert!(coerce_int(&json!("4x")).is_err());
        assert!(coerce_int(&json!(null)).is_err());
        assert!(coerce_int(&json!(true)).is_err());
        assert!(coerce_int(&json!([1])).is_err());
        assert!(coerce_int(&json!(u64::MAX)).is_err());
    }

    #[test]
    fn test_coerce_name() {
        assert_eq!(
            coerce_name(&json!(" Ivan "), false).unwrap(),
            Some("Ivan".to_string())
        );
        assert_eq!(coerce_name(&json!(null), true).unwrap(), None);

        let err = coerce_name(&json!(null), false).unwrap_err();
        assert_eq!(err.message(), "Name must be a string");

        let err = coerce_name(&json!(12), true).unwrap_err();
        assert_eq!(err.message(), "Patronymic must be absent or a string");
    }
}
