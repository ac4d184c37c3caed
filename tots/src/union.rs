//! Literal union types.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};

/// Render a TypeScript literal union from a list of values.
///
/// Strings render JSON-quoted, integers as-is and floats in their shortest
/// display form (`1.0` becomes `1`); members are joined by `|`. The result is meant to be used as a `ts_type` override.
///
/// ```rust
/// use tots::union_ts_type;
///
/// assert_eq!(union_ts_type(&["asc", "desc"]).unwrap(), r#""asc"|"desc""#);
/// assert_eq!(union_ts_type(&[10, 20, 50]).unwrap(), "10|20|50");
/// ```
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedUnionValue`] for any value that does
/// not serialize to a JSON string or number.
pub fn union_ts_type<T: Serialize>(items: &[T]) -> ConvertResult<String> {
    let members = items
        .iter()
        .map(union_member)
        .collect::<ConvertResult<Vec<_>>>()?;
    Ok(members.join("|"))
}

fn union_member<T: Serialize>(item: &T) -> ConvertResult<String> {
    let literal = serde_json::to_string(item)
        .map_err(|e| ConvertError::UnsupportedUnionValue(e.to_string()))?;
    match serde_json::from_str::<Value>(&literal) {
        Ok(Value::String(_)) => Ok(literal),
        Ok(Value::Number(number)) => Ok(match number.as_f64() {
            Some(float) if number.is_f64() => float.to_string(),
            _ => literal,
        }),
        _ => Err(ConvertError::UnsupportedUnionValue(literal)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings() {
        assert_eq!(
            union_ts_type(&["a", "b", "c", "d"]).unwrap(),
            r#""a"|"b"|"c"|"d""#
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(union_ts_type(&[1, 2, 3, 4]).unwrap(), "1|2|3|4");
    }

    #[test]
    fn test_floats() {
        assert_eq!(union_ts_type(&[1.1, 2.2]).unwrap(), "1.1|2.2");
    }

    #[test]
    fn test_whole_floats_drop_fraction() {
        assert_eq!(union_ts_type(&[1.0, 2.0, 2.5]).unwrap(), "1|2|2.5");
        assert_eq!(union_ts_type(&[-0.5f32]).unwrap(), "-0.5");
    }

    #[test]
    fn test_escaped_string() {
        assert_eq!(union_ts_type(&["say \"hi\""]).unwrap(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_empty() {
        assert_eq!(union_ts_type::<u8>(&[]).unwrap(), "");
    }

    #[test]
    fn test_unsupported_values() {
        assert_eq!(
            union_ts_type(&[json!("a"), json!(true)]),
            Err(ConvertError::UnsupportedUnionValue("true".into()))
        );
        assert!(union_ts_type(&[vec![1, 2]]).is_err());
        assert!(union_ts_type(&[Option::<u8>::None]).is_err());
    }
}
