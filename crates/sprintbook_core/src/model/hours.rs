//! Lenient hour-field deserialization.
//!
//! The hand-maintained datasets occasionally carry placeholder text or nulls
//! where a number belongs. Those entries count as zero hours instead of
//! failing the whole document, matching how the tables have always read them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_as_hours(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

/// Deserializes a single hour field, mapping non-numeric input to `0.0`.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_hours(&value))
}

/// Deserializes an hour sequence, mapping non-numeric entries to `0.0`.
pub(crate) fn lenient_seq<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.iter().map(value_as_hours).collect())
}

#[cfg(test)]
mod tests {
    use super::value_as_hours;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(value_as_hours(&json!(2.5)), 2.5);
        assert_eq!(value_as_hours(&json!(6)), 6.0);
    }

    #[test]
    fn non_numeric_entries_count_as_zero() {
        assert_eq!(value_as_hours(&json!("n/a")), 0.0);
        assert_eq!(value_as_hours(&json!(null)), 0.0);
        assert_eq!(value_as_hours(&json!(true)), 0.0);
    }
}
