//! Lenient field deserializers for the raw input documents
//!
//! The exported documents are not consistent about value types: ids and date parts
//! show up as strings in some records and as numbers in others. These helpers accept
//! both and treat anything else as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Custom deserializer for an optional string that may be encoded as a number
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

/// Custom deserializer for a list of ids, skipping entries that are not ids
pub fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(value_to_string)
            .filter(|id| !id.is_empty())
            .collect(),
        Some(single @ (Value::String(_) | Value::Number(_))) => {
            value_to_string(single).into_iter().collect()
        }
        _ => Vec::new(),
    })
}

/// Custom deserializer for a date part given as a number or a numeric string
pub fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
