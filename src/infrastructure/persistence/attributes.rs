//! Mapping between JSON documents and DynamoDB attribute values.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Number, Value};

use crate::errors::GroupsError;

pub type Item = HashMap<String, AttributeValue>;

#[must_use]
pub fn to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(to_item(fields)),
    }
}

#[must_use]
pub fn to_item(fields: &Map<String, Value>) -> Item {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), to_attribute(v)))
        .collect()
}

/// # Errors
///
/// Returns an error for a non-numeric `N` value or an attribute type this SDK
/// version does not know about.
pub fn from_attribute(attribute: &AttributeValue) -> Result<Value, GroupsError> {
    let value = match attribute {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(from_attribute)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(from_item(fields)?),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|b| Value::String(STANDARD.encode(b.as_ref())))
                .collect(),
        ),
        other => {
            return Err(GroupsError::ConversionError(format!(
                "unsupported attribute type: {other:?}"
            )));
        }
    };
    Ok(value)
}

/// # Errors
///
/// Returns an error if any attribute cannot be represented as JSON.
pub fn from_item(item: &Item) -> Result<Map<String, Value>, GroupsError> {
    item.iter()
        .map(|(k, v)| from_attribute(v).map(|json| (k.clone(), json)))
        .collect()
}

fn parse_number(raw: &str) -> Result<Number, GroupsError> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Ok(Number::from(u));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| GroupsError::ConversionError(format!("not a number: {raw}")))
}
