use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::errors::GroupsError;

/// Looks up a query string parameter. Empty values count as absent.
pub fn query_param<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    payload
        .get("queryStringParameters")
        .and_then(|params| params.get(name))
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
}

/// Returns the raw request body, base64-decoding it when the gateway flagged it.
///
/// # Errors
///
/// Returns an error if the body is flagged as base64 but is not valid base64 or UTF-8.
pub fn request_body(payload: &Value) -> Result<Option<String>, GroupsError> {
    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Ok(None);
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(Some(body.to_string()));
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| GroupsError::ParseError(format!("invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| GroupsError::ParseError(format!("body is not UTF-8: {e}")))
}

/// Parses the create request body into the caller's group attributes.
///
/// A missing or `null` body yields no attributes.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON or not a JSON object.
pub fn parse_group_body(payload: &Value) -> Result<Map<String, Value>, GroupsError> {
    let Some(body) = request_body(payload)? else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(&body)? {
        Value::Object(attributes) => Ok(attributes),
        Value::Null => Ok(Map::new()),
        other => Err(GroupsError::ParseError(format!(
            "expected a JSON object, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_param_handles_missing_null_and_empty() {
        assert_eq!(query_param(&json!({}), "limit"), None);
        assert_eq!(
            query_param(&json!({"queryStringParameters": null}), "limit"),
            None
        );
        assert_eq!(
            query_param(&json!({"queryStringParameters": {"limit": ""}}), "limit"),
            None
        );
        assert_eq!(
            query_param(&json!({"queryStringParameters": {"limit": "5"}}), "limit"),
            Some("5")
        );
    }

    #[test]
    fn base64_body_is_decoded() {
        let payload = json!({"body": "eyJuYW1lIjoiQ2x1YiJ9", "isBase64Encoded": true});
        let attributes = parse_group_body(&payload).unwrap();
        assert_eq!(attributes["name"], "Club");
    }

    #[test]
    fn missing_body_gives_empty_attributes() {
        assert!(parse_group_body(&json!({"body": null})).unwrap().is_empty());
        assert!(parse_group_body(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in ["[1,2]", "\"name\"", "42", "{not json"] {
            let result = parse_group_body(&json!({ "body": body }));
            assert!(
                matches!(result, Err(GroupsError::ParseError(_))),
                "body {body} should be rejected"
            );
        }
    }
}
