//! Cursor protocol for the list endpoint.
//!
//! The continuation token is the JSON form of the storage's last evaluated
//! key, percent-encoded with the same character set as JavaScript's
//! `encodeURIComponent`. Decoding is its exact inverse, so a client pages by
//! passing the previous response's `nextKey` back unmodified.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde_json::Value;

use super::parsing::query_param;
use crate::core::models::Cursor;
use crate::errors::GroupsError;

pub const DEFAULT_LIMIT: i32 = 20;

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub limit: i32,
    pub start_after: Option<Cursor>,
}

impl ListParams {
    /// Reads `limit` and `nextKey` from the request's query string.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either parameter is present but invalid.
    pub fn from_request(payload: &Value) -> Result<Self, GroupsError> {
        Ok(Self {
            start_after: decode_next_key(query_param(payload, "nextKey"))?,
            limit: parse_limit(query_param(payload, "limit"))?,
        })
    }
}

/// # Errors
///
/// Returns a validation error unless `raw` is absent or a positive base-10 integer.
pub fn parse_limit(raw: Option<&str>) -> Result<i32, GroupsError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };

    match raw.parse::<i32>() {
        Ok(limit) if limit > 0 => Ok(limit),
        Ok(limit) => Err(GroupsError::ValidationError(format!(
            "limit should be positive, got {limit}"
        ))),
        Err(e) => Err(GroupsError::ValidationError(format!(
            "limit is not an integer: {e}"
        ))),
    }
}

/// # Errors
///
/// Returns a validation error if `raw` does not percent-decode to a non-empty JSON object.
pub fn decode_next_key(raw: Option<&str>) -> Result<Option<Cursor>, GroupsError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Some(pos) = malformed_escape(raw) {
        return Err(GroupsError::ValidationError(format!(
            "nextKey has a malformed escape at byte {pos}"
        )));
    }

    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| GroupsError::ValidationError(format!("nextKey is not URL-encoded: {e}")))?;

    match serde_json::from_str::<Value>(&decoded) {
        Ok(Value::Object(key)) if !key.is_empty() => Ok(Some(Cursor::new(key))),
        Ok(_) => Err(GroupsError::ValidationError(
            "nextKey is not a key object".to_string(),
        )),
        Err(e) => Err(GroupsError::ValidationError(format!(
            "nextKey is not valid JSON: {e}"
        ))),
    }
}

/// Position of the first `%` not followed by two hex digits.
///
/// `percent_decode_str` passes these through untouched, `decodeURIComponent` rejects them.
fn malformed_escape(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().find_map(|(i, b)| {
        let valid = *b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        (!valid).then_some(i)
    })
}

/// Encodes the storage's last evaluated key for the response, `None` when
/// there are no further pages.
#[must_use]
pub fn encode_next_key(last_evaluated_key: Option<&Cursor>) -> Option<String> {
    let key = last_evaluated_key.filter(|k| !k.is_empty())?;
    let json = Value::Object(key.as_map().clone()).to_string();
    Some(utf8_percent_encode(&json, URI_COMPONENT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn cursor(value: Value) -> Cursor {
        let Value::Object(key) = value else {
            unreachable!()
        };
        Cursor::new(key)
    }

    #[test]
    fn limit_defaults_to_twenty() {
        assert_eq!(parse_limit(None).unwrap(), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("7")).unwrap(), 7);
    }

    #[test]
    fn limit_rejects_out_of_range_and_garbage() {
        for raw in ["0", "-5", "abc", "5abc", "2.5", "99999999999"] {
            assert!(
                matches!(parse_limit(Some(raw)), Err(GroupsError::ValidationError(_))),
                "limit {raw} should be rejected"
            );
        }
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        let key = cursor(json!({"id": "a b/c"}));
        assert_eq!(
            encode_next_key(Some(&key)).unwrap(),
            "%7B%22id%22%3A%22a%20b%2Fc%22%7D"
        );
    }

    #[test]
    fn unreserved_marks_are_left_alone() {
        let key = cursor(json!({"id": "-_.!~*'()"}));
        let encoded = encode_next_key(Some(&key)).unwrap();
        assert!(encoded.contains("-_.!~*'()"), "got {encoded}");
    }

    #[test]
    fn absent_or_empty_key_encodes_to_none() {
        assert_eq!(encode_next_key(None), None);
        assert_eq!(encode_next_key(Some(&Cursor::new(Map::new()))), None);
    }

    #[test]
    fn decoding_inverts_encoding() {
        let key = cursor(json!({"id": "6f1c-ü", "created": 1_700_000_000}));
        let encoded = encode_next_key(Some(&key)).unwrap();

        let decoded = decode_next_key(Some(&encoded)).unwrap().unwrap();

        assert_eq!(decoded, key);
        assert_eq!(encode_next_key(Some(&decoded)).unwrap(), encoded);
    }

    #[test]
    fn escaped_percent_sign_is_accepted() {
        let decoded = decode_next_key(Some("%7B%22id%22%3A%22100%25%22%7D"))
            .unwrap()
            .unwrap();
        assert_eq!(decoded, cursor(json!({"id": "100%"})));
    }

    #[test]
    fn already_decoded_key_is_accepted() {
        // API Gateway decodes query parameters once before the handler sees them
        let decoded = decode_next_key(Some(r#"{"id":"abc"}"#)).unwrap().unwrap();
        assert_eq!(decoded, cursor(json!({"id": "abc"})));
    }

    #[test]
    fn invalid_next_keys_are_rejected() {
        for raw in [
            "not-json",
            "%ZZ",
            "%7B",
            "[1,2]",
            "%7B%7D",
            "%FF%FE",
            r#"{"id":"%ZZ"}"#,
            r#"{"id":"100%"}"#,
            "%7B%22id%22%3A%22a%2%22%7D",
        ] {
            assert!(
                matches!(
                    decode_next_key(Some(raw)),
                    Err(GroupsError::ValidationError(_))
                ),
                "nextKey {raw} should be rejected"
            );
        }
    }
}
