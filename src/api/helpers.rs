//! Response builders for the API Gateway proxy integration.
//!
//! Every response is a proxy result object whose `body` is a JSON string.

use serde_json::{Value, json};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "OPTIONS,POST,GET";
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Full cross-origin header set sent by the create endpoint.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": ALLOW_ORIGIN,
        "Access-Control-Allow-Methods": ALLOW_METHODS,
        "Access-Control-Allow-Headers": ALLOW_HEADERS
    })
}

/// Minimal cross-origin header set sent by the list endpoint.
#[must_use]
pub fn origin_headers() -> Value {
    json!({ "Access-Control-Allow-Origin": ALLOW_ORIGIN })
}

/// Returns a response with the given status, headers and JSON body.
#[must_use]
pub fn json_response(status_code: u16, headers: Value, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, headers: Value, message: &str) -> Value {
    json_response(status_code, headers, &json!({ "error": message }))
}
