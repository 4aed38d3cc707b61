//! `POST /groups`: stores the request body as a new group under a fresh id.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::core::models::Group;
use crate::infrastructure::persistence::GroupStore;

pub use self::function_handler as handler;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";
pub const STORE_FAILED_MESSAGE: &str = "Failed to store group.";

/// Lambda handler for the create endpoint.
///
/// # Errors
///
/// Never fails on request input: malformed bodies become a 400 response and
/// storage failures a 502 response.
#[tracing::instrument(level = "info", skip(store, event))]
pub async fn function_handler<S>(store: &S, event: LambdaEvent<Value>) -> Result<Value, Error>
where
    S: GroupStore + ?Sized,
{
    Ok(create_group(store, &event.payload).await)
}

/// Builds `{id} + body`, persists it and returns the proxy response.
pub async fn create_group<S>(store: &S, payload: &Value) -> Value
where
    S: GroupStore + ?Sized,
{
    info!("Processing event: {:?}", payload);

    let attributes = match parsing::parse_group_body(payload) {
        Ok(attributes) => attributes,
        Err(e) => {
            warn!("Rejected create request: {}", e);
            return helpers::err_response(400, helpers::cors_headers(), INVALID_BODY_MESSAGE);
        }
    };

    let new_item = Group::new(Uuid::new_v4().to_string(), attributes);

    if let Err(e) = store.put(&new_item).await {
        error!(id = ?new_item.id(), "Failed to store group: {}", e);
        return helpers::err_response(502, helpers::cors_headers(), STORE_FAILED_MESSAGE);
    }

    info!(id = ?new_item.id(), "Created group");
    helpers::json_response(201, helpers::cors_headers(), &json!({ "newItem": new_item }))
}
