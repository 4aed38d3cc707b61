//! `GET /groups`: one page of groups plus the cursor for the next page.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use super::helpers;
use super::pagination::{ListParams, encode_next_key};
use crate::infrastructure::persistence::GroupStore;

pub use self::function_handler as handler;

/// Kept byte-for-byte; clients match on this body.
pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid paramters.";
pub const SCAN_FAILED_MESSAGE: &str = "Failed to read groups.";

/// Lambda handler for the list endpoint.
///
/// # Errors
///
/// Never fails on request input: invalid parameters become a 400 response
/// and storage failures a 502 response.
#[tracing::instrument(level = "info", skip(store, event))]
pub async fn function_handler<S>(store: &S, event: LambdaEvent<Value>) -> Result<Value, Error>
where
    S: GroupStore + ?Sized,
{
    Ok(list_groups(store, &event.payload).await)
}

/// Validates the query string, scans one page and returns the proxy response.
///
/// No storage call is made when validation fails.
pub async fn list_groups<S>(store: &S, payload: &Value) -> Value
where
    S: GroupStore + ?Sized,
{
    info!("Processing event: {:?}", payload);

    let params = match ListParams::from_request(payload) {
        Ok(params) => params,
        Err(e) => {
            warn!("Failed to parse query parameters: {}", e);
            return helpers::err_response(
                400,
                helpers::origin_headers(),
                INVALID_PARAMETERS_MESSAGE,
            );
        }
    };

    info!(
        limit = params.limit,
        start_after = ?params.start_after,
        "Scan params"
    );

    let page = match store.scan(params.limit, params.start_after.as_ref()).await {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to scan groups: {}", e);
            return helpers::err_response(502, helpers::origin_headers(), SCAN_FAILED_MESSAGE);
        }
    };

    info!(
        count = page.items.len(),
        has_more = page.last_evaluated_key.is_some(),
        "Scan result"
    );

    helpers::json_response(
        200,
        helpers::origin_headers(),
        &json!({
            "items": page.items,
            "nextKey": encode_next_key(page.last_evaluated_key.as_ref())
        }),
    )
}
