/// Groups - a serverless HTTP API for creating and listing group records.
///
/// This crate implements two independent AWS Lambda handlers behind API Gateway:
/// 1. A create handler that stores the request body as a new group under a generated id
/// 2. A list handler that pages through the groups table with an opaque `nextKey` cursor
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - DynamoDB for the groups table
/// - A `GroupStore` trait so the storage client is built once and passed in
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use groups::api::get_groups::list_groups;
/// use groups::infrastructure::persistence::InMemoryGroupStore;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() {
///     groups::setup_logging();
///
///     let store = InMemoryGroupStore::new();
///     let response = list_groups(&store, &json!({
///         "queryStringParameters": { "limit": "2" }
///     }))
///     .await;
///
///     println!("{}", response["body"]);
/// }
/// ```
pub mod api;
pub mod core;
pub mod errors;
pub mod infrastructure;

pub use errors::GroupsError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of each Lambda binary; later calls are
/// ignored.
///
/// # Example
///
/// ```
/// groups::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
