use anyhow::Context;
use groups::core::config::AppConfig;
use groups::infrastructure::persistence::DynamoGroupStore;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    groups::setup_logging();

    let config = AppConfig::from_env().context("get-groups config")?;
    let store = DynamoGroupStore::from_config(&config).await;
    let store = &store;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        groups::api::get_groups_handler(store, event).await
    }))
    .await
}
