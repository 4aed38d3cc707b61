use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use tracing::{debug, info};

use super::GroupStore;
use super::attributes::{Item, from_item, to_item};
use crate::core::config::AppConfig;
use crate::core::models::{Cursor, Group, ScanPage};
use crate::errors::GroupsError;

/// Groups table backed by DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoGroupStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoGroupStore {
    #[must_use]
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Loads the shared AWS config from the environment and builds a client,
    /// honouring `DYNAMODB_ENDPOINT` when set.
    pub async fn from_config(config: &AppConfig) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(endpoint) = &config.dynamodb_endpoint {
            info!(endpoint = %endpoint, "Using DynamoDB endpoint override");
            loader = loader.endpoint_url(endpoint);
        }
        let shared = loader.load().await;

        Self::new(DynamoClient::new(&shared), config.groups_table.clone())
    }
}

#[async_trait]
impl GroupStore for DynamoGroupStore {
    async fn put(&self, group: &Group) -> Result<(), GroupsError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(group.attributes())))
            .send()
            .await?;

        debug!(table = %self.table_name, id = ?group.id(), "Stored group");
        Ok(())
    }

    async fn scan(
        &self,
        limit: i32,
        start_after: Option<&Cursor>,
    ) -> Result<ScanPage, GroupsError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit)
            .set_exclusive_start_key(exclusive_start_key(start_after))
            .send()
            .await?;

        page_from_output(&output)
    }
}

fn exclusive_start_key(start_after: Option<&Cursor>) -> Option<Item> {
    start_after.map(|cursor| to_item(cursor.as_map()))
}

/// An empty `LastEvaluatedKey` map means the scan reached the end of the table.
fn page_from_output(output: &ScanOutput) -> Result<ScanPage, GroupsError> {
    let items = output
        .items()
        .iter()
        .map(|item| from_item(item).map(Group::from_attributes))
        .collect::<Result<Vec<_>, _>>()?;

    let last_evaluated_key = match output.last_evaluated_key() {
        Some(key) if !key.is_empty() => Some(Cursor::new(from_item(key)?)),
        _ => None,
    };

    Ok(ScanPage {
        items,
        last_evaluated_key,
    })
}
