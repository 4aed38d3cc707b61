/// Persistence layer for group records.
///
/// Handlers talk to storage only through [`GroupStore`], so the DynamoDB
/// client is built once per process and handed in explicitly.
pub mod attributes;
pub mod dynamo;
pub mod memory;

use async_trait::async_trait;

use crate::core::models::{Cursor, Group, ScanPage};
use crate::errors::GroupsError;

pub use dynamo::DynamoGroupStore;
pub use memory::InMemoryGroupStore;

#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Unconditional upsert keyed by the group's id.
    async fn put(&self, group: &Group) -> Result<(), GroupsError>;

    /// Reads at most `limit` groups, starting after `start_after` when given.
    async fn scan(&self, limit: i32, start_after: Option<&Cursor>)
    -> Result<ScanPage, GroupsError>;
}
