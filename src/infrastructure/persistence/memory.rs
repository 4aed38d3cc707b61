use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::GroupStore;
use crate::core::models::{Cursor, Group, ID_FIELD, ScanPage};
use crate::errors::GroupsError;

/// In-process groups table ordered by id.
///
/// Scans follow DynamoDB's contract: the cursor is the key of the last
/// returned item, and is only handed out while more items remain.
#[derive(Debug, Default)]
pub struct InMemoryGroupStore {
    groups: RwLock<BTreeMap<String, Group>>,
}

impl InMemoryGroupStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.groups.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.groups.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Option<Group> {
        self.groups.read().await.get(id).cloned()
    }
}

#[async_trait]
impl GroupStore for InMemoryGroupStore {
    async fn put(&self, group: &Group) -> Result<(), GroupsError> {
        let id = group
            .id()
            .ok_or_else(|| GroupsError::StoreError("group is missing its id key".to_string()))?;

        self.groups
            .write()
            .await
            .insert(id.to_string(), group.clone());
        Ok(())
    }

    async fn scan(
        &self,
        limit: i32,
        start_after: Option<&Cursor>,
    ) -> Result<ScanPage, GroupsError> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l > 0)
            .ok_or_else(|| GroupsError::StoreError(format!("limit must be positive: {limit}")))?;

        let lower = match start_after {
            Some(cursor) => {
                let id = cursor
                    .as_map()
                    .get(ID_FIELD)
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        GroupsError::StoreError("start key does not match the table key".into())
                    })?;
                Bound::Excluded(id.to_string())
            }
            None => Bound::Unbounded,
        };

        let groups = self.groups.read().await;
        let mut remaining = groups.range((lower, Bound::Unbounded));
        let items: Vec<Group> = remaining.by_ref().take(limit).map(|(_, g)| g.clone()).collect();

        let last_evaluated_key = if remaining.next().is_some() {
            items.last().and_then(Group::id).map(|id| {
                let mut key = Map::new();
                key.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
                Cursor::new(key)
            })
        } else {
            None
        };

        Ok(ScanPage {
            items,
            last_evaluated_key,
        })
    }
}
