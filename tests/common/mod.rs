#![allow(dead_code)]

use async_trait::async_trait;
use groups::GroupsError;
use groups::core::models::{Cursor, Group, ScanPage};
use groups::infrastructure::persistence::GroupStore;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store that fails every call and counts how often it was hit.
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GroupStore for FailingStore {
    async fn put(&self, _group: &Group) -> Result<(), GroupsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GroupsError::StoreError("ProvisionedThroughputExceededException".into()))
    }

    async fn scan(&self, _limit: i32, _start: Option<&Cursor>) -> Result<ScanPage, GroupsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GroupsError::StoreError("ResourceNotFoundException".into()))
    }
}

/// Parses the JSON string body of a proxy response.
pub fn body_of(response: &Value) -> Value {
    let raw = response["body"].as_str().expect("body should be a string");
    serde_json::from_str(raw).expect("body should be JSON")
}
