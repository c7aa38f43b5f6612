use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{StoreError, UserRecordStore};

/// Per-user configuration, one stored object per user id. A record without
/// an allowlist is malformed, a record without default recipients is not.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserRecord {
    /// source addresses allowed to send on behalf of this user, cidr notation
    pub allowed_ips: Vec<String>,
    /// default recipients used when a request names none
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

/// Map-backed store for tests and local runs.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<String, UserRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: &str, record: UserRecord) {
        self.records.insert(user_id.to_owned(), record);
    }
}

#[async_trait]
impl UserRecordStore for MemoryStore {
    async fn get(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        self.records
            .get(user_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
