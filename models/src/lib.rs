//! access to per-user records held in external storage

pub mod object_store;
pub mod user_record;

use async_trait::async_trait;
use thiserror::Error;

use user_record::UserRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("storage unreachable: {0}")]
    Access(String),
    #[error("stored record malformed: {0}")]
    Malformed(String),
}

/// Keyed lookup of user records, one implementation per backing store.
/// Callers fetch a record at most once per request.
#[async_trait]
pub trait UserRecordStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<UserRecord, StoreError>;
}
