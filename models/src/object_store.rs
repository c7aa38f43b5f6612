//! user records as json objects in an s3-compatible bucket

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use common::env::UserStoreConf;

use crate::user_record::UserRecord;
use crate::{StoreError, UserRecordStore};

/// Fetches `<endpoint>/<bucket>/<user_id>.json` over http.
pub struct ObjectStore {
    client: reqwest::Client,
    endpoint: String,
    bucket: String,
}

impl ObjectStore {
    pub fn new(conf: &UserStoreConf) -> Self {
        ObjectStore {
            client: reqwest::Client::new(),
            endpoint: conf.endpoint.trim_end_matches('/').to_owned(),
            bucket: conf.bucket.clone(),
        }
    }

    fn object_url(&self, user_id: &str) -> String {
        format!("{}/{}/{}.json", self.endpoint, self.bucket, user_id)
    }
}

#[async_trait]
impl UserRecordStore for ObjectStore {
    async fn get(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        let url = self.object_url(user_id);
        debug!("fetching record {}", url);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| StoreError::Access(err.to_string()))?;
        match res.status() {
            StatusCode::NOT_FOUND => Err(StoreError::NotFound),
            status if status.is_success() => {
                let body = res
                    .text()
                    .await
                    .map_err(|err| StoreError::Access(err.to_string()))?;
                serde_json::from_str(&body).map_err(|err| StoreError::Malformed(err.to_string()))
            }
            status => Err(StoreError::Access(format!("object get returned {}", status))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_layout() {
        let store = ObjectStore::new(&UserStoreConf {
            endpoint: "http://127.0.0.1:9000/".to_string(),
            bucket: "navi-users".to_string(),
        });
        assert_eq!(
            store.object_url("123456789"),
            "http://127.0.0.1:9000/navi-users/123456789.json"
        );
    }
}
