use std::net::IpAddr;

use actix_web::{web, HttpRequest};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use common::constants::MESSAGE_TAG;
use common::error_code::NotifyError;
use common::utils::cidr::CidrMatcher;
use models::StoreError;

use crate::notify::validate;
use crate::utils::respond::BackendRes;
use crate::AppState;

#[derive(Deserialize, Serialize, Default, Clone)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

pub async fn req(
    req: HttpRequest,
    state: web::Data<AppState>,
    request_data: SendMessageRequest,
) -> BackendRes<String> {
    let SendMessageRequest {
        user_id,
        message,
        phone_numbers,
    } = request_data;

    //format checks run to completion before anything external is touched
    let (user_id, message) = validate::require_fields(&user_id, &message)?;
    validate::check_user_id(user_id)?;
    validate::check_message_size(message)?;
    validate::check_phone_numbers(&phone_numbers)?;

    //fetched once, reused for authorization and recipient fallback
    let record = state.store.get(user_id).await.map_err(|err| match err {
        StoreError::NotFound => NotifyError::UserNotFound(user_id.to_owned()),
        other => NotifyError::Internal(other.to_string()),
    })?;
    debug!("loaded record for user {}: {:?}", user_id, record);

    let conn = req.connection_info();
    let source_ip: IpAddr = conn
        .realip_remote_addr()
        .ok_or_else(|| NotifyError::Internal("source ip unavailable".to_string()))?
        .parse()
        .map_err(|err| NotifyError::Internal(format!("source ip unparsable: {}", err)))?;

    let matcher =
        CidrMatcher::new(&record.allowed_ips).map_err(|err| NotifyError::Internal(err.to_string()))?;
    if !matcher.contains(source_ip) {
        return Err(NotifyError::AuthorizationDenied(source_ip.to_string()));
    }

    let recipients = if phone_numbers.is_empty() {
        record.phone_numbers
    } else {
        phone_numbers
    };
    if recipients.is_empty() {
        return Err(NotifyError::NoRecipients);
    }

    let body = format!("{}{}", MESSAGE_TAG, message);
    //one awaited send per recipient; the first failure aborts the batch
    //and deliveries already made stand
    for number in &recipients {
        state
            .sender
            .send(number, &body)
            .await
            .map_err(|err| NotifyError::Internal(format!("send to {} failed: {}", number, err)))?;
        debug!("sent to {}", number);
    }
    info!(
        "delivered to {} recipient(s) for user {}",
        recipients.len(),
        user_id
    );

    Ok(None)
}
