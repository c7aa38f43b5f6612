use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{error, warn};

use common::error_code::{ErrorCode, NotifyError};

pub type BackendRes<D, E = NotifyError> = Result<Option<D>, E>;

/// Wire envelope. `code` is the only thing a caller can act on, failure
/// detail never leaves the log.
#[derive(Deserialize, Serialize)]
pub struct BackendRespond<T: Serialize> {
    //"0" default success
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn generate_ok_respond(info: Option<impl Serialize>) -> HttpResponse {
    HttpResponse::Ok().json(BackendRespond {
        code: "0".to_string(),
        data: info,
    })
}

pub fn generate_error_respond<E: ErrorCode + Display>(error: E) -> HttpResponse {
    let status =
        StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(BackendRespond::<String> {
        code: error.code().to_string(),
        data: None,
    })
}

pub fn gen_extra_respond<D: Serialize, E: ErrorCode + Display>(
    inner_res: BackendRes<D, E>,
) -> impl Responder {
    match inner_res {
        Ok(data) => generate_ok_respond(data),
        Err(error) => {
            if error.http_status() >= 500 {
                error!("request failed: {}", error);
            } else {
                warn!("request rejected: {}", error);
            }
            generate_error_respond(error)
        }
    }
}

/// Bodies that cannot be deserialized (malformed json, wrong field type)
/// surface through the same opaque channel as a missing field.
pub fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("request body rejected: {}", err);
        InternalError::from_response(err, generate_error_respond(NotifyError::MissingFields)).into()
    })
}
