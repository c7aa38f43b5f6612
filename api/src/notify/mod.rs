//! sms notification http service

pub mod handlers;
pub mod validate;

use actix_web::{get, post, web, HttpRequest, Responder};
use tracing::debug;

use crate::utils::respond::gen_extra_respond;
use crate::AppState;

pub use handlers::send_message::SendMessageRequest;

/**
 * @api {post} /notify/sendMessage 发送短信给用户的接收人
 * @apiVersion 0.0.1
 * @apiName SendMessage
 * @apiGroup Notify
 * @apiBody {String} user_id  8 to 12 digit registered user id
 * @apiBody {String} message  raw text, at most 80 utf-8 bytes
 * @apiBody {String[]} [phone_numbers]  explicit recipients, `+8210`/`+82010` prefixed;
 *  defaults to the user's configured list
 * @apiSuccess {string="0","1","2001","2002","2003","2004","2005","2006","2007"} code  opaque result code
 */
#[tracing::instrument(skip_all, fields(trace_id = common::log::generate_trace_id()))]
#[post("/notify/sendMessage")]
async fn send_message(
    req: HttpRequest,
    state: web::Data<AppState>,
    request_data: web::Json<SendMessageRequest>,
) -> impl Responder {
    debug!("{}", serde_json::to_string(&request_data.0).unwrap());
    gen_extra_respond(handlers::send_message::req(req, state, request_data.into_inner()).await)
}

#[get("/hello/{msg}")]
async fn hello(msg: web::Path<String>) -> impl Responder {
    msg.into_inner()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(send_message).service(hello);
}
