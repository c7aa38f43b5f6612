//! navi.ai sms notification backend service

pub mod notify;
pub mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware, web, App, HttpServer};
use tracing::info;

use common::env::EnvConf;
use models::object_store::ObjectStore;
use models::UserRecordStore;

use crate::utils::respond::json_error_config;
use crate::utils::sms::{SmsSender, TwilioSender};

/// Handles shared by every request, injected at construction.
pub struct AppState {
    pub store: Arc<dyn UserRecordStore>,
    pub sender: Arc<dyn SmsSender>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    common::log::init_logger();
    let conf = EnvConf::load().expect("contents of configuration file invalid");
    info!("starting api in {} mode", conf.service_mode);

    let state = web::Data::new(AppState {
        store: Arc::new(ObjectStore::new(&conf.user_store)),
        sender: Arc::new(TwilioSender::new(&conf.sms)),
    });

    let service: String = format!("0.0.0.0:{}", conf.api_port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_error_config())
            .wrap(middleware::Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
                    .allowed_header(http::header::CONTENT_TYPE)
                    .max_age(3600),
            )
            .configure(notify::configure_routes)
    })
    .bind(service)?
    .run()
    .await
}
