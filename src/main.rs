mod admin;
mod booking;
mod config;
mod database;
mod error;
mod models;
mod protocol;
mod stats;
mod utils;

#[cfg(test)]
mod testing;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{error::InternalError, middleware::Logger, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use log::info;

use crate::{config::Config, database::BookingStore, protocol::ErrorResponse};

/// Mounts every `/api` route. Static files are registered separately so they
/// never shadow an API path.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .configure(booking::config)
            .configure(admin::config)
            .configure(stats::config),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new("Invalid JSON body"));
        InternalError::from_response(err, response).into()
    })
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let config = Config::from_env()?;

    let store = web::Data::new(BookingStore::new(config.bookings_file.clone()));
    store
        .ensure_exists()
        .with_context(|| format!("creating {}", config.bookings_file.display()))?;
    let admin = web::Data::new(config.admin.clone());
    let static_dir = config.static_dir.clone();

    info!("Starting booking server on {}", config.bind_addr);
    info!("Bookings are stored in {}", store.path().display());
    info!("Serving static files from {}", static_dir.display());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(store.clone())
            .app_data(admin.clone())
            .configure(configure_api)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(&config.bind_addr)
    .with_context(|| format!("binding {}", config.bind_addr))?
    .run()
    .await
    .context("server error")
}
