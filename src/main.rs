use actix_web::{middleware, web, App, HttpServer};
use diesel::{Connection, PgConnection};
use eyre::WrapErr;
use log::info;
use crate::app_state::AppState;
use crate::config::Config;
use crate::db_service::DbService;

mod app_state;
mod config;
mod controller;
mod db_service;
mod error;
mod logger;
#[cfg(test)]
mod memory_service;
mod models;
mod schema;
mod store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    logger::setup_logger(&config.log_path, config.log_level)?;

    let connection = PgConnection::establish(&config.database_url)
        .wrap_err("Error connecting to the database")?;
    let state = AppState::new(DbService::new(connection));

    info!("Listening on {}:{}", config.bind_address, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(controller::configure)
            .default_service(web::to(controller::not_found))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
