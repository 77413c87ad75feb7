mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;
use std::sync::Arc;
use crate::config::Config;
use crate::db::{EmployeeStore, PgEmployeeStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("Failed to connect to the database: {:?}", err);
        io::Error::new(io::ErrorKind::ConnectionRefused, err.to_string())
    })?;

    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));
    let store = web::Data::from(store);

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
