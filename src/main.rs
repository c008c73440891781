mod errors;
mod handlers;
mod models;
mod routes;
mod store;
mod utils;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use std::collections::HashMap;
use std::io;

use crate::store::LogStore;
use crate::utils::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!("Starting server at {} with {} workers", config.bind_address, config.workers);

    // One store shared by every worker; all data is lost on restart.
    let store = web::Data::new(LogStore::new());

    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "fitness_log_api".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .const_labels(labels)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .wrap(routes::cors())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&config.bind_address)?
    .run()
    .await
}
