mod cache;
mod config;
mod error;
mod formatting;
mod handlers;
mod models;
mod provider;
mod routes;
mod state;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::provider::client::AcuityClient;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env().inspect_err(|e| error!("refusing to start: {:#}", e))?;
    info!("loaded configuration: {:?}", settings);

    let client = AcuityClient::from_settings(&settings)?;
    let state = web::Data::new(AppState::new(&settings, Arc::new(client)));

    info!("listening on {}:{}", settings.bind_address, settings.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes::init)
    })
    .bind((settings.bind_address.clone(), settings.port))?
    .run()
    .await?;

    Ok(())
}
