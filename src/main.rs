mod config;
mod handlers;
mod middleware;
mod models;
mod providers;
mod routes;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use handlers::not_found;
use models::ProviderKind;
use providers::{build_client, ProviderSet};
use routes::api;
use services::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub search_service: SearchService,
    pub config: Config,
    pub start_time: Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match build_client(&config.upstream) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let providers = ProviderSet::from_config(&config, client);
    for kind in [
        ProviderKind::Twitter,
        ProviderKind::Facebook,
        ProviderKind::GoogleNews,
    ] {
        if !providers.get(kind).is_configured() {
            warn!("{} API not configured, its searches will fail", kind);
        }
    }
    info!("Facebook search mode: {:?}", config.facebook.mode);

    info!(
        "Starting Keyword Insights Service on port {}",
        config.server.port
    );

    let state = AppState {
        search_service: SearchService::new(providers),
        config: config.clone(),
        start_time: Instant::now(),
    };

    // Create HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::cors())
            .wrap(Logger::default())
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
