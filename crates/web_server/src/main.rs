//! Main entry point for the Caffebar Hölderlin backend server.
//! This crate wires the storage gateway into the REST API and serves it over HTTP.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use document_store::StorageGateway;
use web_handlers::configure;

/// Listener configuration read from the environment.
mod config;
use config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting Caffebar Hölderlin backend...");

    let config = ServerConfig::from_env()?;

    // Create the storage gateway once; every worker shares it
    let gateway = StorageGateway::connect_from_env().await;
    if gateway.is_initialized() {
        match gateway.ping().await {
            Ok(()) => log::info!("✅ Database connection successful"),
            Err(e) => {
                log::error!("❌ Database connection test failed: {}", e);
                log::warn!("💡 Submissions will fail until MongoDB is reachable");
            }
        }
    }
    let gateway = web::Data::new(gateway);

    log::info!(
        "🌐 Server will be available at: http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(gateway.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(config.address())?
    .run()
    .await
}
