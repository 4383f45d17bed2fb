use actix_web::HttpServer;
use bid_uploads::{build_app, config::ServerConfig};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;

    info!("Server running at http://{}:{}", config.host, config.port);
    HttpServer::new(build_app)
        .bind(config.bind_addr())?
        .run()
        .await
}
