use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use viewer::config::upstream::UpstreamConfig;
use viewer::middleware::cors::cors_middleware;
use viewer::middleware::request_trace::RequestTrace;
use viewer::middleware::structured_logger::StructuredLogger;
use viewer::routes;
use viewer::state::app_state::AppState;
use viewer::upstream::client::HttpSnapshotSource;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("VIEWER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("VIEWER_PORT")
        .unwrap_or_else(|_| "3002".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ VIEWER_PORT must be a valid port number");
            std::process::exit(1);
        });

    let config = match UpstreamConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to read configuration: {e}");
            std::process::exit(1);
        }
    };

    let source = match HttpSnapshotSource::new(&config) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ Failed to build upstream client: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting Whist Viewer on http://{}:{}", host, port);
    println!("👀 Watching scores at {}", config.base_url);

    let app_state = AppState::new(Arc::new(source), config.refresh_secs);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
