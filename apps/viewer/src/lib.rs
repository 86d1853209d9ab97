#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_support;
pub mod trace_ctx;
pub mod upstream;

// Re-exports for public API
pub use config::upstream::UpstreamConfig;
pub use error::AppError;
pub use extractors::game_id::GameId;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
