//! Upstream scoring-service configuration.

use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_REFRESH_SECS: u64 = 10;

// Deployment variants refresh between 10 and 60 seconds.
pub const MIN_REFRESH_SECS: u64 = 10;
pub const MAX_REFRESH_SECS: u64 = 60;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// Endpoint queried as `GET {base_url}?game_id=<id>`.
    pub base_url: String,
    /// How often render surfaces should re-trigger a tick.
    pub refresh_secs: u64,
    pub request_timeout: Duration,
}

impl UpstreamConfig {
    /// Read configuration from the environment.
    ///
    /// `VIEWER_UPSTREAM_URL` is required; `VIEWER_REFRESH_SECS` defaults
    /// to 10 and is clamped into the supported window.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = env::var("VIEWER_UPSTREAM_URL")
            .map_err(|_| AppError::config("VIEWER_UPSTREAM_URL must be set".to_string()))?;

        let refresh_secs = match env::var("VIEWER_REFRESH_SECS") {
            Ok(raw) => {
                let parsed = raw.parse::<u64>().map_err(|_| {
                    AppError::config(format!(
                        "VIEWER_REFRESH_SECS must be a number of seconds, got: {raw}"
                    ))
                })?;
                let clamped = parsed.clamp(MIN_REFRESH_SECS, MAX_REFRESH_SECS);
                if clamped != parsed {
                    tracing::warn!(
                        requested = parsed,
                        effective = clamped,
                        "VIEWER_REFRESH_SECS outside the supported window"
                    );
                }
                clamped
            }
            Err(_) => DEFAULT_REFRESH_SECS,
        };

        Ok(Self {
            base_url,
            refresh_secs,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            refresh_secs: DEFAULT_REFRESH_SECS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
