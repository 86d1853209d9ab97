//! Error codes for the viewer API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// The game_id query parameter is missing or empty
    MissingGameId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Upstream scoring service
    /// The scoring service answered with an unexpected status
    UpstreamStatus,
    /// The scoring service could not be reached or decoded
    UpstreamUnreachable,

    // General
    /// Resource not found
    NotFound,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingGameId => "MISSING_GAME_ID",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UpstreamStatus => "UPSTREAM_STATUS",
            ErrorCode::UpstreamUnreachable => "UPSTREAM_UNREACHABLE",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
