//! Error handling for the viewer.

pub mod error_code;

pub use error_code::ErrorCode;
