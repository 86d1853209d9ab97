//! Runtime configuration.

pub mod upstream;

pub use upstream::UpstreamConfig;
