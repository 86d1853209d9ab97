//! Shared helpers for integration tests.

pub mod app_builder;
pub mod logging;
pub mod scripted_source;

pub use app_builder::create_test_app;
pub use scripted_source::ScriptedSource;
