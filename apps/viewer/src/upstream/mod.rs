//! Adapter for the external scoring service.

pub mod client;

pub use client::{FetchError, FetchOutcome, HttpSnapshotSource, SnapshotSource};
