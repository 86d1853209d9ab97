use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use crate::config::upstream::DEFAULT_REFRESH_SECS;
use crate::domain::scoreboard::Scoreboard;
use crate::upstream::client::SnapshotSource;

/// How long an idle viewing session keeps its cached scoreboard.
const SESSION_IDLE: Duration = Duration::from_secs(15 * 60);
const SESSION_CAPACITY: u64 = 1024;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Where snapshots come from.
    pub source: Arc<dyn SnapshotSource>,
    /// Per-game cached scoreboards. Entries expire with the viewing
    /// session; nothing is persisted beyond it.
    pub sessions: Cache<String, Scoreboard>,
    /// Auto-refresh interval advertised to render surfaces.
    pub refresh_secs: u64,
}

impl AppState {
    pub fn new(source: Arc<dyn SnapshotSource>, refresh_secs: u64) -> Self {
        Self {
            source,
            sessions: Cache::builder()
                .max_capacity(SESSION_CAPACITY)
                .time_to_idle(SESSION_IDLE)
                .build(),
            refresh_secs,
        }
    }

    /// State with the default refresh interval, for tests.
    pub fn for_tests(source: Arc<dyn SnapshotSource>) -> Self {
        Self::new(source, DEFAULT_REFRESH_SECS)
    }
}
