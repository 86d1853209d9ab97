use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::upstream::client::{FetchError, FetchOutcome, SnapshotSource};

/// Snapshot source that replays a fixed script, one entry per tick.
///
/// Panics when the script runs dry so a test cannot silently tick more
/// often than it expects.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<FetchOutcome, FetchError>>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<FetchOutcome, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    pub fn once(outcome: FetchOutcome) -> Self {
        Self::new(vec![Ok(outcome)])
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    async fn fetch(&self, _game_id: &str) -> Result<FetchOutcome, FetchError> {
        self.script
            .lock()
            .expect("script mutex poisoned")
            .pop_front()
            .expect("scripted source exhausted")
    }
}
