use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serenity::async_trait;
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError, fixture};

use crate::{
    error::registry::RegistryError,
    model::{
        allow_list::AllowList,
        publish::{PublishOutcome, PublishStep},
        record::ReconcileOutcome,
    },
    service::{publish::Publisher, registry::RegistryService},
};

mod unregister;

const ROLE_A: u64 = 1433955314356584540;
const ROLE_B: u64 = 1358207768351473970;
const ROLE_C: u64 = 1434243145813463120;
const OTHER_ROLE: u64 = 42;

/// Publisher that records the file contents seen at each publish call.
struct RecordingPublisher {
    snapshots: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    outcome: PublishOutcome,
    delay: Option<Duration>,
}

impl RecordingPublisher {
    fn new() -> Arc<Self> {
        Self::with_outcome(PublishOutcome::Published {
            branch: "main".to_string(),
            committed: true,
        })
    }

    fn with_outcome(outcome: PublishOutcome) -> Arc<Self> {
        Arc::new(Self {
            snapshots: Mutex::new(Vec::new()),
            outcome,
            delay: None,
        })
    }

    fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            snapshots: Mutex::new(Vec::new()),
            outcome: PublishOutcome::Skipped,
            delay: Some(delay),
        })
    }

    fn calls(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    fn last_snapshot(&self) -> Option<serde_json::Value> {
        self.snapshots
            .lock()
            .unwrap()
            .last()
            .map(|(_, bytes)| serde_json::from_slice(bytes).unwrap())
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, file: &Path) -> PublishOutcome {
        let bytes = tokio::fs::read(file).await.unwrap_or_default();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.snapshots
            .lock()
            .unwrap()
            .push((file.to_path_buf(), bytes));
        self.outcome.clone()
    }
}

fn allow_list() -> AllowList {
    AllowList::new([ROLE_A, ROLE_B, ROLE_C])
}

fn service(test: &TestContext, publisher: Arc<RecordingPublisher>) -> RegistryService {
    RegistryService::new(test.registry_path(), allow_list(), publisher)
}
