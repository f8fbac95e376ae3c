//! Bounded in-memory history of publish attempts.
//!
//! Publish failures never reach the requester, so they are kept here in addition to
//! the log. The history is shared by clones and can be queried at any time, for example
//! to report failures at shutdown.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::publish::PublishReport;

/// Number of reports kept before the oldest is dropped.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Shared, bounded list of publish reports, oldest first.
#[derive(Clone)]
pub struct PublishHistory {
    reports: Arc<RwLock<VecDeque<PublishReport>>>,
    capacity: usize,
}

impl PublishHistory {
    /// Creates an empty history holding at most `capacity` reports.
    ///
    /// A capacity of zero is raised to one so the latest report is always available.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            reports: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Appends a report, dropping the oldest one when full.
    pub async fn record(&self, report: PublishReport) {
        let mut reports = self.reports.write().await;
        if reports.len() == self.capacity {
            reports.pop_front();
        }
        reports.push_back(report);
    }

    /// All retained reports, oldest first.
    #[cfg(test)]
    pub async fn recent(&self) -> Vec<PublishReport> {
        self.reports.read().await.iter().cloned().collect()
    }

    /// The most recent report, if any attempt has been made.
    pub async fn last(&self) -> Option<PublishReport> {
        self.reports.read().await.back().cloned()
    }

    /// Retained reports whose outcome is a failure, oldest first.
    pub async fn failures(&self) -> Vec<PublishReport> {
        self.reports
            .read()
            .await
            .iter()
            .filter(|r| r.outcome.is_failure())
            .cloned()
            .collect()
    }
}

impl Default for PublishHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
