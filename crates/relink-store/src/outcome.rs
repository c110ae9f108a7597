//! Outcome-sink adapter over the stats store.

use std::sync::Arc;

use async_trait::async_trait;

use relink_core::OutcomeSink;

use crate::stats::StatsStore;

/// Reports attempt outcomes into the statistics store.
///
/// Fire-and-forget per the port contract: a failed write is logged and
/// swallowed, because a broken counter must never fail a conversion that
/// otherwise worked.
pub struct StatsOutcomeSink {
    store: Arc<StatsStore>,
}

impl StatsOutcomeSink {
    /// Wrap a stats store.
    #[must_use]
    pub fn new(store: Arc<StatsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OutcomeSink for StatsOutcomeSink {
    async fn report_outcome(&self, success: bool) {
        if let Err(e) = self.store.record(success).await {
            tracing::warn!(
                target: "relink.store",
                error = %e,
                success,
                "failed to record attempt outcome"
            );
        }
    }
}
