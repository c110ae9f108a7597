//! Attempt outcome reporting port.

use async_trait::async_trait;

/// Port for recording whether an attempt succeeded.
///
/// Strictly fire-and-forget: implementations swallow and log their own
/// failures, because a broken counter must never fail a conversion that
/// otherwise worked.
#[async_trait]
pub trait OutcomeSink: Send + Sync {
    /// Record one attempt outcome.
    async fn report_outcome(&self, success: bool);
}

/// A no-op outcome sink for tests and contexts without statistics.
#[derive(Debug, Clone, Default)]
pub struct NoopOutcomeSink;

impl NoopOutcomeSink {
    /// Create a new no-op outcome sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutcomeSink for NoopOutcomeSink {
    async fn report_outcome(&self, _success: bool) {
        // Intentionally do nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_sink_accepts_both_outcomes() {
        let sink = NoopOutcomeSink::new();
        sink.report_outcome(true).await;
        sink.report_outcome(false).await;
    }
}
