//! Conversion event sink port.
//!
//! This port abstracts progress delivery, letting the pipeline announce
//! stage transitions without coupling to the surface that renders them
//! (terminal progress bar, chat status edits, structured logs).

use crate::convert::ConvertEvent;

/// Port for emitting conversion events.
///
/// Implementations must not block: delivery happens on the attempt's task
/// between pipeline stages.
pub trait ConvertEventSink: Send + Sync {
    /// Emit one event.
    fn emit(&self, event: ConvertEvent);

    /// Clone this sink into a boxed trait object.
    ///
    /// Enables cloning of `Arc<dyn ConvertEventSink>` without requiring the
    /// underlying type to implement `Clone`.
    fn clone_box(&self) -> Box<dyn ConvertEventSink>;
}

/// A no-op event sink for tests and non-interactive contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopEventSink;

impl NoopEventSink {
    /// Create a new no-op event sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConvertEventSink for NoopEventSink {
    fn emit(&self, _event: ConvertEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn ConvertEventSink> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Sink that records every event it sees.
    #[derive(Default)]
    struct CaptureSink {
        events: Mutex<Vec<ConvertEvent>>,
    }

    impl ConvertEventSink for CaptureSink {
        fn emit(&self, event: ConvertEvent) {
            self.events.lock().unwrap().push(event);
        }

        fn clone_box(&self) -> Box<dyn ConvertEventSink> {
            Box::new(Self::default())
        }
    }

    #[test]
    fn test_capture_sink_records_in_order() {
        let sink = CaptureSink::default();
        sink.emit(ConvertEvent::parsed("mhJyxLxS"));
        sink.emit(ConvertEvent::resolved(2048));

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name(), "parsed");
        assert_eq!(events[1].event_name(), "resolved");
    }

    #[test]
    fn test_noop_sink_discards() {
        let sink = NoopEventSink::new();
        sink.emit(ConvertEvent::completed(42));
        let _boxed = sink.clone_box();
    }
}
