// ============================================================================
// Result Observer Interface
// Defines the contract for receiving successful calculation results
// ============================================================================

use parking_lot::Mutex;
use rust_decimal::Decimal;

/// Observer notified of every successful calculation.
/// Never invoked for a calculation that failed.
pub trait ResultObserver: Send + Sync {
    /// Handle a calculation result
    fn update_result(&self, value: Decimal);
}

/// No-op observer for callers that only use return values
pub struct NoOpObserver;

impl ResultObserver for NoOpObserver {
    fn update_result(&self, _value: Decimal) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl ResultObserver for LoggingObserver {
    fn update_result(&self, value: Decimal) {
        tracing::info!(result = %value, "Calculation result");
    }
}

/// Observer that keeps every result it receives
#[derive(Default)]
pub struct RecordingObserver {
    results: Mutex<Vec<Decimal>>,
}

impl RecordingObserver {
    /// An observer with no recorded results
    pub fn new() -> Self {
        Self::default()
    }

    /// All results received so far, oldest first
    pub fn results(&self) -> Vec<Decimal> {
        self.results.lock().clone()
    }

    /// The most recent result, if any
    pub fn last(&self) -> Option<Decimal> {
        self.results.lock().last().copied()
    }

    /// Number of results received
    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    /// Whether no result has been received yet
    pub fn is_empty(&self) -> bool {
        self.results.lock().is_empty()
    }

    /// Drop all recorded results
    pub fn clear(&self) {
        self.results.lock().clear();
    }
}

impl ResultObserver for RecordingObserver {
    fn update_result(&self, value: Decimal) {
        self.results.lock().push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        observer.update_result(Decimal::ONE);
        // Should not panic
    }

    #[test]
    fn test_recording_observer() {
        let observer = RecordingObserver::new();
        assert!(observer.is_empty());
        assert_eq!(observer.last(), None);

        observer.update_result(Decimal::ONE);
        observer.update_result(Decimal::TEN);

        assert_eq!(observer.len(), 2);
        assert_eq!(observer.results(), vec![Decimal::ONE, Decimal::TEN]);
        assert_eq!(observer.last(), Some(Decimal::TEN));

        observer.clear();
        assert!(observer.is_empty());
    }
}
