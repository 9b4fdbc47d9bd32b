//! Ready-made failure sinks.

use std::cell::RefCell;

pub use archtest_graph::FailureSink;

/// Collects every failure message it receives.
///
/// ```rust
/// use archtest::{FailureSink, RecordingSink};
///
/// let sink = RecordingSink::new();
/// sink.fail("Error:\na\n");
/// assert_eq!(sink.messages(), vec!["Error:\na\n".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every message received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Drain the recorded messages.
    pub fn take(&self) -> Vec<String> {
        self.messages.take()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl FailureSink for RecordingSink {
    fn fail(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Panics with the failure message, failing the enclosing `#[test]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicSink;

impl FailureSink for PanicSink {
    fn fail(&self, message: &str) {
        panic!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.fail("first");
        sink.fail("second");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["first", "second"]);

        assert_eq!(sink.take(), vec!["first", "second"]);
        assert!(sink.is_empty());
    }

    #[test]
    #[should_panic(expected = "Error:\nA\n\tB\n")]
    fn panic_sink_panics_with_message() {
        PanicSink.fail("Error:\nA\n\tB\n");
    }
}
