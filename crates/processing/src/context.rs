//! Per-call context handed to every step.

use common::{IdGenerator, OutputLine, OutputSink};

/// Collaborators a step may use while it runs: the sink for narrative lines
/// and the generator for synthetic codes.
pub struct StepContext<'a> {
    sink: &'a mut dyn OutputSink,
    ids: &'a dyn IdGenerator,
}

impl<'a> StepContext<'a> {
    /// Creates a context writing to `sink` and drawing codes from `ids`.
    pub fn new(sink: &'a mut dyn OutputSink, ids: &'a dyn IdGenerator) -> Self {
        Self { sink, ids }
    }

    /// Emits a progress line.
    pub fn info(&mut self, text: impl Into<String>) {
        self.sink.emit(OutputLine::info(text));
    }

    /// Emits a failure line.
    pub fn error(&mut self, text: impl Into<String>) {
        self.sink.emit(OutputLine::error(text));
    }

    /// Returns a fresh synthetic code of `len` characters.
    pub fn next_code(&self, len: usize) -> String {
        self.ids.next_code(len)
    }
}
