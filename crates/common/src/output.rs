//! Output lines and the sinks that collect them.

use serde::{Deserialize, Serialize};

/// Marker prepended to failure lines when they are rendered.
pub const ERROR_MARKER: &str = "❌ ";

/// Whether a line reports progress or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Progress or success narrative.
    #[default]
    Info,

    /// A failure the run reported.
    Error,
}

/// A single human-readable line emitted during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    /// Creates a progress line.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Info,
            text: text.into(),
        }
    }

    /// Creates a failure line.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
        }
    }

    /// Returns true if this line reports a failure.
    pub fn is_error(&self) -> bool {
        self.kind == LineKind::Error
    }
}

impl std::fmt::Display for OutputLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LineKind::Info => write!(f, "{}", self.text),
            LineKind::Error => write!(f, "{ERROR_MARKER}{}", self.text),
        }
    }
}

/// Destination for the lines a run produces.
///
/// Sinks are passed explicitly to whoever emits lines. Any `FnMut(OutputLine)`
/// closure is a sink, which makes forwarding to a logger or a channel trivial.
pub trait OutputSink {
    /// Receives one line.
    fn emit(&mut self, line: OutputLine);

    /// Emits a progress line.
    fn info(&mut self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(OutputLine::info(text));
    }

    /// Emits a failure line.
    fn error(&mut self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(OutputLine::error(text));
    }
}

impl<F> OutputSink for F
where
    F: FnMut(OutputLine),
{
    fn emit(&mut self, line: OutputLine) {
        (*self)(line)
    }
}

/// In-memory sink that keeps every line in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedOutput {
    lines: Vec<OutputLine>,
}

impl CapturedOutput {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured lines in emission order.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Returns the number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the failure lines only.
    pub fn errors(&self) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter().filter(|line| line.is_error())
    }

    /// Returns true if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }

    /// Renders every line, one per row, with failure markers applied.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }

    /// Consumes the buffer and returns its lines.
    pub fn into_lines(self) -> Vec<OutputLine> {
        self.lines
    }
}

impl OutputSink for CapturedOutput {
    fn emit(&mut self, line: OutputLine) {
        self.lines.push(line);
    }
}
