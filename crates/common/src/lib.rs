//! Shared building blocks for the order-processing workspace.
//!
//! - [`OutputSink`] receives the human-readable lines a workflow run emits
//! - [`IdGenerator`] produces the synthetic authorization and transaction codes

pub mod ids;
pub mod output;

pub use ids::{FixedIdGenerator, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use output::{CapturedOutput, LineKind, OutputLine, OutputSink};
