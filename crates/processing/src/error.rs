//! Processing error types.

use domain::DomainError;
use thiserror::Error;

use crate::step::Step;

/// A fault raised inside a workflow step.
///
/// Faults are distinct from business failures: a declined payment is a
/// normal `Ok(false)` outcome, while a fault means the step could not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// An amount calculation overflowed.
    #[error("amount overflow while computing {operation}")]
    AmountOverflow { operation: &'static str },

    /// Any other fault.
    #[error("{0}")]
    Fault(String),
}

impl StepError {
    /// Creates a generic fault.
    pub fn fault(message: impl Into<String>) -> Self {
        StepError::Fault(message.into())
    }
}

/// Errors that can occur around order processing.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Domain error, e.g. an unsupported payment-method tag.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A step faulted.
    #[error("step '{step}' faulted: {source}")]
    StepFault {
        step: Step,
        #[source]
        source: StepError,
    },
}

impl ProcessingError {
    /// Wraps a step fault with the step it happened in.
    pub fn step_fault(step: Step, source: StepError) -> Self {
        ProcessingError::StepFault { step, source }
    }
}

/// Convenience type alias for processing results.
pub type Result<T> = std::result::Result<T, ProcessingError>;
