//! Reference violations found by strict validation.

use thiserror::Error;

/// A configuration entry that names a state the configuration never declares.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceViolation {
    #[error("Initial state '{initial}' is not declared")]
    UnknownInitial { initial: String },

    #[error("Transition '{state}' --{event}--> '{target}' points at an undeclared state")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}
