//! Error types for configuration loading and state machine operations.

use crate::validation::ReferenceViolation;
use thiserror::Error;

/// Errors returned by state machine construction and operations.
///
/// `undo` and `redo` never produce these; "nothing to undo" is reported as `false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FsmError {
    /// The configuration was absent or malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// `change_state` was asked to jump to a state that is not declared.
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// `trigger` was given an event with no rule from the current state.
    #[error("No transition for event '{event}' from state '{state}'")]
    UnknownEvent { state: String, event: String },
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Configuration is absent")]
    Absent,

    #[error("Configuration must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Configuration is missing the `initial` field")]
    MissingInitial,

    #[error("Configuration is missing the `states` field")]
    MissingStates,

    #[error("State '{state}' is missing the `transitions` field")]
    MissingTransitions { state: String },

    #[error("Malformed `{field}`: {reason}")]
    Malformed { field: String, reason: String },

    /// Only produced under strict validation.
    #[error(
        "Configuration references {} undeclared state(s): {}",
        .violations.len(),
        describe(.violations)
    )]
    UnresolvedReferences { violations: Vec<ReferenceViolation> },
}

fn describe(violations: &[ReferenceViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
