//! Build errors for state machine and transition builders.

use crate::error::ConfigError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Call .state(name) or add a transition")]
    NoStates,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Configuration rejected: {0}")]
    Config(#[from] ConfigError),
}
