//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{MachineConfig, StateTable, Transition};
use crate::runtime::StateMachine;
use crate::validation::Strictness;

/// Builder for constructing state machines with a fluent API.
///
/// States are declared in the order they are first mentioned, either by
/// [`state`](Self::state) or as the source of a transition.
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    states: StateTable,
    strictness: Strictness,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring a state twice keeps its rules and position.
    pub fn state(mut self, name: &str) -> Self {
        self.states.entry(name);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        Ok(self.add_transition(transition))
    }

    /// Add a pre-built transition. A later rule for the same state and event wins.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.states
            .entry(&transition.from)
            .insert(transition.event, transition.to);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(self, transitions: Vec<Transition>) -> Self {
        transitions
            .into_iter()
            .fold(self, |builder, transition| builder.add_transition(transition))
    }

    /// Set how strictly references are checked at build time.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Build the configuration only.
    /// Returns an error if required fields are missing or strict checks fail.
    pub fn build_config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = MachineConfig::new(initial, self.states);
        self.strictness.enforce(&config)?;
        Ok(config)
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        self.build_config().map(StateMachine::new)
    }
}
