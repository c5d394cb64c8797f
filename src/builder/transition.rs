//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::Transition;

/// Builder for constructing transitions with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    from: Option<String>,
    event: Option<String>,
    to: Option<String>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the firing event (required).
    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition { from, event, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::new().from("idle").on("run").build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn builder_validates_missing_event() {
        let result = TransitionBuilder::new().from("idle").to("running").build();

        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn builder_validates_missing_source() {
        let result = TransitionBuilder::new().on("run").to("running").build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .from("idle")
            .on("run")
            .to("running")
            .build()
            .unwrap();

        assert_eq!(transition, Transition::new("idle", "run", "running"));
    }
}
