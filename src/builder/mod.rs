//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and a macro for describing state
//! machines in code instead of JSON, producing the same `MachineConfig`.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::Transition;

/// Create a transition rule from its three parts.
///
/// # Example
///
/// ```
/// use statewise::builder::{simple_transition, StateMachineBuilder};
///
/// let machine = StateMachineBuilder::new()
///     .initial("off")
///     .add_transition(simple_transition("off", "toggle", "on"))
///     .add_transition(simple_transition("on", "toggle", "off"))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), "off");
/// ```
pub fn simple_transition(
    from: impl Into<String>,
    event: impl Into<String>,
    to: impl Into<String>,
) -> Transition {
    Transition::new(from, event, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition("idle", "run", "running");

        assert_eq!(transition.from, "idle");
        assert_eq!(transition.event, "run");
        assert_eq!(transition.to, "running");
    }

    #[test]
    fn simple_transition_matches_builder() {
        let built = TransitionBuilder::new()
            .from("idle")
            .on("run")
            .to("running")
            .build()
            .unwrap();

        assert_eq!(simple_transition("idle", "run", "running"), built);
    }
}
