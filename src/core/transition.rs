//! Configured transitions.

use serde::{Deserialize, Serialize};

/// A configured `(from, event) -> to` rule.
///
/// Transitions are plain values. They carry no guards or actions; applying one
/// only moves the current-state pointer.
///
/// # Example
///
/// ```rust
/// use statewise::core::Transition;
///
/// let transition = Transition::new("idle", "run", "running");
/// assert_eq!(transition.from, "idle");
/// assert_eq!(transition.event, "run");
/// assert_eq!(transition.to, "running");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// The state the rule applies from
    pub from: String,
    /// The event that fires the rule
    pub event: String,
    /// The destination state
    pub to: String,
}

impl Transition {
    /// Create a transition rule.
    pub fn new(from: impl Into<String>, event: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            event: event.into(),
            to: to.into(),
        }
    }
}
