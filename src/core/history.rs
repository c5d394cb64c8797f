//! Single-step transition history.
//!
//! The machine remembers exactly one step: the state it left and the last
//! event it fired. History values are immutable; every update returns a new
//! value, and the machine swaps it in. Updates depend only on their inputs, so
//! two machines driven through the same operations hold equal histories.

use serde::{Deserialize, Serialize};

/// The most recent (previous state, previous event) pair.
///
/// The two fields move independently. Jumps via `change_state` write only the
/// previous state, undo clears only the previous state, and the previous event
/// survives until the history is cleared.
///
/// # Example
///
/// ```rust
/// use statewise::core::History;
///
/// let history = History::new();
/// assert!(history.is_empty());
/// assert_eq!(history.previous_state(), None);
/// assert_eq!(history.previous_event(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    previous_state: Option<String>,
    previous_event: Option<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// State occupied immediately before the last applied step.
    pub fn previous_state(&self) -> Option<&str> {
        self.previous_state.as_deref()
    }

    /// Last event applied through `trigger`.
    pub fn previous_event(&self) -> Option<&str> {
        self.previous_event.as_deref()
    }

    /// Whether both the previous state and the previous event are absent.
    ///
    /// A history can be non-empty and still have nothing to undo: after an
    /// undo the previous event is kept for redo.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewise::StateMachine;
    /// use serde_json::json;
    ///
    /// let mut machine = StateMachine::from_value(json!({
    ///     "initial": "idle",
    ///     "states": { "idle": { "transitions": { "run": "running" } } }
    /// }))
    /// .unwrap();
    ///
    /// machine.trigger("run").unwrap();
    /// machine.undo();
    /// assert!(!machine.history().is_empty());
    /// assert!(!machine.can_undo());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.previous_state.is_none() && self.previous_event.is_none()
    }

    /// Record leaving `from` without an event (a jump or a redo).
    pub(crate) fn left(&self, from: &str) -> Self {
        Self {
            previous_state: Some(from.to_string()),
            previous_event: self.previous_event.clone(),
        }
    }

    /// History after leaving `from` by firing `event`. Replaces both fields.
    pub(crate) fn fired(from: &str, event: &str) -> Self {
        Self {
            previous_state: Some(from.to_string()),
            previous_event: Some(event.to_string()),
        }
    }

    /// Split off the previous state, returning it with the remaining history.
    pub(crate) fn rewound(&self) -> Option<(String, Self)> {
        let previous = self.previous_state.clone()?;
        let rest = Self {
            previous_state: None,
            previous_event: self.previous_event.clone(),
        };
        Some((previous, rest))
    }
}
