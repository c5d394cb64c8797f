//! State machine that applies configured transitions with single-step undo/redo.

use crate::core::{History, MachineConfig};
use crate::error::FsmError;
use crate::validation::Strictness;
use serde_json::Value;
use tracing::debug;

/// A finite state machine driven by a [`MachineConfig`].
///
/// The machine owns its configuration, the current state, and a one-step
/// [`History`]. All operations are synchronous and deterministic; callers
/// sharing a machine across threads must lock it.
///
/// # Example
///
/// ```rust
/// use statewise::StateMachine;
///
/// let mut machine = StateMachine::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "run": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// machine.trigger("run").unwrap();
/// assert_eq!(machine.current_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
/// assert!(!machine.undo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial().to_string();
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Create a machine after checking `config` under `strictness`.
    pub fn with_strictness(config: MachineConfig, strictness: Strictness) -> Result<Self, FsmError> {
        strictness.enforce(&config)?;
        Ok(Self::new(config))
    }

    /// Create a machine from a JSON configuration value. `null` is rejected as absent.
    pub fn from_value(value: Value) -> Result<Self, FsmError> {
        Ok(Self::new(MachineConfig::from_value(value)?))
    }

    /// Create a machine from JSON configuration text.
    pub fn from_json(text: &str) -> Result<Self, FsmError> {
        Ok(Self::new(MachineConfig::from_json(text)?))
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Get the configured initial state (pure)
    pub fn initial(&self) -> &str {
        self.config.initial()
    }

    /// Get the configuration the machine was built from (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump to `state` without consulting any transition rule.
    ///
    /// The target must be a declared state. The state being left becomes the
    /// undo point; the last fired event is kept.
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        if !self.config.states().contains(state) {
            debug!(from = %self.current, to = state, "rejected jump to undeclared state");
            return Err(FsmError::UnknownState {
                state: state.to_string(),
            });
        }

        debug!(from = %self.current, to = state, "jumped");
        self.history = self.history.left(&self.current);
        self.current = state.to_string();
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// The destination is taken from the current state's rule as-is, whether
    /// or not it names a declared state.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.target(event) else {
            debug!(state = %self.current, event, "no transition for event");
            return Err(FsmError::UnknownEvent {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };
        let target = target.to_string();

        debug!(from = %self.current, to = %target, event, "transitioned");
        self.history = History::fired(&self.current, event);
        self.current = target;
        Ok(())
    }

    /// Return to the initial state. History is left untouched.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = self.config.initial(), "reset");
        self.current = self.config.initial().to_string();
    }

    /// State names in configuration order.
    ///
    /// With `Some(event)`, only the states that have a rule for `event`.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config
            .states()
            .iter()
            .filter(|(_, descriptor)| event.is_none_or(|event| descriptor.handles(event)))
            .map(|(name, _)| name)
            .collect()
    }

    /// Step back to the state held before the last transition.
    ///
    /// Returns `false` when there is nothing to undo. Only one step is kept, so
    /// a second consecutive undo always returns `false`.
    pub fn undo(&mut self) -> bool {
        let Some((previous, rest)) = self.history.rewound() else {
            return false;
        };

        debug!(from = %self.current, to = %previous, "undone");
        self.history = rest;
        self.current = previous;
        true
    }

    /// Fire the last triggered event again from the current state.
    ///
    /// The event is resolved against the current state's rules at call time,
    /// so the result depends on where the machine is now, not on where it was
    /// before an undo. Returns `false` when no event was fired or the current
    /// state has no rule for it.
    pub fn redo(&mut self) -> bool {
        let Some(event) = self.history.previous_event() else {
            return false;
        };
        let Some(target) = self.target(event) else {
            return false;
        };
        let target = target.to_string();

        debug!(from = %self.current, to = %target, event, "redone");
        self.history = self.history.left(&self.current);
        self.current = target;
        true
    }

    /// Forget the previous state and the previous event.
    pub fn clear_history(&mut self) {
        debug!(state = %self.current, "history cleared");
        self.history = History::new();
    }

    /// Whether [`undo`](Self::undo) would succeed (pure)
    pub fn can_undo(&self) -> bool {
        self.history.previous_state().is_some()
    }

    /// Whether [`trigger`](Self::trigger) would succeed with `event` (pure)
    pub fn can_trigger(&self, event: &str) -> bool {
        self.target(event).is_some()
    }

    /// Events with a rule from the current state, sorted (pure)
    pub fn events(&self) -> Vec<&str> {
        self.config
            .descriptor(&self.current)
            .map(|descriptor| descriptor.events())
            .unwrap_or_default()
    }

    fn target(&self, event: &str) -> Option<&str> {
        self.config
            .descriptor(&self.current)
            .and_then(|descriptor| descriptor.target(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use serde_json::json;

    fn workflow() -> StateMachine {
        StateMachine::from_value(json!({
            "initial": "idle",
            "states": {
                "idle": { "transitions": { "run": "running" } },
                "running": { "transitions": { "stop": "idle", "pause": "paused" } },
                "paused": { "transitions": { "run": "running", "stop": "stopped" } },
                "stopped": { "transitions": {} }
            }
        }))
        .unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = workflow();
        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.initial(), "idle");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn absent_configuration_is_rejected() {
        let result = StateMachine::from_value(Value::Null);
        assert!(matches!(
            result,
            Err(FsmError::InvalidConfig(ConfigError::Absent))
        ));
    }

    #[test]
    fn trigger_follows_rule_and_records_history() {
        let mut machine = workflow();

        machine.trigger("run").unwrap();

        assert_eq!(machine.current_state(), "running");
        assert_eq!(machine.history().previous_state(), Some("idle"));
        assert_eq!(machine.history().previous_event(), Some("run"));
    }

    #[test]
    fn identically_driven_machines_have_equal_histories() {
        let mut first = workflow();
        let mut second = workflow();

        first.trigger("run").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        second.trigger("run").unwrap();
        assert_eq!(first.history(), second.history());

        for machine in [&mut first, &mut second] {
            assert!(machine.undo());
            assert!(machine.redo());
            machine.change_state("paused").unwrap();
            assert!(machine.undo());
        }
        assert_eq!(first.current_state(), second.current_state());
        assert_eq!(first.history(), second.history());
    }

    #[test]
    fn trigger_unknown_event_fails_without_mutation() {
        let mut machine = workflow();

        let result = machine.trigger("stop");

        assert_eq!(
            result,
            Err(FsmError::UnknownEvent {
                state: "idle".to_string(),
                event: "stop".to_string(),
            })
        );
        assert_eq!(machine.current_state(), "idle");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn trigger_may_land_on_undeclared_state() {
        let mut machine = StateMachine::from_value(json!({
            "initial": "idle",
            "states": { "idle": { "transitions": { "run": "limbo" } } }
        }))
        .unwrap();

        machine.trigger("run").unwrap();
        assert_eq!(machine.current_state(), "limbo");

        // Nothing is configured for an undeclared state.
        assert!(matches!(
            machine.trigger("run"),
            Err(FsmError::UnknownEvent { state, .. }) if state == "limbo"
        ));
        assert!(machine.events().is_empty());
        assert!(!machine.redo());
    }

    #[test]
    fn change_state_jumps_and_keeps_event() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();

        machine.change_state("stopped").unwrap();

        assert_eq!(machine.current_state(), "stopped");
        assert_eq!(machine.history().previous_state(), Some("running"));
        assert_eq!(machine.history().previous_event(), Some("run"));
    }

    #[test]
    fn change_state_to_unknown_state_fails() {
        let mut machine = workflow();

        let result = machine.change_state("nonexistent");

        assert_eq!(
            result,
            Err(FsmError::UnknownState {
                state: "nonexistent".to_string()
            })
        );
        assert_eq!(machine.current_state(), "idle");
        assert!(!machine.can_undo());
    }

    #[test]
    fn undo_restores_previous_state_once() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.history().previous_event(), Some("run"));

        assert!(!machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn undo_reverts_a_jump() {
        let mut machine = workflow();
        machine.change_state("paused").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn undo_on_fresh_machine_returns_false() {
        let mut machine = workflow();
        assert!(!machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn redo_after_undo_reapplies_event() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();
        assert!(machine.undo());

        assert!(machine.redo());
        assert_eq!(machine.current_state(), "running");
        assert_eq!(machine.history().previous_state(), Some("idle"));
        assert_eq!(machine.history().previous_event(), Some("run"));
    }

    #[test]
    fn redo_resolves_event_against_current_state() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        machine.trigger("stop").unwrap();
        assert_eq!(machine.current_state(), "stopped");

        // Back in "paused", where "stop" leads to "stopped" again.
        assert!(machine.undo());
        machine.change_state("running").unwrap();

        // From "running", "stop" leads to "idle" instead.
        assert!(machine.redo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn redo_without_matching_rule_returns_false() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();

        // "running" has no "run" rule.
        assert!(!machine.redo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn redo_on_fresh_machine_returns_false() {
        let mut machine = workflow();
        assert!(!machine.redo());
    }

    #[test]
    fn redo_after_clear_history_returns_false() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();
        machine.undo();

        machine.clear_history();

        assert!(machine.history().is_empty());
        assert!(!machine.redo());
        assert!(!machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn reset_returns_to_initial_and_keeps_history() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();

        machine.reset();

        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.history().previous_state(), Some("running"));
        assert!(machine.undo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn reset_on_fresh_machine_does_not_enable_undo() {
        let mut machine = workflow();
        machine.reset();
        assert!(!machine.undo());
    }

    #[test]
    fn states_lists_all_in_configuration_order() {
        let machine = workflow();
        assert_eq!(
            machine.states(None),
            ["idle", "running", "paused", "stopped"]
        );
    }

    #[test]
    fn states_filters_by_event() {
        let machine = workflow();
        assert_eq!(machine.states(Some("stop")), ["running", "paused"]);
        assert_eq!(machine.states(Some("run")), ["idle", "paused"]);
        assert!(machine.states(Some("explode")).is_empty());
    }

    #[test]
    fn events_and_can_trigger_reflect_current_state() {
        let mut machine = workflow();
        machine.trigger("run").unwrap();

        assert_eq!(machine.events(), ["pause", "stop"]);
        assert!(machine.can_trigger("pause"));
        assert!(!machine.can_trigger("run"));
    }

    #[test]
    fn strict_construction_rejects_dangling_targets() {
        let config = MachineConfig::from_value(json!({
            "initial": "idle",
            "states": { "idle": { "transitions": { "run": "running" } } }
        }))
        .unwrap();

        let permissive = StateMachine::with_strictness(config.clone(), Strictness::Permissive);
        assert!(permissive.is_ok());

        let strict = StateMachine::with_strictness(config, Strictness::Strict);
        assert!(matches!(
            strict,
            Err(FsmError::InvalidConfig(ConfigError::UnresolvedReferences { .. }))
        ));
    }
}
