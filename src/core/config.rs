//! Machine configuration: the initial state and the ordered table of states.
//!
//! A configuration can be built directly from typed values or loaded from JSON.
//! Loading from JSON performs the structural checks once, at the boundary:
//! the document must be present, must carry `initial` and `states`, and every
//! state entry must carry a `transitions` table. Anything else in the document
//! is ignored.

use super::transition::Transition;
use crate::error::ConfigError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// The transition table of one state: event name to destination state name.
///
/// Destinations are not required to name declared states.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateDescriptor;
///
/// let idle = StateDescriptor::new().with_transition("run", "running");
/// assert_eq!(idle.target("run"), Some("running"));
/// assert!(!idle.handles("stop"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescriptor {
    transitions: HashMap<String, String>,
}

impl StateDescriptor {
    /// Create a descriptor with an empty transition table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, returning the updated descriptor.
    pub fn with_transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(event, target);
        self
    }

    /// Destination for `event`, if this state has a rule for it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state has a rule for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// The raw transition table, event name to destination.
    ///
    /// Iteration order is unspecified; use [`events`](Self::events) for a
    /// stable order.
    pub fn transitions(&self) -> &HashMap<String, String> {
        &self.transitions
    }

    /// Event names handled by this state, sorted.
    pub fn events(&self) -> Vec<&str> {
        self.rules().into_iter().map(|(event, _)| event).collect()
    }

    pub(crate) fn insert(&mut self, event: impl Into<String>, target: impl Into<String>) {
        self.transitions.insert(event.into(), target.into());
    }

    fn rules(&self) -> Vec<(&str, &str)> {
        let mut rules: Vec<(&str, &str)> = self
            .transitions
            .iter()
            .map(|(event, target)| (event.as_str(), target.as_str()))
            .collect();
        rules.sort_unstable();
        rules
    }
}

/// States keyed by name, iterated in insertion order.
///
/// Re-inserting an existing name replaces its descriptor but keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<(String, StateDescriptor)>,
    index: HashMap<String, usize>,
}

impl StateTable {
    /// Create an empty table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewise::core::{StateDescriptor, StateTable};
    ///
    /// let mut table = StateTable::new();
    /// assert!(table.is_empty());
    ///
    /// table.insert("idle", StateDescriptor::new().with_transition("run", "running"));
    /// table.insert("running", StateDescriptor::new());
    ///
    /// assert_eq!(table.len(), 2);
    /// assert!(table.contains("idle"));
    /// assert!(table.get("idle").unwrap().handles("run"));
    /// assert_eq!(table.names().collect::<Vec<_>>(), ["idle", "running"]);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a state, returning the previous descriptor if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: StateDescriptor,
    ) -> Option<StateDescriptor> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, descriptor)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, descriptor));
                None
            }
        }
    }

    /// Descriptor for `name`, declaring it with an empty table if absent.
    pub(crate) fn entry(&mut self, name: &str) -> &mut StateDescriptor {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                self.insert(name, StateDescriptor::new());
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    /// Descriptor for `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&StateDescriptor> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// Whether `name` is a declared state.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// State names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Names and descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDescriptor)> {
        self.entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no states are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, StateDescriptor)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (K, StateDescriptor)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, descriptor) in iter {
            table.insert(name, descriptor);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, descriptor) in &self.entries {
            map.serialize_entry(name, descriptor)?;
        }
        map.end()
    }
}

/// Immutable description of a state machine.
///
/// # Example
///
/// ```rust
/// use statewise::core::MachineConfig;
///
/// let config = MachineConfig::from_json(
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
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.states().names().collect::<Vec<_>>(), ["idle", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct MachineConfig {
    initial: String,
    states: StateTable,
}

impl MachineConfig {
    /// Create a configuration from typed parts.
    ///
    /// Neither `initial` nor the transition targets are checked against the
    /// declared states here; see [`crate::validation::Strictness`].
    pub fn new(initial: impl Into<String>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Load a configuration from a JSON value.
    ///
    /// `null` is treated as an absent configuration.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let root = match value {
            Value::Null => return Err(ConfigError::Absent),
            Value::Object(root) => root,
            other => {
                return Err(ConfigError::NotAnObject {
                    found: kind_of(&other),
                })
            }
        };

        let initial = root.get("initial").ok_or(ConfigError::MissingInitial)?;
        let states = root.get("states").ok_or(ConfigError::MissingStates)?;
        let states = parse_states(states)?;

        let initial = match initial {
            Value::String(initial) => initial.clone(),
            other => {
                return Err(ConfigError::Malformed {
                    field: "initial".to_string(),
                    reason: format!("expected a string, found {}", kind_of(other)),
                })
            }
        };

        Ok(Self { initial, states })
    }

    /// Load a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text).map_err(|err| ConfigError::Malformed {
            field: "configuration".to_string(),
            reason: err.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Name of the state a new machine starts in.
    ///
    /// Not necessarily a declared state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The declared states, in configuration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewise::machine_config;
    ///
    /// let config = machine_config! {
    ///     initial: red,
    ///     states: {
    ///         red => { next => green },
    ///         green => { next => red },
    ///     }
    /// }
    /// .unwrap();
    ///
    /// assert_eq!(config.states().names().collect::<Vec<_>>(), ["red", "green"]);
    /// ```
    pub fn states(&self) -> &StateTable {
        &self.states
    }

    /// Descriptor for a declared state.
    pub fn descriptor(&self, state: &str) -> Option<&StateDescriptor> {
        self.states.get(state)
    }

    /// Every configured rule: states in order, events sorted within a state.
    pub fn transitions(&self) -> Vec<Transition> {
        self.states
            .iter()
            .flat_map(|(state, descriptor)| {
                descriptor
                    .rules()
                    .into_iter()
                    .map(move |(event, target)| Transition::new(state, event, target))
            })
            .collect()
    }
}

impl TryFrom<Value> for MachineConfig {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl FromStr for MachineConfig {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_json(text)
    }
}

fn parse_states(states: &Value) -> Result<StateTable, ConfigError> {
    let Value::Object(entries) = states else {
        return Err(ConfigError::Malformed {
            field: "states".to_string(),
            reason: format!("expected an object, found {}", kind_of(states)),
        });
    };

    let mut table = StateTable::new();
    for (name, descriptor) in entries {
        // Value::get yields None for non-objects, which reads as a missing table.
        let transitions =
            descriptor
                .get("transitions")
                .ok_or_else(|| ConfigError::MissingTransitions {
                    state: name.clone(),
                })?;

        let transitions = HashMap::<String, String>::deserialize(transitions).map_err(|err| {
            ConfigError::Malformed {
                field: format!("states.{name}.transitions"),
                reason: err.to_string(),
            }
        })?;

        table.insert(name.clone(), StateDescriptor { transitions });
    }
    Ok(table)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
