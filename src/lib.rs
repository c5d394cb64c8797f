//! Statewise: a configuration-driven finite state machine
//!
//! A machine is described declaratively: an initial state and a table of
//! states, each mapping event names to destination state names. The runtime
//! tracks the current state, applies transitions, and keeps exactly one step
//! of history for undo and redo.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, loaded from JSON or built in code
//! - **Transitions**: `trigger` follows a rule, `change_state` jumps directly
//! - **History**: one previous state and one previous event, never a stack
//! - **Strictness**: optional rejection of references to undeclared states
//!
//! # Undo and redo
//!
//! `undo` returns to the state held before the last step and can only be
//! called once in a row. `redo` re-fires the last triggered event against the
//! *current* state's rules, so it is not a snapshot replay: if the same event
//! leads to different places from different states, redo follows the rule of
//! wherever the machine is now.
//!
//! # Example
//!
//! ```rust
//! use statewise::StateMachine;
//! use serde_json::json;
//!
//! let mut machine = StateMachine::from_value(json!({
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "run": "running" } },
//!         "running": { "transitions": { "stop": "idle" } }
//!     }
//! }))
//! .unwrap();
//!
//! machine.trigger("run").unwrap();
//! assert_eq!(machine.current_state(), "running");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "idle");
//! assert!(!machine.undo());
//!
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "running");
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod runtime;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{History, MachineConfig, StateDescriptor, StateTable, Transition};
pub use error::{ConfigError, FsmError};
pub use runtime::StateMachine;
pub use validation::Strictness;
