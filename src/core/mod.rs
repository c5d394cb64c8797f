//! Core configuration and history types.
//!
//! This module contains the plain data the state machine is built from:
//! - Typed configuration via `MachineConfig`, `StateTable` and `StateDescriptor`
//! - Configured rules as `Transition` values
//! - Single-step `History`
//!
//! Nothing here mutates in place; the runtime owns the only mutable state.

mod config;
mod history;
mod transition;

pub use config::{MachineConfig, StateDescriptor, StateTable};
pub use history::History;
pub use transition::Transition;
