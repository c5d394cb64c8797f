//! The stateful runtime.
//!
//! `StateMachine` is the only component that mutates. It owns an immutable
//! `MachineConfig`, a current-state pointer and a one-step `History`, and
//! exposes the jump, trigger, reset, undo and redo operations over them.

mod machine;

pub use machine::StateMachine;
