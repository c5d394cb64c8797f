//! Opt-in strict validation of configuration references.
//!
//! By default a configuration may name undeclared states, both as its
//! `initial` state and as transition destinations. Strict validation rejects
//! such configurations and reports every dangling reference in one pass,
//! using Stillwater's `Validation` to accumulate instead of failing fast.
//!
//! # Example
//!
//! ```rust
//! use statewise::core::{MachineConfig, StateDescriptor, StateTable};
//! use statewise::validation::Strictness;
//!
//! let states: StateTable = vec![
//!     ("idle", StateDescriptor::new().with_transition("run", "running")),
//! ]
//! .into_iter()
//! .collect();
//! let config = MachineConfig::new("idle", states);
//!
//! assert!(Strictness::Permissive.enforce(&config).is_ok());
//! assert!(Strictness::Strict.enforce(&config).is_err());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_references, Strictness};
pub use violations::ReferenceViolation;
