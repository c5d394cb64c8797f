//! Reference checks over a configuration using Validation.

use crate::core::MachineConfig;
use crate::error::ConfigError;
use crate::validation::violations::ReferenceViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// How much a machine trusts its configuration at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Accept undeclared `initial` and transition targets
    #[default]
    Permissive,

    /// Reject any reference to an undeclared state
    Strict,
}

impl Strictness {
    /// Check `config` under this policy.
    pub fn enforce(self, config: &MachineConfig) -> Result<(), ConfigError> {
        match self {
            Self::Permissive => Ok(()),
            Self::Strict => match check_references(config) {
                Validation::Success(_) => Ok(()),
                Validation::Failure(violations) => {
                    let violations: Vec<ReferenceViolation> =
                        violations.iter().cloned().collect();
                    warn!(
                        count = violations.len(),
                        "rejecting configuration with undeclared state references"
                    );
                    Err(ConfigError::UnresolvedReferences { violations })
                }
            },
        }
    }
}

/// Check that `initial` and every transition target are declared states.
/// Returns Validation::Failure with ALL dangling references if any exist.
pub fn check_references(config: &MachineConfig) -> Validation<(), NonEmptyVec<ReferenceViolation>> {
    let states = config.states();
    let mut checks: Vec<Validation<(), NonEmptyVec<ReferenceViolation>>> = Vec::new();

    checks.push(if states.contains(config.initial()) {
        Validation::success(())
    } else {
        Validation::fail(ReferenceViolation::UnknownInitial {
            initial: config.initial().to_string(),
        })
    });

    for transition in config.transitions() {
        if !states.contains(&transition.to) {
            checks.push(Validation::fail(ReferenceViolation::UnknownTarget {
                state: transition.from,
                event: transition.event,
                target: transition.to,
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
