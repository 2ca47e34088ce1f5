//! The substitutability checker.

use crate::config::CheckerConfig;
use crate::report::{CheckReport, Violation, ViolationKind};
use facet::{Capability, Entity, invoke_guarded};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Verifies that entities claiming a capability honor its contract.
///
/// For each candidate, every declared state variant is entered and
/// every probe signal is invoked. An invocation passes when it returns
/// without panicking and its output satisfies
/// [`Capability::postcondition`].
#[derive(Debug, Default)]
pub struct SubstitutabilityChecker {
    config: CheckerConfig,
}

impl SubstitutabilityChecker {
    /// A checker with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A checker with the given configuration.
    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Check capability `C` on `entities`, invoking each of `probes`
    /// in each state variant. With no probes nothing is invoked, only
    /// undeclared candidates are reported, and the report is marked
    /// inconclusive.
    ///
    /// Entity state is switched during the check and, unless disabled
    /// in [`CheckerConfig`], restored afterwards. Do not share the
    /// candidates with concurrent callers while a check runs.
    pub fn check<C: Capability>(
        &self,
        entities: &[Arc<Entity>],
        probes: &[C::Signal],
    ) -> CheckReport {
        let kind = C::KIND;
        let mut report = CheckReport::new(kind, probes.len());
        if probes.is_empty() {
            warn!(kind = %kind, "no probes supplied; check is inconclusive");
        }

        for entity in entities {
            report.entities += 1;
            let handle = match entity.capability::<C>() {
                Ok(handle) => handle,
                Err(err) => {
                    warn!(
                        kind = %kind,
                        entity = %entity.id(),
                        error = %err,
                        "candidate does not declare capability"
                    );
                    report.violations.push(Violation {
                        entity: entity.id().clone(),
                        state: entity.current_state(),
                        kind: ViolationKind::Undeclared,
                    });
                    continue;
                }
            };

            let original = entity.current_state();
            for state in entity.state_variants() {
                entity.enter_state(&state);
                for probe in probes {
                    report.invocations += 1;
                    let violation = match invoke_guarded::<C>(&*handle, probe) {
                        Ok(output) if C::postcondition(&output) => {
                            if self.config.log_invocations() {
                                debug!(
                                    kind = %kind,
                                    entity = %entity.id(),
                                    state = %state,
                                    output = ?output,
                                    "probe passed"
                                );
                            }
                            continue;
                        }
                        Ok(output) => ViolationKind::PostconditionFailed {
                            output: format!("{output:?}"),
                        },
                        Err(message) => ViolationKind::Panicked { message },
                    };
                    warn!(
                        kind = %kind,
                        entity = %entity.id(),
                        state = %state,
                        violation = ?violation,
                        "substitutability violation"
                    );
                    report.violations.push(Violation {
                        entity: entity.id().clone(),
                        state: state.clone(),
                        kind: violation,
                    });
                }
            }
            if self.config.restore_state() {
                entity.enter_state(&original);
            }
        }

        info!(
            kind = %kind,
            entities = report.entities,
            invocations = report.invocations,
            violations = report.violations.len(),
            "substitutability check finished"
        );
        report
    }
}
