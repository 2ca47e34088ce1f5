//! Check results.

use facet::{CapabilityKind, EntityId, StateVariant};
use serde::Serialize;

/// What an entity did wrong.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The entity was offered as a candidate but never declared the capability.
    Undeclared,
    /// The operation panicked instead of degrading.
    Panicked {
        /// The panic message.
        message: String,
    },
    /// The operation returned, but its output broke the postcondition.
    PostconditionFailed {
        /// Debug rendering of the offending output.
        output: String,
    },
}

/// One violation, tagged with the entity and state that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The offending entity.
    pub entity: EntityId,
    /// The internal state the entity was in.
    pub state: StateVariant,
    /// What went wrong.
    #[serde(flatten)]
    pub kind: ViolationKind,
}

/// The outcome of checking one capability across candidate entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The capability that was checked.
    pub kind: CapabilityKind,
    /// How many candidate entities were checked.
    pub entities: usize,
    /// How many probe signals each state variant was exercised with.
    pub probes: usize,
    /// How many probe invocations ran.
    pub invocations: usize,
    /// Every violation found, in the order found.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub(crate) fn new(kind: CapabilityKind, probes: usize) -> Self {
        Self {
            kind,
            entities: 0,
            probes,
            invocations: 0,
            violations: Vec::new(),
        }
    }

    /// False when the check ran without probes: declared candidates
    /// were never invoked, so nothing was shown either way.
    pub fn is_conclusive(&self) -> bool {
        self.probes > 0
    }

    /// True when the check was conclusive and every candidate honored
    /// the capability in every state.
    pub fn is_substitutable(&self) -> bool {
        self.is_conclusive() && self.violations.is_empty()
    }

    /// Violations caused by one entity.
    pub fn violations_for(&self, entity: &EntityId) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| &v.entity == entity)
            .collect()
    }
}
