//! Fan-out results.

use facet::{CapabilityKind, EntityId, InvocationFailure};
use serde::Serialize;

/// One successful invocation during fan-out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery<O> {
    /// The entity that was invoked.
    pub entity: EntityId,
    /// What it produced.
    pub output: O,
}

/// The outcome of notifying every entity registered under one kind.
///
/// Deliveries and failures each keep registration order. A failure
/// never prevents later entities from being invoked.
#[derive(Debug, Clone, Serialize)]
pub struct NotifyReport<O> {
    /// The capability that was invoked.
    pub kind: CapabilityKind,
    /// Successful invocations.
    pub delivered: Vec<Delivery<O>>,
    /// Invocations that failed inside the entity.
    pub failures: Vec<InvocationFailure>,
}

impl<O> NotifyReport<O> {
    /// An empty report for `kind`.
    pub fn new(kind: CapabilityKind) -> Self {
        Self {
            kind,
            delivered: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// True when no invocation failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Outputs of the successful invocations, in registration order.
    pub fn outputs(&self) -> Vec<&O> {
        self.delivered.iter().map(|d| &d.output).collect()
    }

    /// Ids of the entities that were successfully invoked.
    pub fn recipients(&self) -> Vec<&EntityId> {
        self.delivered.iter().map(|d| &d.entity).collect()
    }

    /// Total number of entities the fan-out reached.
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failures.len()
    }
}
