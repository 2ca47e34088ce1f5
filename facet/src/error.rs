//! The two error kinds of the capability model.

use crate::capability::CapabilityKind;
use crate::id::EntityId;
use serde::Serialize;
use thiserror::Error;

/// Capability errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The entity never declared this capability. This is a
    /// construction-time fact; callers can check
    /// `Entity::implements_capability` first.
    #[error("entity {entity} does not support capability {kind}")]
    UnsupportedCapability {
        /// The entity that was asked.
        entity: EntityId,
        /// The capability it does not declare.
        kind: CapabilityKind,
    },

    /// A capability operation failed during fan-out.
    #[error(transparent)]
    InvocationFailure(#[from] InvocationFailure),
}

/// A failure caught inside one entity's capability operation.
///
/// Collected per entity during fan-out, never propagated to abort it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("capability {kind} failed on entity {entity}: {message}")]
pub struct InvocationFailure {
    /// The entity whose operation failed.
    pub entity: EntityId,
    /// The capability that was being invoked.
    pub kind: CapabilityKind,
    /// What went wrong.
    pub message: String,
}
