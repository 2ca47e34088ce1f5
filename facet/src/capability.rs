//! The Capability contract: one narrow behavioral interface per kind.

use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Stable name of a capability. Two capabilities are different kinds
/// exactly when their names differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CapabilityKind(&'static str);

impl CapabilityKind {
    /// Create a kind from a static name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The kind's name.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A named, minimal behavioral contract.
///
/// Implementors are zero-sized marker types. The actual behavior lives
/// behind [`Capability::Handle`], usually a `dyn Trait` carrying only the
/// operations of this one capability. [`Capability::invoke`] gives
/// registries and checkers a uniform way to drive those operations
/// without knowing anything else about the entity.
///
/// Invocation is infallible by contract: an entity in a degraded state
/// answers with a degraded value, it does not fail. A panic escaping
/// `invoke` is a substitutability violation.
pub trait Capability: 'static {
    /// The stable name of this capability.
    const KIND: CapabilityKind;

    /// The narrow interface entities hand out for this capability.
    type Handle: ?Sized + Send + Sync + 'static;

    /// Operation arguments. An enum when the capability has several operations.
    type Signal;

    /// What one invocation observably produces.
    type Output: fmt::Debug;

    /// Drive one operation of the capability on a handle.
    fn invoke(handle: &Self::Handle, signal: &Self::Signal) -> Self::Output;

    /// The documented postcondition every output must satisfy.
    fn postcondition(_output: &Self::Output) -> bool {
        true
    }
}

/// Invoke a capability with panics caught.
///
/// Returns the panic message on failure. Used wherever one entity's
/// misbehavior must not take down the caller.
pub fn invoke_guarded<C: Capability>(
    handle: &C::Handle,
    signal: &C::Signal,
) -> Result<C::Output, String> {
    panic::catch_unwind(AssertUnwindSafe(|| C::invoke(handle, signal)))
        .map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "capability operation panicked".to_string()
    }
}
