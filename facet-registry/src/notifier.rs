//! Clients bound to exactly one capability.

use crate::registry::CapabilityRegistry;
use crate::report::NotifyReport;
use facet::{Capability, CapabilityKind, EntityId};
use std::sync::Arc;

/// Where a [`Notifier`] gets its handles from.
///
/// This is the only view a notifier holds: handles of one capability
/// and fan-out over them. It cannot name an entity's other capabilities.
pub trait CapabilitySource<C: Capability>: Send + Sync {
    /// Typed handles of every entity offering `C`, in registration order.
    fn handles(&self) -> Vec<(EntityId, Arc<C::Handle>)>;

    /// Invoke `C` on every entity offering it, isolating failures.
    fn notify(&self, signal: &C::Signal) -> NotifyReport<C::Output>;
}

impl<C: Capability> CapabilitySource<C> for CapabilityRegistry {
    fn handles(&self) -> Vec<(EntityId, Arc<C::Handle>)> {
        CapabilityRegistry::handles::<C>(self)
    }

    fn notify(&self, signal: &C::Signal) -> NotifyReport<C::Output> {
        self.notify_all::<C>(signal)
    }
}

/// A subsystem that depends on exactly one capability.
///
/// A `Notifier<Quackable>` can make every registered duck quack and
/// nothing else: it stores only a [`CapabilitySource`] for that one
/// capability, so no other capability is reachable through it.
pub struct Notifier<C: Capability> {
    source: Arc<dyn CapabilitySource<C>>,
}

impl<C: Capability> Notifier<C> {
    /// Bind a notifier to a registry (or any other source of `C` handles).
    pub fn new(source: Arc<dyn CapabilitySource<C>>) -> Self {
        Self { source }
    }

    /// The capability this notifier is bound to.
    pub fn kind(&self) -> CapabilityKind {
        C::KIND
    }

    /// Invoke the capability on every registered entity.
    pub fn notify(&self, signal: &C::Signal) -> NotifyReport<C::Output> {
        self.source.notify(signal)
    }

    /// Handles of the registered entities, typed to this capability only.
    pub fn handles(&self) -> Vec<(EntityId, Arc<C::Handle>)> {
        self.source.handles()
    }

    /// Number of entities currently reachable.
    pub fn len(&self) -> usize {
        self.source.handles().len()
    }

    /// Whether no entity is currently reachable.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Capability> Clone for Notifier<C> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}
