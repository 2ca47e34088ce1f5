//! The capability registry.

use crate::config::RegistryConfig;
use crate::report::{Delivery, NotifyReport};
use facet::{
    Capability, CapabilityError, CapabilityKind, Entity, EntityId, InvocationFailure,
    invoke_guarded,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// One (kind, entity) association. Weak: the registry never keeps an
/// entity alive.
struct Entry {
    id: EntityId,
    entity: Weak<Entity>,
}

impl Entry {
    fn is_live(&self) -> bool {
        self.entity.strong_count() > 0
    }
}

/// Maps capability kinds to the entities currently offering them.
///
/// Entity identity is its [`EntityId`]: registering a second entity
/// under an id that is already live for the same kind is a no-op.
///
/// Membership changes take the write lock; readers copy the membership
/// list under the read lock and invoke entities outside it, so every
/// fan-out sees the list as it was either before or after any given
/// mutation. Entity internal state is not synchronized here.
pub struct CapabilityRegistry {
    config: RegistryConfig,
    entries: RwLock<HashMap<CapabilityKind, Vec<Entry>>>,
}

impl CapabilityRegistry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The registry's configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register `entity` under `kind`.
    ///
    /// Idempotent per (kind, entity id). Fails with
    /// [`CapabilityError::UnsupportedCapability`] when the entity never
    /// declared `kind`.
    pub fn register(
        &self,
        kind: CapabilityKind,
        entity: &Arc<Entity>,
    ) -> Result<(), CapabilityError> {
        if !entity.implements_capability(kind) {
            debug!(
                registry = self.config.name(),
                kind = %kind,
                entity = %entity.id(),
                "rejected registration of undeclared capability"
            );
            return Err(CapabilityError::UnsupportedCapability {
                entity: entity.id().clone(),
                kind,
            });
        }

        self.insert(kind, entity);
        Ok(())
    }

    /// Register `entity` under every capability it declares.
    pub fn register_declared(&self, entity: &Arc<Entity>) {
        for kind in entity.declared() {
            self.insert(*kind, entity);
        }
    }

    /// Add the (kind, entity) association. Callers have checked that
    /// `entity` declares `kind`.
    fn insert(&self, kind: CapabilityKind, entity: &Arc<Entity>) {
        let mut entries = self.entries.write();
        let list = entries.entry(kind).or_default();
        self.prune(kind, list);

        if list.iter().any(|e| &e.id == entity.id()) {
            debug!(
                registry = self.config.name(),
                kind = %kind,
                entity = %entity.id(),
                "already registered"
            );
            return;
        }

        list.push(Entry {
            id: entity.id().clone(),
            entity: Arc::downgrade(entity),
        });
        debug!(
            registry = self.config.name(),
            kind = %kind,
            entity = %entity.id(),
            position = list.len() - 1,
            "registered"
        );
    }

    /// Remove the association between `kind` and `entity`. No-op if absent.
    pub fn deregister(&self, kind: CapabilityKind, entity: &EntityId) {
        let mut entries = self.entries.write();
        let Some(list) = entries.get_mut(&kind) else {
            return;
        };
        let before = list.len();
        list.retain(|e| &e.id != entity);
        if list.len() < before {
            debug!(
                registry = self.config.name(),
                kind = %kind,
                entity = %entity,
                "deregistered"
            );
        }
        self.prune(kind, list);
        if list.is_empty() {
            entries.remove(&kind);
        }
    }

    /// Remove `entity` from every kind. Used when an entity is disposed.
    /// Returns how many associations were removed.
    pub fn deregister_all(&self, entity: &EntityId) -> usize {
        let mut entries = self.entries.write();
        let mut removed = 0;
        entries.retain(|_, list| {
            let before = list.len();
            list.retain(|e| &e.id != entity);
            removed += before - list.len();
            !list.is_empty()
        });
        debug!(
            registry = self.config.name(),
            entity = %entity,
            removed,
            "deregistered from all kinds"
        );
        removed
    }

    /// Snapshot of the live entities registered under `kind`, in
    /// registration order. Later mutations do not affect the snapshot.
    pub fn list_entities(&self, kind: CapabilityKind) -> Vec<Arc<Entity>> {
        let entries = self.entries.read();
        entries
            .get(&kind)
            .map(|list| list.iter().filter_map(|e| e.entity.upgrade()).collect())
            .unwrap_or_default()
    }

    /// Number of live entities registered under `kind`.
    pub fn len(&self, kind: CapabilityKind) -> usize {
        let entries = self.entries.read();
        entries
            .get(&kind)
            .map(|list| list.iter().filter(|e| e.is_live()).count())
            .unwrap_or(0)
    }

    /// Kinds with at least one live entity, sorted by name.
    pub fn kinds(&self) -> Vec<CapabilityKind> {
        let entries = self.entries.read();
        let mut kinds: Vec<_> = entries
            .iter()
            .filter(|(_, list)| list.iter().any(Entry::is_live))
            .map(|(kind, _)| *kind)
            .collect();
        kinds.sort();
        kinds
    }

    /// Typed handles of every live entity registered under `C::KIND`,
    /// in registration order.
    pub fn handles<C: Capability>(&self) -> Vec<(EntityId, Arc<C::Handle>)> {
        let kind = C::KIND;
        self.list_entities(kind)
            .into_iter()
            .filter_map(|entity| match entity.capability::<C>() {
                Ok(handle) => Some((entity.id().clone(), handle)),
                Err(err) => {
                    // Same kind name, different handle type.
                    warn!(
                        registry = self.config.name(),
                        kind = %kind,
                        entity = %entity.id(),
                        error = %err,
                        "skipping entity with mismatched capability handle"
                    );
                    None
                }
            })
            .collect()
    }

    /// Invoke capability `C` on every entity registered under its kind,
    /// in registration order.
    ///
    /// A failure inside one entity is caught, logged and reported as an
    /// [`InvocationFailure`]; the remaining entities are still invoked.
    /// An entity registered under the kind whose handle is not `C`'s
    /// handle type is reported as a failure too, so every registered
    /// entity shows up in the report exactly once.
    pub fn notify_all<C: Capability>(&self, signal: &C::Signal) -> NotifyReport<C::Output> {
        let kind = C::KIND;
        let mut report = NotifyReport::new(kind);
        for entity in self.list_entities(kind) {
            let id = entity.id().clone();
            let handle = match entity.capability::<C>() {
                Ok(handle) => handle,
                Err(err) => {
                    warn!(
                        registry = self.config.name(),
                        kind = %kind,
                        entity = %id,
                        error = %err,
                        "mismatched capability handle"
                    );
                    report.failures.push(InvocationFailure {
                        entity: id,
                        kind,
                        message: err.to_string(),
                    });
                    continue;
                }
            };
            match invoke_guarded::<C>(&*handle, signal) {
                Ok(output) => {
                    if self.config.log_deliveries() {
                        debug!(
                            registry = self.config.name(),
                            kind = %kind,
                            entity = %id,
                            output = ?output,
                            "delivered"
                        );
                    }
                    report.delivered.push(Delivery { entity: id, output });
                }
                Err(message) => {
                    warn!(
                        registry = self.config.name(),
                        kind = %kind,
                        entity = %id,
                        error = %message,
                        "capability invocation failed"
                    );
                    report.failures.push(InvocationFailure {
                        entity: id,
                        kind,
                        message,
                    });
                }
            }
        }
        report
    }

    fn prune(&self, kind: CapabilityKind, list: &mut Vec<Entry>) {
        let before = list.len();
        list.retain(Entry::is_live);
        let pruned = before - list.len();
        if pruned > 0 {
            debug!(
                registry = self.config.name(),
                kind = %kind,
                pruned,
                "pruned dropped entities"
            );
        }
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
