//! Entities and their capability tables.

use crate::capability::{Capability, CapabilityKind};
use crate::error::CapabilityError;
use crate::id::{EntityId, StateVariant};
use crate::state::StateControl;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A capability table: one handle per declared capability kind.
///
/// Handles are stored type-erased and recovered by downcasting to
/// `Arc<C::Handle>`, so the set can hold any mix of capabilities.
/// Declaration order is kept for reporting.
#[derive(Default)]
pub struct CapabilitySet {
    order: Vec<CapabilityKind>,
    handles: HashMap<CapabilityKind, Box<dyn Any + Send + Sync>>,
}

impl CapabilitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare capability `C` backed by `handle`. Declaring a kind again
    /// replaces its handle but keeps its original position.
    pub fn insert<C: Capability>(&mut self, handle: Arc<C::Handle>) {
        if self.handles.insert(C::KIND, Box::new(handle)).is_none() {
            self.order.push(C::KIND);
        }
    }

    /// Whether `kind` is declared.
    pub fn contains(&self, kind: CapabilityKind) -> bool {
        self.handles.contains_key(&kind)
    }

    /// The handle for `C`, if declared with a matching handle type.
    pub fn get<C: Capability>(&self) -> Option<Arc<C::Handle>> {
        self.handles
            .get(&C::KIND)?
            .downcast_ref::<Arc<C::Handle>>()
            .cloned()
    }

    /// Declared kinds in declaration order.
    pub fn kinds(&self) -> &[CapabilityKind] {
        &self.order
    }

    /// Number of declared capabilities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.order).finish()
    }
}

/// An object exposing zero or more capabilities.
///
/// The declared capability set is fixed once built. Internal state, if
/// any, is reached through an optional [`StateControl`] and may change
/// how a capability responds, never whether it is available.
pub struct Entity {
    id: EntityId,
    capabilities: CapabilitySet,
    states: Option<Arc<dyn StateControl>>,
}

impl Entity {
    /// Start building an entity with the given id.
    pub fn builder(id: impl Into<EntityId>) -> EntityBuilder {
        EntityBuilder {
            id: id.into(),
            capabilities: CapabilitySet::new(),
            states: None,
        }
    }

    /// The entity's stable identity.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Whether the entity declared `kind`.
    pub fn implements_capability(&self, kind: CapabilityKind) -> bool {
        self.capabilities.contains(kind)
    }

    /// Typed access to capability `C`.
    ///
    /// Fails with [`CapabilityError::UnsupportedCapability`] when `C` was
    /// never declared. Never depends on internal state.
    pub fn capability<C: Capability>(&self) -> Result<Arc<C::Handle>, CapabilityError> {
        self.capabilities
            .get::<C>()
            .ok_or_else(|| CapabilityError::UnsupportedCapability {
                entity: self.id.clone(),
                kind: C::KIND,
            })
    }

    /// Declared capability kinds in declaration order.
    pub fn declared(&self) -> &[CapabilityKind] {
        self.capabilities.kinds()
    }

    /// Every internal-state variant. Stateless entities report one
    /// `default` variant.
    pub fn state_variants(&self) -> Vec<StateVariant> {
        match &self.states {
            Some(states) => states.variants(),
            None => vec![StateVariant::default_state()],
        }
    }

    /// The current internal-state variant.
    pub fn current_state(&self) -> StateVariant {
        match &self.states {
            Some(states) => states.current(),
            None => StateVariant::default_state(),
        }
    }

    /// Switch internal state. A no-op for stateless entities.
    pub fn enter_state(&self, variant: &StateVariant) {
        if let Some(states) = &self.states {
            states.enter(variant);
        }
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("capabilities", &self.capabilities)
            .field("state", &self.current_state())
            .finish()
    }
}

/// Builder for [`Entity`]. The capability set is closed by [`EntityBuilder::build`].
pub struct EntityBuilder {
    id: EntityId,
    capabilities: CapabilitySet,
    states: Option<Arc<dyn StateControl>>,
}

impl EntityBuilder {
    /// Declare capability `C`.
    pub fn with<C: Capability>(mut self, handle: Arc<C::Handle>) -> Self {
        self.capabilities.insert::<C>(handle);
        self
    }

    /// Attach internal-state control.
    pub fn with_states(mut self, states: Arc<dyn StateControl>) -> Self {
        self.states = Some(states);
        self
    }

    /// Finish building. Entities are shared, so this returns an `Arc`.
    pub fn build(self) -> Arc<Entity> {
        Arc::new(Entity {
            id: self.id,
            capabilities: self.capabilities,
            states: self.states,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Ring: Send + Sync {
        fn ring(&self) -> &'static str;
    }

    struct Ringable;

    impl Capability for Ringable {
        const KIND: CapabilityKind = CapabilityKind::new("ringable");
        type Handle = dyn Ring;
        type Signal = ();
        type Output = &'static str;

        fn invoke(handle: &Self::Handle, _signal: &()) -> &'static str {
            handle.ring()
        }
    }

    /// Same kind name as `Ringable`, different handle type.
    struct Impostor;

    impl Capability for Impostor {
        const KIND: CapabilityKind = CapabilityKind::new("ringable");
        type Handle = str;
        type Signal = ();
        type Output = ();

        fn invoke(_handle: &str, _signal: &()) {}
    }

    struct Bell(&'static str);
    impl Ring for Bell {
        fn ring(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn redeclaring_replaces_handle_in_place() {
        let mut set = CapabilitySet::new();
        set.insert::<Ringable>(Arc::new(Bell("ding")));
        set.insert::<Ringable>(Arc::new(Bell("dong")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get::<Ringable>().unwrap().ring(), "dong");
    }

    #[test]
    fn mismatched_handle_type_is_not_found() {
        let mut set = CapabilitySet::new();
        set.insert::<Ringable>(Arc::new(Bell("ding")));
        assert!(set.contains(Impostor::KIND));
        assert!(set.get::<Impostor>().is_none());
    }

    #[test]
    fn stateless_entity_reports_default_variant() {
        let entity = Entity::builder("bell")
            .with::<Ringable>(Arc::new(Bell("ding")))
            .build();
        assert_eq!(entity.state_variants(), vec![StateVariant::default_state()]);
        entity.enter_state(&StateVariant::new("on"));
        assert_eq!(entity.current_state(), StateVariant::default_state());
    }

    #[test]
    fn debug_lists_declared_kinds() {
        let entity = Entity::builder("bell")
            .with::<Ringable>(Arc::new(Bell("ding")))
            .build();
        let rendered = format!("{entity:?}");
        assert!(rendered.contains("ringable"));
        assert!(rendered.contains("bell"));
    }
}
