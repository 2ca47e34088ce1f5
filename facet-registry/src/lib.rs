#![deny(missing_docs)]
//! Capability registry and single-capability notifiers for facet.
//!
//! The [`CapabilityRegistry`] maps each capability kind to the entities
//! currently offering it, in registration order. It never owns an
//! entity: entries are weak, so an entity that is dropped disappears
//! from every registry it was in. Fan-out through
//! [`CapabilityRegistry::notify_all`] isolates failures per entity,
//! so one misbehaving entity never stops the rest from being notified.
//!
//! A [`Notifier`] is the client side: it is bound to exactly one
//! capability and can reach nothing but that capability's handles.

mod config;
mod notifier;
mod registry;
mod report;

pub use config::RegistryConfig;
pub use notifier::{CapabilitySource, Notifier};
pub use registry::CapabilityRegistry;
pub use report::{Delivery, NotifyReport};
