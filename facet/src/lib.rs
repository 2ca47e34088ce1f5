//! # facet: Capability contracts for segregated object models
//!
//! This crate defines the vocabulary every other facet crate speaks:
//! narrow behavioral contracts ([`Capability`]), the objects that offer
//! them ([`Entity`]), and the two error kinds the model allows.
//!
//! ## The Model
//!
//! | Piece | Type | What it does |
//! |-------|------|-------------|
//! | Capability | [`Capability`], [`CapabilityKind`] | One named, minimal contract |
//! | Entity | [`Entity`], [`CapabilitySet`] | Declares capabilities at construction, hands out typed handles |
//! | State | [`StateControl`], [`PowerSwitch`] | Internal variants that change response quality, never availability |
//! | Errors | [`CapabilityError`], [`InvocationFailure`] | Undeclared access and isolated invocation failures |
//!
//! ## Design Principle
//!
//! An entity holds a capability table instead of implementing one combined
//! interface. Clients ask for exactly the capability they need and receive a
//! handle typed to that capability alone, so no client can reach behavior it
//! does not invoke. Declaring a new capability is adding a new marker type;
//! existing entities and clients are untouched.

#![deny(missing_docs)]

pub mod capability;
pub mod entity;
pub mod error;
pub mod id;
pub mod state;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use capability::{Capability, CapabilityKind, invoke_guarded};
pub use entity::{CapabilitySet, Entity, EntityBuilder};
pub use error::{CapabilityError, InvocationFailure};
pub use id::{EntityId, StateVariant};
pub use state::{PowerSwitch, StateControl};
