//! Internal-state variants of an entity.
//!
//! State changes the quality of a capability's response, never whether
//! the capability can be invoked.

use crate::id::StateVariant;
use std::sync::atomic::{AtomicBool, Ordering};

/// Enumerates and switches an entity's internal-state variants.
///
/// Implementations use interior mutability: entities are shared behind
/// `Arc`, and the handles they hand out observe the same state.
pub trait StateControl: Send + Sync {
    /// Every variant the entity can be put into.
    fn variants(&self) -> Vec<StateVariant>;

    /// The variant the entity is currently in.
    fn current(&self) -> StateVariant;

    /// Switch to `variant`. Unknown variants are ignored.
    fn enter(&self, variant: &StateVariant);
}

/// A two-variant `on`/`off` state. Starts off.
#[derive(Debug, Default)]
pub struct PowerSwitch {
    on: AtomicBool,
}

impl PowerSwitch {
    /// Name of the powered variant.
    pub const ON: &'static str = "on";
    /// Name of the unpowered variant.
    pub const OFF: &'static str = "off";

    /// Create a switch in the `off` position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Power on.
    pub fn turn_on(&self) {
        self.on.store(true, Ordering::SeqCst);
    }

    /// Power off.
    pub fn turn_off(&self) {
        self.on.store(false, Ordering::SeqCst);
    }

    /// Whether the switch is on.
    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::SeqCst)
    }
}

impl StateControl for PowerSwitch {
    fn variants(&self) -> Vec<StateVariant> {
        vec![StateVariant::new(Self::ON), StateVariant::new(Self::OFF)]
    }

    fn current(&self) -> StateVariant {
        if self.is_on() {
            StateVariant::new(Self::ON)
        } else {
            StateVariant::new(Self::OFF)
        }
    }

    fn enter(&self, variant: &StateVariant) {
        match variant.as_str() {
            Self::ON => self.turn_on(),
            Self::OFF => self.turn_off(),
            _ => {}
        }
    }
}
