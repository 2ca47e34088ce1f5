//! Ducks: a real duck and an electronic one that only works when powered.

use crate::capability::{Capability, CapabilityKind};
use crate::entity::Entity;
use crate::state::PowerSwitch;
use std::sync::Arc;

/// Quack contract.
pub trait Quack: Send + Sync {
    /// Make a sound. Never empty.
    fn quack(&self) -> String;
}

/// Swim contract.
pub trait Swim: Send + Sync {
    /// Describe the swim. Never empty.
    fn swim(&self) -> String;
}

/// Can quack. Postcondition: the sound is not empty.
pub struct Quackable;

impl Capability for Quackable {
    const KIND: CapabilityKind = CapabilityKind::new("quackable");
    type Handle = dyn Quack;
    type Signal = ();
    type Output = String;

    fn invoke(handle: &Self::Handle, _signal: &Self::Signal) -> Self::Output {
        handle.quack()
    }

    fn postcondition(output: &Self::Output) -> bool {
        !output.is_empty()
    }
}

/// Can swim. Postcondition: the description is not empty.
pub struct Swimmable;

impl Capability for Swimmable {
    const KIND: CapabilityKind = CapabilityKind::new("swimmable");
    type Handle = dyn Swim;
    type Signal = ();
    type Output = String;

    fn invoke(handle: &Self::Handle, _signal: &Self::Signal) -> Self::Output {
        handle.swim()
    }

    fn postcondition(output: &Self::Output) -> bool {
        !output.is_empty()
    }
}

/// A living duck.
#[derive(Debug, Default)]
pub struct Duck;

impl Quack for Duck {
    fn quack(&self) -> String {
        "Quack...".to_string()
    }
}

impl Swim for Duck {
    fn swim(&self) -> String {
        "Swim...".to_string()
    }
}

/// A battery duck. Powered off it still answers, with `"..."`.
#[derive(Debug)]
pub struct ElectronicDuck {
    power: Arc<PowerSwitch>,
}

impl ElectronicDuck {
    /// A duck driven by `power`.
    pub fn new(power: Arc<PowerSwitch>) -> Self {
        Self { power }
    }
}

impl Quack for ElectronicDuck {
    fn quack(&self) -> String {
        if self.power.is_on() {
            "Quack...".to_string()
        } else {
            "...".to_string()
        }
    }
}

impl Swim for ElectronicDuck {
    fn swim(&self) -> String {
        if self.power.is_on() {
            "Swim...".to_string()
        } else {
            "...".to_string()
        }
    }
}

/// A living duck entity declaring `quackable` and `swimmable`.
pub fn duck(id: &str) -> Arc<Entity> {
    let duck = Arc::new(Duck);
    Entity::builder(id)
        .with::<Quackable>(duck.clone())
        .with::<Swimmable>(duck)
        .build()
}

/// An electronic duck entity with `on`/`off` states, starting off.
/// Returns the switch too so callers can flip it directly.
pub fn electronic_duck(id: &str) -> (Arc<Entity>, Arc<PowerSwitch>) {
    let power = Arc::new(PowerSwitch::new());
    let duck = Arc::new(ElectronicDuck::new(power.clone()));
    let entity = Entity::builder(id)
        .with::<Quackable>(duck.clone())
        .with::<Swimmable>(duck)
        .with_states(power.clone())
        .build();
    (entity, power)
}

/// Makes every swimmer in it swim. Knows nothing about quacking.
#[derive(Default)]
pub struct Pool {
    swimmers: Vec<Arc<dyn Swim>>,
}

impl Pool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a swimmer in the pool.
    pub fn add(&mut self, swimmer: Arc<dyn Swim>) {
        self.swimmers.push(swimmer);
    }

    /// Everyone swims, in the order they joined.
    pub fn run(&self) -> Vec<String> {
        self.swimmers.iter().map(|s| s.swim()).collect()
    }
}
