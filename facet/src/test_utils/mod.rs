//! Ready-made capabilities, entities and clients for testing.
//!
//! Available behind the `test-utils` feature flag. Two small worlds:
//! doors that can be locked, opened, timed out or sensed, and ducks
//! that quack and swim, one of them only while powered.

mod door;
mod duck;
mod timer;

pub use door::{
    DoorMechanism, Lock, LockSignal, Lockable, Open, OpenSignal, Openable, ProximityCallback,
    ProximityNotifiable, TimeOutCallback, TimeOutNotifiable, sensing_door, timed_door,
};
pub use duck::{
    Duck, ElectronicDuck, Pool, Quack, Quackable, Swim, Swimmable, duck, electronic_duck,
};
pub use timer::Timer;
