//! Doors: four independent capabilities, two door flavors.

use crate::capability::{Capability, CapabilityKind};
use crate::entity::Entity;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lock contract.
pub trait Lock: Send + Sync {
    /// Lock.
    fn lock(&self);
    /// Unlock.
    fn unlock(&self);
    /// Whether locked.
    fn is_locked(&self) -> bool;
}

/// Open contract.
pub trait Open: Send + Sync {
    /// Open.
    fn open(&self);
    /// Close.
    fn close(&self);
    /// Whether open.
    fn is_open(&self) -> bool;
}

/// Receives timer expirations.
pub trait TimeOutCallback: Send + Sync {
    /// The registered delay elapsed.
    fn time_out_callback(&self);
}

/// Receives proximity detections.
pub trait ProximityCallback: Send + Sync {
    /// Someone is near.
    fn proximity_callback(&self);
}

/// Operations of [`Lockable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockSignal {
    /// Lock the door.
    Lock,
    /// Unlock the door.
    Unlock,
    /// Only report the lock state.
    Query,
}

/// Operations of [`Openable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenSignal {
    /// Open the door.
    Open,
    /// Close the door.
    Close,
    /// Only report whether it is open.
    Query,
}

/// Can be locked and unlocked. Outputs the lock state after the operation.
pub struct Lockable;

impl Capability for Lockable {
    const KIND: CapabilityKind = CapabilityKind::new("lockable");
    type Handle = dyn Lock;
    type Signal = LockSignal;
    type Output = bool;

    fn invoke(handle: &Self::Handle, signal: &Self::Signal) -> Self::Output {
        match signal {
            LockSignal::Lock => handle.lock(),
            LockSignal::Unlock => handle.unlock(),
            LockSignal::Query => {}
        }
        handle.is_locked()
    }
}

/// Can be opened and closed. Outputs whether it is open after the operation.
pub struct Openable;

impl Capability for Openable {
    const KIND: CapabilityKind = CapabilityKind::new("openable");
    type Handle = dyn Open;
    type Signal = OpenSignal;
    type Output = bool;

    fn invoke(handle: &Self::Handle, signal: &Self::Signal) -> Self::Output {
        match signal {
            OpenSignal::Open => handle.open(),
            OpenSignal::Close => handle.close(),
            OpenSignal::Query => {}
        }
        handle.is_open()
    }
}

/// Emits a timeout signal target.
pub struct TimeOutNotifiable;

impl Capability for TimeOutNotifiable {
    const KIND: CapabilityKind = CapabilityKind::new("time_out_notifiable");
    type Handle = dyn TimeOutCallback;
    type Signal = ();
    type Output = ();

    fn invoke(handle: &Self::Handle, _signal: &Self::Signal) {
        handle.time_out_callback();
    }
}

/// Reacts to proximity detection.
pub struct ProximityNotifiable;

impl Capability for ProximityNotifiable {
    const KIND: CapabilityKind = CapabilityKind::new("proximity_notifiable");
    type Handle = dyn ProximityCallback;
    type Signal = ();
    type Output = ();

    fn invoke(handle: &Self::Handle, _signal: &Self::Signal) {
        handle.proximity_callback();
    }
}

/// The shared mechanics behind every door. Which of these behaviors a
/// door exposes is decided by the capabilities its entity declares.
#[derive(Debug, Default)]
pub struct DoorMechanism {
    locked: AtomicBool,
    open: AtomicBool,
}

impl Lock for DoorMechanism {
    fn lock(&self) {
        self.locked.store(true, Ordering::SeqCst);
    }

    fn unlock(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}

impl Open for DoorMechanism {
    fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

// A timed-out door locks itself.
impl TimeOutCallback for DoorMechanism {
    fn time_out_callback(&self) {
        self.lock();
    }
}

// A sensing door unlocks when someone approaches.
impl ProximityCallback for DoorMechanism {
    fn proximity_callback(&self) {
        self.unlock();
    }
}

/// A door that locks itself when its timer expires.
/// Declares `lockable`, `openable` and `time_out_notifiable`.
pub fn timed_door(id: &str) -> Arc<Entity> {
    let mechanism = Arc::new(DoorMechanism::default());
    Entity::builder(id)
        .with::<Lockable>(mechanism.clone())
        .with::<Openable>(mechanism.clone())
        .with::<TimeOutNotifiable>(mechanism)
        .build()
}

/// A door that unlocks when someone approaches.
/// Declares `lockable`, `openable` and `proximity_notifiable`.
pub fn sensing_door(id: &str) -> Arc<Entity> {
    let mechanism = Arc::new(DoorMechanism::default());
    Entity::builder(id)
        .with::<Lockable>(mechanism.clone())
        .with::<Openable>(mechanism.clone())
        .with::<ProximityNotifiable>(mechanism)
        .build()
}
