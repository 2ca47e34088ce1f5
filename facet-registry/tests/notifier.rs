use facet::test_utils::*;
use facet::{Capability, EntityId, invoke_guarded};
use facet_registry::{CapabilityRegistry, CapabilitySource, Delivery, Notifier, NotifyReport};
use std::sync::{Arc, Mutex};

fn pond() -> (Arc<CapabilityRegistry>, Vec<Arc<facet::Entity>>) {
    let registry = Arc::new(CapabilityRegistry::new());
    let mallard = duck("mallard");
    let (robo, _) = electronic_duck("robo");
    registry.register_declared(&mallard);
    registry.register_declared(&robo);
    (registry, vec![mallard, robo])
}

// --- Binding ---

#[test]
fn notifier_is_bound_to_one_kind() {
    let (registry, _pond) = pond();
    let quackers = Notifier::<Quackable>::new(registry);
    assert_eq!(quackers.kind(), Quackable::KIND);
    assert_eq!(quackers.len(), 2);
    assert!(!quackers.is_empty());
}

#[test]
fn notifier_fans_out_through_registry() {
    let (registry, _pond) = pond();
    let quackers = Notifier::<Quackable>::new(registry);
    let report = quackers.notify(&());
    assert_eq!(report.outputs(), vec!["Quack...", "..."]);
}

#[test]
fn notifier_sees_later_registrations() {
    let (registry, _pond) = pond();
    let swimmers = Notifier::<Swimmable>::new(registry.clone());
    let teal = duck("teal");
    registry.register(Swimmable::KIND, &teal).unwrap();
    assert_eq!(swimmers.len(), 3);

    registry.deregister(Swimmable::KIND, teal.id());
    assert_eq!(swimmers.len(), 2);
}

#[test]
fn notifier_handles_drive_a_pool() {
    let (registry, pond) = pond();
    let swimmers = Notifier::<Swimmable>::new(registry);
    let mut pool = Pool::new();
    for (_, handle) in swimmers.handles() {
        pool.add(handle);
    }
    assert_eq!(pool.run(), vec!["Swim...", "..."]);

    pond[1].enter_state(&facet::StateVariant::new("on"));
    assert_eq!(pool.run(), vec!["Swim...", "Swim..."]);
}

#[test]
fn proximity_sensor_unlocks_sensing_doors_only() {
    let registry = Arc::new(CapabilityRegistry::new());
    let door_a = timed_door("doorA");
    let door_b = sensing_door("doorB");
    registry.register_declared(&door_a);
    registry.register_declared(&door_b);
    let lockers = Notifier::<Lockable>::new(registry.clone());
    lockers.notify(&LockSignal::Lock);

    let sensor = Notifier::<ProximityNotifiable>::new(registry);
    let report = sensor.notify(&());
    assert_eq!(report.recipients(), vec![&EntityId::new("doorB")]);

    let states = lockers.notify(&LockSignal::Query);
    assert_eq!(states.outputs(), vec![&true, &false]);
}

#[test]
fn empty_notifier_reports_nothing() {
    let registry = Arc::new(CapabilityRegistry::new());
    let timers = Notifier::<TimeOutNotifiable>::new(registry);
    assert!(timers.is_empty());
    assert_eq!(timers.notify(&()).attempted(), 0);
}

#[test]
fn cloned_notifier_shares_source() {
    let (registry, _pond) = pond();
    let quackers = Notifier::<Quackable>::new(registry.clone());
    let copy = quackers.clone();
    registry.deregister_all(&EntityId::new("robo"));
    assert_eq!(copy.len(), 1);
    assert_eq!(quackers.len(), 1);
}

// --- Custom sources ---

/// A source that serves a fixed list of swimmers and records fan-outs.
struct FixedSwimmers {
    swimmers: Vec<(EntityId, Arc<dyn Swim>)>,
    calls: Mutex<usize>,
}

impl CapabilitySource<Swimmable> for FixedSwimmers {
    fn handles(&self) -> Vec<(EntityId, Arc<dyn Swim>)> {
        self.swimmers.clone()
    }

    fn notify(&self, signal: &()) -> NotifyReport<String> {
        *self.calls.lock().unwrap() += 1;
        let mut report = NotifyReport::new(Swimmable::KIND);
        for (id, swimmer) in &self.swimmers {
            let output = invoke_guarded::<Swimmable>(&**swimmer, signal).unwrap();
            report.delivered.push(Delivery {
                entity: id.clone(),
                output,
            });
        }
        report
    }
}

#[test]
fn notifier_accepts_any_source() {
    let source = Arc::new(FixedSwimmers {
        swimmers: vec![(EntityId::new("fixed"), Arc::new(Duck) as Arc<dyn Swim>)],
        calls: Mutex::new(0),
    });
    let swimmers = Notifier::<Swimmable>::new(source.clone());
    assert_eq!(swimmers.len(), 1);
    assert_eq!(swimmers.notify(&()).outputs(), vec!["Swim..."]);
    assert_eq!(*source.calls.lock().unwrap(), 1);
}
