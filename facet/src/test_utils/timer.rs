//! A timer client that only ever sees the timeout capability.

use crate::test_utils::door::TimeOutCallback;
use std::sync::Arc;
use std::time::Duration;

/// Fires each registered callback once, after its delay.
///
/// Time is advanced explicitly with [`Timer::tick`], so tests stay
/// deterministic.
#[derive(Default)]
pub struct Timer {
    elapsed: Duration,
    pending: Vec<(Duration, Arc<dyn TimeOutCallback>)>,
}

impl Timer {
    /// A timer at time zero with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `client` once `after` has elapsed from now.
    pub fn register(&mut self, after: Duration, client: Arc<dyn TimeOutCallback>) {
        self.pending.push((self.elapsed + after, client));
    }

    /// Advance time and fire everything that came due.
    /// Returns how many callbacks fired.
    pub fn tick(&mut self, by: Duration) -> usize {
        self.elapsed += by;
        let now = self.elapsed;
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(deadline, _)| *deadline <= now);
        self.pending = waiting;
        for (_, client) in &due {
            client.time_out_callback();
        }
        due.len()
    }

    /// Callbacks still waiting.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
