use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use vr_keyboard::traits::Clock;

/// Clock that only moves when told to. Clones share the same time.
#[derive(Default, Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.set(self.now.get() + Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
