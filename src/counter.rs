use crate::signal::Signal;

/// Counts every press the keyboard handles.
#[derive(Debug, Default)]
pub struct PressCounter {
    total: u32,
    /// Fires with the new total after every mutation.
    pub changed: Signal<u32>,
}

impl PressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.total
    }

    pub fn increment(&mut self) -> u32 {
        self.total = self.total.saturating_add(1);
        log::debug!("press counted, total {}", self.total);
        self.changed.emit(&self.total);
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.changed.emit(&self.total);
    }
}
