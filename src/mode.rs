use std::time::Duration;

use crate::types::Layout;

bitflags::bitflags! {
    /// Case-related keyboard flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModeFlags: u8 {
        /// One-shot uppercase for the next character.
        const SHIFT = 0b001;
        /// Sticky uppercase. Never set together with `SHIFT`.
        const CAPS_LOCK = 0b010;
        /// A key was committed since the last shift tap.
        const KEY_PRESSED = 0b100;
    }
}

/// Default window in which a second shift tap turns on caps lock.
pub const DEFAULT_DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(500);

/// Shift, caps lock and layout state.
#[derive(Debug, Clone)]
pub struct ModeState {
    flags: ModeFlags,
    layout: Layout,
    last_shift: Option<Duration>,
    double_tap_window: Duration,
}

impl ModeState {
    pub fn new(double_tap_window: Duration) -> Self {
        Self {
            flags: ModeFlags::empty(),
            layout: Layout::Letters,
            last_shift: None,
            double_tap_window,
        }
    }

    pub fn shift_active(&self) -> bool {
        self.flags.contains(ModeFlags::SHIFT)
    }

    pub fn caps_lock_active(&self) -> bool {
        self.flags.contains(ModeFlags::CAPS_LOCK)
    }

    /// Whether the next character should be uppercase.
    pub fn uppercase(&self) -> bool {
        self.flags.intersects(ModeFlags::SHIFT | ModeFlags::CAPS_LOCK)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Arms one-shot shift without a tap, as auto-caps does at start.
    ///
    /// There is no previous tap to pair with, so the next tap is a fresh
    /// tap rather than the second half of a double tap.
    pub fn arm_shift(&mut self) {
        if !self.caps_lock_active() {
            self.flags.insert(ModeFlags::SHIFT | ModeFlags::KEY_PRESSED);
        }
    }

    /// Applies a shift tap at time `now`.
    pub fn press_shift(&mut self, now: Duration) {
        let f = self.flags;
        let next = if f.contains(ModeFlags::CAPS_LOCK) {
            ModeFlags::empty()
        } else if f.contains(ModeFlags::SHIFT) && !f.contains(ModeFlags::KEY_PRESSED) {
            let within_window = self
                .last_shift
                .is_some_and(|last| now.saturating_sub(last) < self.double_tap_window);
            if within_window {
                ModeFlags::CAPS_LOCK
            } else {
                ModeFlags::empty()
            }
        } else {
            ModeFlags::SHIFT
        };
        self.flags = next;
        self.last_shift = Some(now);
    }

    /// Records a key commit. Returns whether the committed key should be
    /// uppercase, and clears a one-shot shift.
    pub fn commit_key(&mut self) -> bool {
        let was_shift = self.shift_active();
        self.flags.insert(ModeFlags::KEY_PRESSED);
        if self.flags.contains(ModeFlags::SHIFT | ModeFlags::KEY_PRESSED)
            && !self.caps_lock_active()
        {
            self.flags.remove(ModeFlags::SHIFT);
        }
        was_shift || self.caps_lock_active()
    }

    /// `Letters <-> Numbers`. From `Special` this returns to `Letters`.
    pub fn switch_layout(&mut self) -> Layout {
        self.layout = match self.layout {
            Layout::Letters => Layout::Numbers,
            Layout::Numbers | Layout::Special => Layout::Letters,
        };
        self.flags.remove(ModeFlags::SHIFT);
        self.layout
    }

    /// `Numbers <-> Special`. Returns `false` in the letters layout, where
    /// the toggle is hidden.
    pub fn toggle_numbers_special(&mut self) -> bool {
        self.layout = match self.layout {
            Layout::Letters => return false,
            Layout::Numbers => Layout::Special,
            Layout::Special => Layout::Numbers,
        };
        self.flags.remove(ModeFlags::SHIFT);
        true
    }

    /// Drops both shift and caps lock. Returns whether anything changed.
    pub fn force_clear(&mut self) -> bool {
        let had = self.uppercase();
        self.flags.remove(ModeFlags::SHIFT | ModeFlags::CAPS_LOCK);
        had
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_TAP_WINDOW)
    }
}
