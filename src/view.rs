//! Appearance rules for the keyboard's own buttons.
//!
//! Everything here is a pure function of keyboard state. The controller
//! builds a [`ViewState`] from these and hands it to `keyboard_mode_changed`
//! subscribers, so a host re-renders without reaching back into the
//! controller.

use crate::config::Labels;
use crate::types::{KeyColors, Layout, ShiftAppearance, ShiftSprite};

pub fn shift_appearance(shift: bool, caps_lock: bool, colors: &KeyColors) -> ShiftAppearance {
    if caps_lock {
        ShiftAppearance {
            color: colors.highlighted,
            sprite: ShiftSprite::Active,
        }
    } else if shift {
        ShiftAppearance {
            color: colors.highlighted,
            sprite: ShiftSprite::Default,
        }
    } else {
        ShiftAppearance {
            color: colors.normal,
            sprite: ShiftSprite::Default,
        }
    }
}

pub fn switch_label(layout: Layout, labels: &Labels) -> &str {
    match layout {
        Layout::Letters => &labels.switch_to_letters,
        Layout::Numbers | Layout::Special => &labels.switch_to_numbers,
    }
}

/// The numbers/special toggle only exists outside the letters layout.
pub fn numbers_special_visible(layout: Layout) -> bool {
    layout != Layout::Letters
}

pub fn numbers_special_label(layout: Layout, labels: &Labels) -> &str {
    match layout {
        Layout::Special => &labels.numbers,
        Layout::Letters | Layout::Numbers => &labels.special,
    }
}

/// Renders `template` with every `{0}` replaced by `presses`.
pub fn format_counter(template: &str, presses: u32) -> String {
    template.replace("{0}", &presses.to_string())
}

/// Everything a host needs to draw the keyboard chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub layout: Layout,
    pub shift: ShiftAppearance,
    pub switch_label: String,
    pub numbers_special_visible: bool,
    pub numbers_special_label: String,
    pub keys_enabled: bool,
    pub enter_enabled: bool,
    /// `None` when no counter format is configured.
    pub counter_text: Option<String>,
}
