use crate::signal::Signal;
use crate::types::KeyColors;

/// Shared bus between key widgets and the keyboard controller.
///
/// Key widgets publish on [`key_pressed`](Self::key_pressed) and listen to
/// the other three signals to style and enable themselves.
#[derive(Debug, Default)]
pub struct KeyChannel {
    /// A character key was pressed. Payload is the key's base form.
    pub key_pressed: Signal<String>,
    /// Colours every key should use, sent once at controller init.
    pub key_colors_changed: Signal<KeyColors>,
    /// `false` while the output field is full.
    pub keys_state_changed: Signal<bool>,
    /// The first character was committed.
    pub first_key_press: Signal<()>,
}

impl KeyChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise_key_pressed(&self, key: &str) {
        self.key_pressed.emit(&key.to_owned());
    }

    pub fn raise_key_colors_changed(&self, colors: KeyColors) {
        self.key_colors_changed.emit(&colors);
    }

    pub fn raise_keys_state_changed(&self, enabled: bool) {
        self.keys_state_changed.emit(&enabled);
    }

    pub fn raise_first_key_press(&self) {
        self.first_key_press.emit(&());
    }
}
