/// Discrete buttons on the keyboard that are not character keys.
///
/// Character keys publish on the [`KeyChannel`](crate::channel::KeyChannel);
/// these buttons are wired straight to the controller by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Inserts a single space.
    Space,
    /// Deletes the selection, or one character left of the caret.
    Delete,
    /// One-shot shift, double tap for caps lock.
    Shift,
    /// Toggles between the letters and numbers layouts.
    LayoutSwitch,
    /// Toggles between the numbers and special layouts.
    /// Has no effect while the letters layout is showing.
    NumbersSpecial,
    /// Submits the text once the minimum length is reached.
    Enter,
}

impl Button {
    /// All buttons, in the order a host usually lays them out.
    pub const ALL: [Button; 6] = [
        Button::Shift,
        Button::LayoutSwitch,
        Button::NumbersSpecial,
        Button::Space,
        Button::Delete,
        Button::Enter,
    ];
}

/// Input events that can be processed by the keyboard controller.
///
/// Hosts that route everything through one entry point use this instead of
/// calling [`press_key`](crate::KeyboardController::press_key) and
/// [`press_button`](crate::KeyboardController::press_button) directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A character key in its base form, e.g. `"a"`, `"1"` or `"#"`.
    /// Letters should be lowercase; case is decided by the shift state.
    Key(String),
    /// One of the non-character buttons.
    Button(Button),
}

impl From<Button> for InputEvent {
    fn from(button: Button) -> Self {
        InputEvent::Button(button)
    }
}

impl From<char> for InputEvent {
    fn from(ch: char) -> Self {
        InputEvent::Key(ch.to_string())
    }
}
