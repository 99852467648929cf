use std::rc::Rc;

use crate::buffer::OutputBuffer;
use crate::channel::KeyChannel;
use crate::config::KeyboardConfig;
use crate::counter::PressCounter;
use crate::error::ConfigError;
use crate::key::{Button, InputEvent};
use crate::mode::ModeState;
use crate::signal::Signal;
use crate::traits::{Clock, SystemClock};
use crate::types::{Layout, Selection};
use crate::view::{self, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Ready,
    Disposed,
}

/// The keyboard state machine.
///
/// Owns the output text and the shift/layout state. Character keys come in
/// through [`press_key`](Self::press_key) (usually via
/// [`Keyboard::attach`](crate::Keyboard::attach)), everything else through
/// [`press_button`](Self::press_button). Nothing is accepted before
/// [`init`](Self::init) or after [`dispose`](Self::dispose).
pub struct KeyboardController {
    config: KeyboardConfig,
    diagnostics: Vec<ConfigError>,
    channel: Rc<KeyChannel>,
    clock: Box<dyn Clock>,
    buffer: OutputBuffer,
    mode: ModeState,
    counter: PressCounter,
    lifecycle: Lifecycle,
    first_key_pending: bool,
    keys_enabled: bool,
    enter_enabled: bool,
    /// Shift, caps lock or layout changed. Carries the view state as of
    /// the change, since the controller is still borrowed while it fires.
    pub keyboard_mode_changed: Signal<ViewState>,
    /// Enter became enabled or disabled.
    pub enter_state_changed: Signal<bool>,
    /// Enter was pressed with enough text. Payload is the full text.
    pub submitted: Signal<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub text: String,
    pub selection: Selection,
    pub layout: Layout,
    pub shift_active: bool,
    pub caps_lock_active: bool,
    pub keys_enabled: bool,
    pub enter_enabled: bool,
    pub total_presses: u32,
}

pub struct KeyboardBuilder {
    config: KeyboardConfig,
    channel: Option<Rc<KeyChannel>>,
    clock: Option<Box<dyn Clock>>,
}

impl Default for KeyboardBuilder {
    fn default() -> Self {
        Self {
            config: KeyboardConfig::default(),
            channel: None,
            clock: None,
        }
    }
}

impl KeyboardBuilder {
    pub fn config(mut self, config: KeyboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Shares an existing channel with key widgets. A fresh one is created
    /// otherwise.
    pub fn channel(mut self, channel: Rc<KeyChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn build(self) -> KeyboardController {
        let (config, diagnostics) = self.config.sanitize();
        let mode = ModeState::new(config.double_tap_window());
        KeyboardController {
            buffer: OutputBuffer::new(config.max_characters),
            keys_enabled: config.max_characters > 0,
            enter_enabled: config.min_characters == 0,
            config,
            diagnostics,
            channel: self.channel.unwrap_or_default(),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock::new())),
            mode,
            counter: PressCounter::new(),
            lifecycle: Lifecycle::Created,
            first_key_pending: true,
            keyboard_mode_changed: Signal::new(),
            enter_state_changed: Signal::new(),
            submitted: Signal::new(),
        }
    }
}

impl KeyboardController {
    pub fn builder() -> KeyboardBuilder {
        KeyboardBuilder::default()
    }

    pub fn new(config: KeyboardConfig) -> Self {
        KeyboardBuilder::default().config(config).build()
    }

    /// Reports config diagnostics, styles the keys, arms auto-caps and
    /// evaluates length gating. Only the first call has any effect.
    pub fn init(&mut self) {
        match self.lifecycle {
            Lifecycle::Created => {}
            Lifecycle::Ready => return,
            Lifecycle::Disposed => {
                log::warn!("init called on a disposed keyboard");
                return;
            }
        }

        for diag in &self.diagnostics {
            log::warn!("keyboard config: {diag}");
        }

        self.channel.raise_key_colors_changed(self.config.colors);

        if self.config.auto_caps_at_start {
            self.mode.arm_shift();
            self.notify_mode_changed();
        }

        self.lifecycle = Lifecycle::Ready;
        self.evaluate_length();
        log::info!(
            "keyboard initialized (min {}, max {})",
            self.config.min_characters,
            self.config.max_characters
        );
    }

    /// Drops all listeners. The controller ignores every event afterwards.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.lifecycle = Lifecycle::Disposed;
        self.keyboard_mode_changed.clear();
        self.enter_state_changed.clear();
        self.submitted.clear();
        self.counter.changed.clear();
        log::info!("keyboard disposed");
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }

    /// Returns `false` if the event was dropped.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.press_key(&key),
            InputEvent::Button(button) => self.press_button(button),
        }
    }

    /// Commits a character key. Returns `false` if the key was dropped.
    pub fn press_key(&mut self, key: &str) -> bool {
        if !self.is_ready() {
            log::debug!("dropping key {key:?}: keyboard not ready");
            return false;
        }
        if !self.keys_enabled {
            log::debug!("dropping key {key:?}: output full");
            return false;
        }
        if key.is_empty() {
            log::debug!("dropping empty key");
            return false;
        }

        self.counter.increment();

        let shift_before = self.mode.shift_active();
        let upper = self.mode.commit_key();
        if shift_before != self.mode.shift_active() {
            self.notify_mode_changed();
        }

        self.buffer.insert(&apply_case(key, upper));

        if self.first_key_pending {
            self.first_key_pending = false;
            self.channel.raise_first_key_press();
        }

        self.evaluate_length();
        true
    }

    /// Handles a non-character button. Returns `false` if the press was
    /// dropped.
    pub fn press_button(&mut self, button: Button) -> bool {
        if !self.is_ready() {
            log::debug!("dropping {button:?}: keyboard not ready");
            return false;
        }

        self.counter.increment();

        match button {
            Button::Space => {
                self.buffer.space();
                self.evaluate_length();
            }
            Button::Delete => {
                self.buffer.backspace();
                self.evaluate_length();
            }
            Button::Shift => {
                self.mode.press_shift(self.clock.now());
                self.notify_mode_changed();
            }
            Button::LayoutSwitch => {
                let layout = self.mode.switch_layout();
                log::debug!("layout switched to {layout:?}");
                self.notify_mode_changed();
            }
            Button::NumbersSpecial => {
                if self.mode.toggle_numbers_special() {
                    self.notify_mode_changed();
                }
            }
            Button::Enter => {
                if self.enter_enabled {
                    log::info!("submitting {} characters", self.buffer.len());
                    self.submitted.emit(&self.buffer.text().to_owned());
                } else {
                    log::debug!(
                        "enter ignored: {} of {} characters",
                        self.buffer.len(),
                        self.config.min_characters
                    );
                }
            }
        }
        true
    }

    /// Sets the selection from the view layer, clamped to the text.
    pub fn select(&mut self, anchor: usize, focus: usize) {
        self.buffer.select(anchor, focus);
    }

    pub fn reset_press_counter(&mut self) {
        self.counter.reset();
    }

    /// Swaps the counter template, e.g. when the host rebinds its label.
    pub fn set_counter_format(&mut self, format: Option<String>) {
        self.config.counter_format = format;
    }

    fn notify_mode_changed(&self) {
        if self.keyboard_mode_changed.subscriber_count() > 0 {
            self.keyboard_mode_changed.emit(&self.view_state());
        }
    }

    fn evaluate_length(&mut self) {
        let len = self.buffer.len();

        self.keys_enabled = len < self.config.max_characters;
        self.channel.raise_keys_state_changed(self.keys_enabled);

        let enter = len >= self.config.min_characters;
        if enter != self.enter_enabled {
            self.enter_enabled = enter;
            self.enter_state_changed.emit(&enter);
        }

        if len >= self.config.max_characters && self.mode.force_clear() {
            self.notify_mode_changed();
        }
    }

    pub fn channel(&self) -> &Rc<KeyChannel> {
        &self.channel
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    /// Config problems found at construction. Each was clamped.
    pub fn diagnostics(&self) -> &[ConfigError] {
        &self.diagnostics
    }

    pub fn press_count_changed(&self) -> &Signal<u32> {
        &self.counter.changed
    }

    pub fn is_shift_active(&self) -> bool {
        self.mode.shift_active()
    }

    pub fn is_caps_lock_active(&self) -> bool {
        self.mode.caps_lock_active()
    }

    pub fn layout(&self) -> Layout {
        self.mode.layout()
    }

    pub fn total_presses(&self) -> u32 {
        self.counter.get()
    }

    pub fn keys_enabled(&self) -> bool {
        self.keys_enabled
    }

    pub fn is_enter_enabled(&self) -> bool {
        self.enter_enabled
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    pub fn counter_text(&self) -> Option<String> {
        self.config
            .counter_format
            .as_deref()
            .map(|template| view::format_counter(template, self.counter.get()))
    }

    pub fn view_state(&self) -> ViewState {
        let layout = self.layout();
        let labels = &self.config.labels;
        ViewState {
            layout,
            shift: view::shift_appearance(
                self.is_shift_active(),
                self.is_caps_lock_active(),
                &self.config.colors,
            ),
            switch_label: view::switch_label(layout, labels).to_owned(),
            numbers_special_visible: view::numbers_special_visible(layout),
            numbers_special_label: view::numbers_special_label(layout, labels).to_owned(),
            keys_enabled: self.keys_enabled,
            enter_enabled: self.enter_enabled,
            counter_text: self.counter_text(),
        }
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            text: self.buffer.text().to_owned(),
            selection: self.buffer.selection(),
            layout: self.layout(),
            shift_active: self.is_shift_active(),
            caps_lock_active: self.is_caps_lock_active(),
            keys_enabled: self.keys_enabled,
            enter_enabled: self.enter_enabled,
            total_presses: self.counter.get(),
        }
    }
}

/// Maps each character to its upper or lower case form, but only where that
/// form is a single character. `ß` stays `ß` rather than growing into `SS`.
fn apply_case(key: &str, upper: bool) -> String {
    key.chars()
        .map(|c| {
            let mapped = if upper {
                single_char(c.to_uppercase())
            } else {
                single_char(c.to_lowercase())
            };
            mapped.unwrap_or(c)
        })
        .collect()
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
