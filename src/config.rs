use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::mode::DEFAULT_DOUBLE_TAP_WINDOW;
use crate::types::KeyColors;

/// Text shown on the layout buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Switch button label while a numbers or special layout is showing.
    pub switch_to_numbers: String,
    /// Switch button label while the letters layout is showing.
    pub switch_to_letters: String,
    /// Numbers/special toggle label while the special layout is showing.
    pub numbers: String,
    /// Numbers/special toggle label while the numbers layout is showing.
    pub special: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            switch_to_numbers: "Numbers".to_string(),
            switch_to_letters: "Letters".to_string(),
            numbers: "Numbers".to_string(),
            special: "Special".to_string(),
        }
    }
}

/// Construction-time keyboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Start with one-shot shift armed.
    pub auto_caps_at_start: bool,
    /// Enter stays disabled below this length.
    pub min_characters: usize,
    /// Hard cap on the output length.
    pub max_characters: usize,
    /// Seconds in which a second shift tap turns on caps lock.
    pub shift_double_click_delay: f32,
    /// Press counter template, `{0}` is replaced by the count.
    /// `None` when the host has no counter text to render into.
    pub counter_format: Option<String>,
    pub colors: KeyColors,
    pub labels: Labels,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            auto_caps_at_start: true,
            min_characters: 3,
            max_characters: 15,
            shift_double_click_delay: DEFAULT_DOUBLE_TAP_WINDOW.as_secs_f32(),
            counter_format: Some("Presses: {0}".to_string()),
            colors: KeyColors::default(),
            labels: Labels::default(),
        }
    }
}

impl KeyboardConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a copy with invalid values clamped, plus one diagnostic per
    /// clamped value.
    pub fn sanitize(&self) -> (Self, Vec<ConfigError>) {
        let mut cfg = self.clone();
        let mut diagnostics = Vec::new();

        if cfg.min_characters > cfg.max_characters {
            diagnostics.push(ConfigError::MinExceedsMax {
                min: cfg.min_characters,
                max: cfg.max_characters,
            });
            cfg.min_characters = cfg.max_characters;
        }

        let delay = cfg.shift_double_click_delay;
        if !delay.is_finite() || delay < 0.0 {
            diagnostics.push(ConfigError::InvalidDoubleTapDelay(delay));
            cfg.shift_double_click_delay = DEFAULT_DOUBLE_TAP_WINDOW.as_secs_f32();
        }

        (cfg, diagnostics)
    }

    /// The double-tap window. Assumes a sanitized config.
    pub fn double_tap_window(&self) -> Duration {
        Duration::try_from_secs_f32(self.shift_double_click_delay)
            .unwrap_or(DEFAULT_DOUBLE_TAP_WINDOW)
    }
}
