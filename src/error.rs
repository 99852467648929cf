use thiserror::Error;

/// Problems found in a [`KeyboardConfig`](crate::KeyboardConfig).
///
/// Apart from [`ConfigError::Parse`] these are diagnostics: the keyboard
/// clamps the offending value and keeps running.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("min_characters ({min}) exceeds max_characters ({max}); clamping min to {max}")]
    MinExceedsMax { min: usize, max: usize },
    #[error("shift_double_click_delay must be a finite, non-negative number of seconds, got {0}")]
    InvalidDoubleTapDelay(f32),
    #[error("failed to parse keyboard config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
