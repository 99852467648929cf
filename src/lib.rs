pub mod buffer;
pub mod channel;
pub mod config;
pub mod controller;
pub mod counter;
pub mod error;
pub mod key;
pub mod keyboard;
pub mod mode;
pub mod signal;
pub mod traits;
pub mod types;
pub mod view;
pub mod widgets;

pub use crate::buffer::OutputBuffer;
pub use crate::channel::KeyChannel;
pub use crate::config::{KeyboardConfig, Labels};
pub use crate::controller::{ControllerSnapshot, KeyboardBuilder, KeyboardController};
pub use crate::counter::PressCounter;
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::key::{Button, InputEvent};
pub use crate::keyboard::Keyboard;
pub use crate::mode::{ModeFlags, ModeState};
pub use crate::signal::{Signal, SubscriptionId};
pub use crate::traits::{Clock, SystemClock};
pub use crate::types::{Color, KeyColors, Layout, Selection, ShiftAppearance, ShiftSprite};
pub use crate::view::ViewState;
