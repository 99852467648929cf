//! Widgets that sit next to the keyboard in a scene: timing push-buttons
//! and sliders.

pub mod intervals;
pub mod slider;
pub mod stopwatch;

pub use intervals::PressIntervalTracker;
pub use slider::{STANDSTILL_DELAY, Slider, format_value, wheel_value};
pub use stopwatch::{Stopwatch, StopwatchState, format_time};
