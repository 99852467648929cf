use std::time::Duration;

/// Measures the time between presses of different buttons.
///
/// Only a change of button produces an interval. Pressing the same button
/// twice restarts the measurement instead of reporting the gap between the
/// two presses.
#[derive(Debug, Clone, Default)]
pub struct PressIntervalTracker {
    last: Option<(String, Duration)>,
}

impl PressIntervalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press of `button` at `now`.
    ///
    /// Returns the time since the previous press if that press came from a
    /// different button. Repeated presses of one button only move the
    /// reference point.
    pub fn record(&mut self, button: &str, now: Duration) -> Option<Duration> {
        let interval = match &self.last {
            Some((prev, at)) if prev != button => {
                let dt = now.saturating_sub(*at);
                log::info!(
                    "time between {prev} and {button}: {:.2} seconds",
                    dt.as_secs_f32()
                );
                Some(dt)
            }
            _ => None,
        };
        self.last = Some((button.to_owned(), now));
        interval
    }

    pub fn last_button(&self) -> Option<&str> {
        self.last.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn reset(&mut self) {
        self.last = None;
        log::info!("press interval measurements reset");
    }
}
