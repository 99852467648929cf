use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchState {
    #[default]
    Reset,
    Running,
    Stopped,
}

/// Single-button stopwatch: press to start, press to stop, press to reset.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    name: String,
    state: StopwatchState,
    accumulated: Duration,
    started_at: Option<Duration>,
}

impl Stopwatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: StopwatchState::Reset,
            accumulated: Duration::ZERO,
            started_at: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    /// Advances to the next state and returns it.
    pub fn press(&mut self, now: Duration) -> StopwatchState {
        self.state = match self.state {
            StopwatchState::Reset => {
                self.started_at = Some(now);
                log::info!("[{}] timer started", self.name);
                StopwatchState::Running
            }
            StopwatchState::Running => {
                self.accumulated = self.elapsed(now);
                self.started_at = None;
                log::info!(
                    "[{}] timer stopped at {}",
                    self.name,
                    format_time(self.accumulated)
                );
                StopwatchState::Stopped
            }
            StopwatchState::Stopped => {
                self.accumulated = Duration::ZERO;
                log::info!("[{}] timer reset", self.name);
                StopwatchState::Reset
            }
        };
        self.state
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.started_at {
            Some(start) => self.accumulated + now.saturating_sub(start),
            None => self.accumulated,
        }
    }

    pub fn display(&self, now: Duration) -> String {
        format!("{}: {}", self.name, format_time(self.elapsed(now)))
    }
}

/// `MM:SS.cc` with hundredths of a second.
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    let centis = d.subsec_millis() / 10;
    format!("{:02}:{:02}.{:02}", secs / 60, secs % 60, centis)
}
