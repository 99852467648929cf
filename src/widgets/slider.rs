use std::time::Duration;

use crate::signal::Signal;

/// Moves no larger than this are not a value change.
const VALUE_EPSILON: f32 = 0.001;

/// How long the handle has to rest before its value is logged.
pub const STANDSTILL_DELAY: Duration = Duration::from_millis(500);

/// Value model of a grabbed one-dimensional slider.
///
/// The value lives in `[0, 1]`. The handle travels between `min_position`
/// and `max_position` along the slider's axis; positions fed to
/// [`grab`](Self::grab) and [`drag`](Self::drag) are measured on that
/// same axis. Time is passed in by the host, as with
/// [`Stopwatch`](super::Stopwatch).
pub struct Slider {
    value: f32,
    min_position: f32,
    max_position: f32,
    smoothing: f32,
    value_format: String,
    grabbed_at: Option<f32>,
    standstill: Option<(Duration, f32)>,
    /// Fires with the new value whenever it moves by more than 0.001.
    pub value_changed: Signal<f32>,
}

impl Slider {
    pub fn new(min_position: f32, max_position: f32) -> Self {
        Self {
            value: 0.5,
            min_position,
            max_position,
            smoothing: 8.0,
            value_format: "Value: {0:F3}".to_string(),
            grabbed_at: None,
            standstill: None,
            value_changed: Signal::new(),
        }
    }

    /// Lower is smoother. The default is 8.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Label template, see [`format_value`].
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.value_format = format.into();
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamps `value` to `[0, 1]` and stores it. Returns `false`, without
    /// notifying, if that moves the value by 0.001 or less.
    pub fn set_value(&mut self, value: f32) -> bool {
        let value = value.clamp(0.0, 1.0);
        if (self.value - value).abs() <= VALUE_EPSILON {
            return false;
        }
        self.value = value;
        log::debug!("slider value: {value:.2}");
        self.value_changed.emit(&value);
        true
    }

    /// Sets the value from a wheel angle. Angles outside `[0, 180]` are
    /// ignored.
    pub fn set_from_wheel(&mut self, angle_degrees: f32) -> bool {
        wheel_value(angle_degrees).is_some_and(|v| self.set_value(v))
    }

    /// Handle offset for the current value.
    pub fn handle_position(&self) -> f32 {
        lerp(self.min_position, self.max_position, self.value)
    }

    pub fn label(&self) -> String {
        format_value(&self.value_format, self.value)
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed_at.is_some()
    }

    pub fn grab(&mut self, position: f32) {
        self.grabbed_at = Some(position);
    }

    /// Follows the grabbing hand to `position`, `dt` after the previous
    /// update. Ignored while not grabbed. Returns the value.
    pub fn drag(&mut self, position: f32, dt: Duration, now: Duration) -> f32 {
        let Some(last) = self.grabbed_at else {
            return self.value;
        };
        self.grabbed_at = Some(position);

        let range = self.max_position - self.min_position;
        if range == 0.0 {
            return self.value;
        }
        let target = (self.value + (position - last) / range).clamp(0.0, 1.0);
        let t = (dt.as_secs_f32() * self.smoothing).clamp(0.0, 1.0);
        self.set_value(lerp(self.value, target, t));

        self.standstill = Some((now + STANDSTILL_DELAY, self.value));
        self.value
    }

    /// Lets go of the handle and restarts the standstill timer.
    pub fn release(&mut self, now: Duration) {
        self.grabbed_at = None;
        self.standstill = Some((now + STANDSTILL_DELAY, self.value));
    }

    /// Returns the resting value once the handle has not moved for
    /// [`STANDSTILL_DELAY`]. Each rest is reported once.
    pub fn poll(&mut self, now: Duration) -> Option<f32> {
        match self.standstill {
            Some((due, value)) if now >= due => {
                self.standstill = None;
                log::info!("slider value (standstill): {value:.3}");
                Some(value)
            }
            _ => None,
        }
    }
}

/// Slider value for a wheel turned `angle_degrees` about its axis.
/// Only the first half turn maps onto the slider.
pub fn wheel_value(angle_degrees: f32) -> Option<f32> {
    (0.0..=180.0)
        .contains(&angle_degrees)
        .then(|| angle_degrees / 180.0)
}

/// Renders `template` with `{0}` replaced by `value`.
///
/// `{0:F<n>}` prints `n` decimals, `{0:F}` two. Other placeholders are left
/// as they are.
pub fn format_value(template: &str, value: f32) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{0") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            rest = &rest[start..];
            break;
        };
        let placeholder = &rest[start..start + 3 + end];
        let fmt = &after[..end];
        let rendered = if fmt.is_empty() {
            Some(value.to_string())
        } else {
            fmt.strip_prefix(":F")
                .or_else(|| fmt.strip_prefix(":f"))
                .and_then(|digits| match digits {
                    "" => Some(2),
                    _ => digits.parse::<usize>().ok(),
                })
                .map(|p| format!("{:.*}", p, value))
        };
        out.push_str(rendered.as_deref().unwrap_or(placeholder));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn counted(slider: &Slider) -> Rc<Cell<u32>> {
        let n = Rc::new(Cell::new(0));
        let hits = Rc::clone(&n);
        slider.value_changed.subscribe(move |_| hits.set(hits.get() + 1));
        n
    }

    #[test]
    fn drag_moves_value_by_delta_over_range() {
        let mut s = Slider::new(-0.5, 0.5);
        let changes = counted(&s);

        // Not grabbed yet.
        assert!(close(s.drag(0.3, ms(125), ms(0)), 0.5));

        s.grab(0.0);
        // dt * smoothing = 1, so the value lands on the target.
        assert!(close(s.drag(0.2, ms(125), ms(1_000)), 0.7));
        assert!(close(s.handle_position(), 0.2));

        // Half the way there.
        assert!(close(s.drag(0.4, ms(62), ms(1_062)), 0.7 + 0.2 * 0.496));
        assert_eq!(changes.get(), 2);

        s.drag(10.0, ms(125), ms(1_200));
        assert!(close(s.value(), 1.0));
        assert!(close(s.handle_position(), 0.5));

        let mut slow = Slider::new(0.0, 1.0).with_smoothing(4.0);
        slow.grab(0.0);
        assert!(close(slow.drag(0.2, ms(125), ms(0)), 0.6));
    }

    #[test]
    fn tiny_moves_do_not_notify() {
        let mut s = Slider::new(0.0, 1.0);
        let changes = counted(&s);
        s.grab(0.0);
        s.drag(0.0005, ms(125), ms(0));
        assert!(close(s.value(), 0.5));
        assert_eq!(changes.get(), 0);

        assert!(!s.set_value(0.5009));
        assert!(s.set_value(-3.0));
        assert_eq!(s.value(), 0.0);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn standstill_is_reported_once_after_rest() {
        let mut s = Slider::new(0.0, 1.0);
        s.grab(0.0);
        s.drag(0.1, ms(125), ms(1_000));
        assert_eq!(s.poll(ms(1_400)), None);

        // Moving again restarts the timer.
        s.drag(0.2, ms(125), ms(1_300));
        assert_eq!(s.poll(ms(1_600)), None);
        let rest = s.poll(ms(1_800)).map(|v| close(v, 0.7));
        assert_eq!(rest, Some(true));
        assert_eq!(s.poll(ms(5_000)), None);

        s.release(ms(6_000));
        assert!(!s.is_grabbed());
        assert_eq!(s.poll(ms(6_499)), None);
        assert!(s.poll(ms(6_500)).is_some());
    }

    #[test]
    fn wheel_angle_maps_first_half_turn() {
        assert_eq!(wheel_value(90.0), Some(0.5));
        assert_eq!(wheel_value(180.0), Some(1.0));
        assert_eq!(wheel_value(181.0), None);
        assert_eq!(wheel_value(-1.0), None);

        let mut s = Slider::new(0.0, 1.0);
        assert!(s.set_from_wheel(45.0));
        assert_eq!(s.value(), 0.25);
        assert!(!s.set_from_wheel(270.0));
        assert_eq!(s.value(), 0.25);
    }

    #[test]
    fn labels_follow_format() {
        assert_eq!(format_value("Value: {0:F3}", 0.5), "Value: 0.500");
        assert_eq!(format_value("{0:F}", 0.25), "0.25");
        assert_eq!(format_value("v={0}", 0.5), "v=0.5");
        assert_eq!(format_value("{0:P0} {1}", 0.5), "{0:P0} {1}");
        assert_eq!(format_value("broken {0", 0.5), "broken {0");

        let s = Slider::new(0.0, 1.0).with_format("Level {0:F1}");
        assert_eq!(s.label(), "Level 0.5");
    }
}
