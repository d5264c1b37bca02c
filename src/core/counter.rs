use std::time::Duration;

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Parse a `data-count` value the way `parseInt(v, 10)` does: optional
/// leading whitespace and sign, then as many digits as are present.
/// Trailing text ("250+", "99%") is ignored.
pub fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let n: i64 = rest[..digits].parse().ok()?;
    Some(if neg { -n } else { n })
}

/// Count-up from zero to `target` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: i64,
    pub duration: Duration,
}

/// What a counter should show on a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            duration: COUNTER_DURATION,
        }
    }

    /// Displayed value after `elapsed`. Intermediate frames show the floor of
    /// linear progress, the final frame shows exactly `target`.
    pub fn frame_at(&self, elapsed: Duration) -> CounterFrame {
        if self.target <= 0 || elapsed >= self.duration || self.duration.is_zero() {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = ((self.target as f64) * progress).floor() as i64;
        if value >= self.target {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        CounterFrame {
            value: value.max(0),
            done: false,
        }
    }
}
