use std::fmt;

use chrono::Duration;

/// Characters typed per second for one correctly answered word.
///
/// Not clamped: an elapsed time of zero yields an infinite speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypingSpeed(f64);

impl TypingSpeed {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_elapsed(chars: usize, elapsed: Duration) -> Self {
        let seconds = elapsed.num_microseconds().map_or_else(
            || elapsed.num_milliseconds() as f64 / 1_000.0,
            |micros| micros as f64 / 1_000_000.0,
        );
        Self(chars as f64 / seconds)
    }

    #[must_use]
    pub fn chars_per_second(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for TypingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} char/s", self.0)
    }
}
