use crate::ports::clock::Clock;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::Mutex;

/// Mock implementation of Clock
///
/// Returns a fixed instant that only moves when told to.
/// Keeps transaction timestamps deterministic in tests.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Pin the clock to a new instant
    pub fn set(&self, instant: NaiveDateTime) {
        *self.now.lock().unwrap() = instant;
    }
}

impl Default for FixedClock {
    /// 2025-03-25 12:00:00
    fn default() -> Self {
        let noon = NaiveDate::from_ymd_opt(2025, 3, 25)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap_or_default();
        Self::new(noon)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_does_not_move_on_its_own() {
        let clock = FixedClock::default();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_string(), "2025-03-25 12:00:00");
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::default();
        let before = clock.now();
        clock.advance(Duration::minutes(5));
        assert_eq!(clock.now() - before, Duration::minutes(5));
    }
}
