use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// Timestamp layout for generated records (ISO-8601, microseconds, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Source of record creation times. Successive calls never go backwards.
pub trait Clock {
    fn now(&mut self) -> NaiveDateTime;

    fn now_formatted(&mut self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Wall clock in UTC, clamped to be non-decreasing.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Option<NaiveDateTime>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> NaiveDateTime {
        let now = Utc::now().naive_utc();
        let now = match self.last {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last = Some(now);
        now
    }
}

/// Deterministic clock advancing by a fixed step per call.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: NaiveDateTime,
    step: TimeDelta,
}

impl FixedClock {
    pub fn new(start: NaiveDateTime, step: TimeDelta) -> Self {
        Self {
            current: start,
            step,
        }
    }

    /// Starts at 2024-01-01T00:00:00 and advances one second per call.
    pub fn from_base_date() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Self::new(start, TimeDelta::seconds(1))
    }
}

impl Clock for FixedClock {
    fn now(&mut self) -> NaiveDateTime {
        let now = self.current;
        self.current = self
            .current
            .checked_add_signed(self.step)
            .unwrap_or(self.current);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_formats_with_microseconds() {
        let mut clock = FixedClock::from_base_date();
        assert_eq!(clock.now_formatted(), "2024-01-01T00:00:00.000000");
        assert_eq!(clock.now_formatted(), "2024-01-01T00:00:01.000000");
    }

    #[test]
    fn system_clock_is_non_decreasing() {
        let mut clock = SystemClock::new();
        let mut previous = clock.now();
        for _ in 0..100 {
            let next = clock.now();
            assert!(next >= previous);
            previous = next;
        }
    }
}
