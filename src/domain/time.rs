//! Wall-clock time of day
//!
//! All slot math runs on [`TimeOfDay`], a minutes-since-midnight value.
//! 12-hour `"hh:mm AM|PM"` labels exist only at the API boundary; they are
//! parsed once on the way in and formatted once on the way out.

use std::fmt;

use chrono::{NaiveTime, Timelike};

use super::error::{DomainError, DomainResult};

/// Minutes in a full day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time within a single day, stored as minutes since midnight.
///
/// Ordering and arithmetic stay within `0..1440`; [`TimeOfDay::add_minutes`]
/// wraps across midnight, which is how `23:00 + 60min` becomes `12:00 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from minutes since midnight. Values outside `0..1440` are rejected.
    pub fn from_minutes(minutes: u32) -> DomainResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(DomainError::Validation(format!(
                "time of day out of range: {} minutes",
                minutes
            )));
        }
        Ok(Self(minutes))
    }

    /// Build from a whole hour (`0..=23`).
    pub fn from_hour(hour: u32) -> DomainResult<Self> {
        Self::from_minutes(hour * 60)
    }

    /// Parse a 12-hour label such as `"09:15 AM"` or `"11:00 PM"`.
    pub fn parse_label(label: &str) -> DomainResult<Self> {
        let t = NaiveTime::parse_from_str(label.trim(), "%I:%M %p")
            .map_err(|_| DomainError::InvalidTimeLabel(label.to_string()))?;
        Ok(Self::from_naive(t))
    }

    /// Parse a 24-hour `"HH:MM"` string.
    pub fn parse_hhmm(s: &str) -> DomainResult<Self> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| DomainError::InvalidTimeLabel(s.to_string()))?;
        Ok(Self::from_naive(t))
    }

    /// Convert from a chrono time, dropping seconds.
    pub fn from_naive(t: NaiveTime) -> Self {
        Self(t.hour() * 60 + t.minute())
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Add a duration, wrapping across midnight.
    pub fn add_minutes(self, minutes: u32) -> Self {
        Self((self.0 + minutes) % MINUTES_PER_DAY)
    }

    /// 12-hour display label, zero-padded, e.g. `"09:00 AM"`, `"12:00 AM"`.
    pub fn label_12h(self) -> String {
        let (hour24, minute) = (self.hour(), self.minute());
        let period = if hour24 >= 12 { "PM" } else { "AM" };
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", hour12, minute, period)
    }

    /// 24-hour `"HH:MM"` string.
    pub fn hhmm(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label_12h())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_morning_and_evening() {
        assert_eq!(TimeOfDay::parse_label("09:15 AM").unwrap().0, 9 * 60 + 15);
        assert_eq!(TimeOfDay::parse_label("11:00 PM").unwrap().0, 23 * 60);
        assert_eq!(TimeOfDay::parse_label("12:00 AM").unwrap().0, 0);
        assert_eq!(TimeOfDay::parse_label("12:30 PM").unwrap().0, 12 * 60 + 30);
    }

    #[test]
    fn test_parse_label_rejects_garbage() {
        assert!(TimeOfDay::parse_label("25:00 AM").is_err());
        assert!(TimeOfDay::parse_label("nine o'clock").is_err());
        assert!(TimeOfDay::parse_label("").is_err());
    }

    #[test]
    fn test_label_roundtrip() {
        for label in ["12:00 AM", "01:05 AM", "11:59 AM", "12:00 PM", "11:00 PM"] {
            let t = TimeOfDay::parse_label(label).unwrap();
            assert_eq!(t.label_12h(), label);
        }
    }

    #[test]
    fn test_add_minutes_wraps_at_midnight() {
        let eleven_pm = TimeOfDay::from_hour(23).unwrap();
        let end = eleven_pm.add_minutes(60);
        assert_eq!(end, TimeOfDay::MIDNIGHT);
        assert_eq!(end.label_12h(), "12:00 AM");
    }

    #[test]
    fn test_from_minutes_bounds() {
        assert!(TimeOfDay::from_minutes(1439).is_ok());
        assert!(TimeOfDay::from_minutes(1440).is_err());
    }

    #[test]
    fn test_hhmm_parse_and_format() {
        let t = TimeOfDay::parse_hhmm("22:10").unwrap();
        assert_eq!(t.hour(), 22);
        assert_eq!(t.minute(), 10);
        assert_eq!(t.hhmm(), "22:10");
    }
}
