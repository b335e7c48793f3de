use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// A time-of-day slot key in `HH:MM` form (24-hour, zero padded).
///
/// Ordering is chronological, which for this fixed-width format is also the
/// lexicographic order of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeLabel {
    hour: u8,
    minute: u8,
}

impl TimeLabel {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parses a strict `HH:MM` label. `"8:00"`, `"08:0"` and `"24:00"` are all rejected.
    pub fn parse(text: &str) -> Result<Self, LookupError> {
        let invalid = || LookupError::InvalidTimeLabel(text.to_string());

        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }

        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let minute = (digits[2] - b'0') * 10 + (digits[3] - b'0');

        Self::new(hour, minute).ok_or_else(invalid)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeLabel {
    type Err = LookupError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        TimeLabel::parse(text)
    }
}

/// Seconds and sub-seconds are dropped; a picker selecting 08:05:59 yields `08:05`.
impl From<NaiveTime> for TimeLabel {
    fn from(time: NaiveTime) -> Self {
        Self { hour: time.hour() as u8, minute: time.minute() as u8 }
    }
}

impl From<TimeLabel> for NaiveTime {
    fn from(label: TimeLabel) -> Self {
        NaiveTime::from_hms_opt(label.hour as u32, label.minute as u32, 0).unwrap_or_default()
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
