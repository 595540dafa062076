use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Timelike};

use super::segment::{Direction, format_segment};

/// Snapshot of the wall clock taken on every time tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// Current second, 0-59.
    pub seconds: u32,
    /// Current minute, 0-59.
    pub minutes: u32,
    /// Full timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Full English weekday name.
    pub weekday: String,
}

impl ClockReading {
    /// Reads the local system clock.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Builds a reading from any timezone-aware instant.
    pub fn from_datetime<Tz>(instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            seconds: instant.second(),
            minutes: instant.minute(),
            timestamp: instant.format("%Y-%m-%d %H:%M:%S").to_string(),
            weekday: instant.format("%A").to_string(),
        }
    }

    /// Renders the five-line ring display.
    ///
    /// The middle line is the real timestamp; the lines around it show the
    /// seconds two and one steps away, and the minutes one step away.
    pub fn ring_text(&self) -> String {
        let seconds = i64::from(self.seconds);
        let minutes = i64::from(self.minutes);
        let seg = format_segment;

        format!(
            "{}\n{}:{}\n{}\n{}    {}:{}\n{}",
            seg(seconds, 2, Direction::Backward),
            seg(minutes, 1, Direction::Backward),
            seg(seconds, 1, Direction::Backward),
            self.timestamp,
            self.weekday,
            seg(minutes, 1, Direction::Forward),
            seg(seconds, 1, Direction::Forward),
            seg(seconds, 2, Direction::Forward),
        )
    }
}
