use std::str::FromStr;

use thiserror::Error;

/// Which way a ring segment is shifted from the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Later value, written as `"+"`.
    Forward,
    /// Earlier value, written as `"-"`.
    Backward,
}

/// Returned when a direction string is neither `"+"` nor `"-"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown segment direction '{0}', expected '+' or '-'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Direction::Forward),
            "-" => Ok(Direction::Backward),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Shifts a seconds or minutes value by one or two steps and renders it as
/// two digits.
///
/// `value` must lie in `[0, 60]` and `offset` in `{1, 2}`; anything else
/// produces an empty string so the caller shows a blank segment. The shifted
/// value is wrapped into `[0, 60)` with a single add or subtract of 60.
///
/// ```
/// use ringclock::clock::{Direction, format_segment};
///
/// assert_eq!(format_segment(5, 2, Direction::Backward), "03");
/// assert_eq!(format_segment(59, 1, Direction::Forward), "00");
/// ```
pub fn format_segment(value: i64, offset: i64, direction: Direction) -> String {
    if !(1..=2).contains(&offset) || !(0..=60).contains(&value) {
        return String::new();
    }

    let shifted = match direction {
        Direction::Forward => value + offset,
        Direction::Backward => value - offset,
    };

    let wrapped = if shifted < 0 {
        shifted + 60
    } else if shifted >= 60 {
        shifted - 60
    } else {
        shifted
    };

    format!("{wrapped:02}")
}

/// String-keyed form of [`format_segment`].
///
/// An unknown direction yields an empty string, same as any other invalid input.
pub fn format_signed(value: i64, offset: i64, direction: &str) -> String {
    direction
        .parse::<Direction>()
        .map(|direction| format_segment(value, offset, direction))
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(format_signed(5, 2, "-"), "03");
        assert_eq!(format_signed(1, 2, "-"), "59");
        assert_eq!(format_signed(59, 1, "+"), "00");
        assert_eq!(format_signed(0, 1, "-"), "59");
        assert_eq!(format_signed(3, 1, "+"), "04");
    }

    #[test]
    fn upper_boundary_wraps_forward() {
        assert_eq!(format_signed(59, 2, "+"), "01");
        assert_eq!(format_signed(60, 1, "+"), "01");
        assert_eq!(format_signed(60, 2, "-"), "58");
        assert_eq!(format_signed(0, 2, "-"), "58");
    }

    #[test]
    fn two_digit_values_are_not_padded() {
        assert_eq!(format_signed(30, 1, "+"), "31");
        assert_eq!(format_signed(11, 1, "-"), "10");
        assert_eq!(format_signed(10, 1, "-"), "09");
    }

    #[test]
    fn invalid_offset_yields_empty() {
        assert_eq!(format_signed(10, 0, "+"), "");
        assert_eq!(format_signed(10, 3, "-"), "");
        assert_eq!(format_signed(10, -1, "+"), "");
    }

    #[test]
    fn out_of_range_value_yields_empty() {
        assert_eq!(format_signed(-1, 1, "+"), "");
        assert_eq!(format_signed(61, 1, "-"), "");
        assert_eq!(format_signed(i64::MAX, 2, "+"), "");
    }

    #[test]
    fn unknown_direction_yields_empty() {
        assert_eq!(format_signed(10, 1, "*"), "");
        assert_eq!(format_signed(10, 1, ""), "");
        assert_eq!(format_signed(10, 1, "++"), "");
    }

    #[test]
    fn direction_parse_rejects_garbage() {
        assert_eq!("+".parse::<Direction>(), Ok(Direction::Forward));
        assert_eq!("-".parse::<Direction>(), Ok(Direction::Backward));
        assert!("x".parse::<Direction>().is_err());
    }

    #[test]
    fn forward_then_backward_recovers_value() {
        for value in 0..60 {
            for offset in 1..=2 {
                let forward = format_segment(value, offset, Direction::Forward);
                let shifted: i64 = forward.parse().unwrap();
                let back = format_segment(shifted, offset, Direction::Backward);

                assert_eq!(back, format!("{value:02}"), "value {value} offset {offset}");
            }
        }
    }
}
