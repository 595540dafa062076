//! Clock readings and the ring display built around them.

mod reading;
mod segment;

pub use reading::ClockReading;
pub use segment::{Direction, ParseDirectionError, format_segment, format_signed};
