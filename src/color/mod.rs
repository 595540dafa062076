//! Colors and the rainbow hue animation.

mod hue;
mod rgba;

pub use hue::HueState;
pub use rgba::Rgba;
