use super::rgba::{Rgba, unit_to_byte};

const FULL_TURN: f64 = 360.0;
const SECTOR_WIDTH: f64 = 60.0;

/// Animation state for the rainbow effect.
///
/// The hue moves by `speed` degrees per color tick and always stays in
/// `[0, 360)`. Saturation, lightness and alpha are fixed for the lifetime of
/// the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueState {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f64,
    /// Degrees added per tick. May be negative.
    pub speed: f64,
    /// Saturation, `[0, 1]`.
    pub saturation: f64,
    /// Lightness, `[0, 1]`.
    pub lightness: f64,
    /// Alpha, `[0, 1]`.
    pub alpha: f64,
}

impl Default for HueState {
    fn default() -> Self {
        Self {
            hue: 0.0,
            speed: 1.0,
            saturation: 1.0,
            lightness: 0.5,
            alpha: 0.8,
        }
    }
}

impl HueState {
    /// Moves the hue forward by one tick.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            hue: normalize(self.hue + self.speed),
            ..self
        }
    }

    /// Converts the current hue to an RGBA color.
    pub fn to_color(&self) -> Rgba {
        let hue = normalize(self.hue);
        let saturation = self.saturation.clamp(0.0, 1.0);
        let lightness = self.lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let secondary = chroma * (1.0 - ((hue / SECTOR_WIDTH) % 2.0 - 1.0).abs());
        let offset = lightness - chroma / 2.0;

        let (red, green, blue) = match sector_of(hue) {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        Rgba::new(
            unit_to_byte(red + offset),
            unit_to_byte(green + offset),
            unit_to_byte(blue + offset),
            unit_to_byte(self.alpha),
        )
    }
}

fn normalize(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Index of the half-open 60° sector containing `hue`, 0 through 5.
pub(crate) fn sector_of(hue: f64) -> usize {
    ((normalize(hue) / SECTOR_WIDTH) as usize).min(5)
}
