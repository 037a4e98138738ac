//! Ratio-to-colour ramp used to tint the pendulums along the row.

/// 8-bit RGB colour, independent of whatever toolkit ends up drawing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }

    /// Every channel at half intensity, used for bob outlines.
    pub const fn halved(self) -> Self {
        Rgb8 {
            r: self.r / 2,
            g: self.g / 2,
            b: self.b / 2,
        }
    }
}

// Scales a unit channel to 0..=255, truncating like an integer cast.
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Maps `ratio` in `[0, 1]` onto a red -> green -> blue ramp.
///
/// Red falls from 1 to 0 over the first half, green peaks at the midpoint
/// and blue rises from 0 to 1 over the second half. Each channel is clamped
/// to `[0, 1]` before scaling, so ratios outside the unit range saturate.
pub fn color_from_ratio(ratio: f32) -> Rgb8 {
    let r = (1.0 - ratio * 2.0).max(0.0);
    let g = 1.0 - (ratio - 0.5).abs() * 2.0;
    let b = ((ratio - 0.5) * 2.0).max(0.0);

    Rgb8::new(channel(r), channel(g), channel(b))
}
