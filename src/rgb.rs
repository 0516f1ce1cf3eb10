//! Model a color with red, green and blue components.

use std::ops::{Add, Mul};

use crate::{
    hsv::{Hsv, HUE_UNDEFINED},
    math, Component,
};

/// A color specified with red, green and blue components, each nominally in
/// the range [0, 1].
///
/// Out of range components are never rejected; arithmetic on colors clamps
/// its results to the upper bound instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) components.
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from 8-bit channel values, mapping [0, 255] onto
    /// [0, 1].
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// Create a color from a packed `0xRRGGBB` integer. Bits above the low
    /// 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        Self::from_bytes(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Return the 8-bit channel values of this color, truncating
    /// `255 * component` toward zero.
    ///
    /// This is purely multiplicative; components outside [0, 1] are not
    /// clamped here. Clamping belongs to the arithmetic operations.
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        (
            (255.0 * self.red) as u8,
            (255.0 * self.green) as u8,
            (255.0 * self.blue) as u8,
        )
    }

    /// Convert this color to its HSV representation.
    ///
    /// Achromatic colors (all channels equal, including black) have no
    /// meaningful hue and come back with [`HUE_UNDEFINED`].
    pub fn to_hsv(&self) -> Hsv {
        let Self { red, green, blue } = *self;

        let min = math::min([red, green, blue]);
        let max = math::max([red, green, blue]);
        let delta = max - min;

        let value = max;
        if max == 0.0 {
            // Black. Saturation is zero and hue is undefined.
            return Hsv::new(HUE_UNDEFINED, 0.0, 0.0);
        }

        let saturation = delta / max;
        if delta == 0.0 {
            // Pure grey. Guarded so the sector selection below cannot
            // divide by zero.
            return Hsv::new(HUE_UNDEFINED, saturation, value);
        }

        let hue = if red == max {
            (green - blue) / delta // between yellow and magenta
        } else if green == max {
            2.0 + (blue - red) / delta // between cyan and yellow
        } else {
            4.0 + (red - green) / delta // between magenta and cyan
        };

        let hue = hue * 60.0; // degrees
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        Hsv::new(hue, saturation, value)
    }
}

/// Scale each component by `ratio`, with `ratio` clamped to at most 1.0
/// first. There is no lower clamp; negative ratios pass through.
impl Mul<Component> for Rgb {
    type Output = Self;

    fn mul(self, ratio: Component) -> Self {
        let ratio = ratio.min(1.0);
        Self::new(self.red * ratio, self.green * ratio, self.blue * ratio)
    }
}

/// Add the colors component-wise, clamping each resulting channel to at
/// most 1.0. Only the upper bound is enforced.
impl Add for Rgb {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            math::min([self.red + other.red, 1.0]),
            math::min([self.green + other.green, 1.0]),
            math::min([self.blue + other.blue, 1.0]),
        )
    }
}
