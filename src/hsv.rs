//! Model a color with the HSV (hue, saturation, value) notation.

use std::ops::{Add, Mul};

use crate::{math, Component, Rgb};

/// The hue assigned to achromatic colors, for which no hue is meaningful.
///
/// The literal `-1.0` is part of the published contract: conversion from an
/// achromatic RGB color stores it in [`Hsv::hue`] as-is, and arithmetic
/// treats it like any other number. It is never validated on construction.
pub const HUE_UNDEFINED: Component = -1.0;

/// A color specified with the HSV notation. Hue is measured in degrees,
/// nominally in [0, 360); saturation and value are nominally in [0, 1].
///
/// Components are taken at face value on construction; only conversion from
/// RGB guarantees a canonical hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue component of the color, in degrees.
    pub hue: Component,
    /// The saturation component of the color.
    pub saturation: Component,
    /// The value (brightness) component of the color.
    pub value: Component,
}

impl Hsv {
    /// Create a new color with HSV (hue, saturation, value) components.
    pub fn new(hue: Component, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert this color to its RGB representation.
    ///
    /// A zero saturation means achromatic: all three channels take the
    /// value component and the hue is ignored entirely, sentinel or not.
    pub fn to_rgb(&self) -> Rgb {
        let Self {
            hue,
            saturation,
            value,
        } = *self;

        if saturation == 0.0 {
            // Achromatic (grey).
            return Rgb::new(value, value, value);
        }

        let hue = hue / 60.0; // sector 0 to 5
        let sector = hue.floor();
        let fraction = hue - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        match sector as i32 {
            0 => Rgb::new(value, t, p),
            1 => Rgb::new(q, value, p),
            2 => Rgb::new(p, value, t),
            3 => Rgb::new(p, q, value),
            4 => Rgb::new(t, p, value),
            // Sector 5, and hue == 360 falling through as sector 6.
            _ => Rgb::new(value, p, q),
        }
    }
}

/// Scale all three components by `ratio`, with `ratio` clamped to at most
/// 1.0 first. The hue angle is scaled like the others and is not
/// renormalized afterwards.
impl Mul<Component> for Hsv {
    type Output = Self;

    fn mul(self, ratio: Component) -> Self {
        let ratio = ratio.min(1.0);
        Self::new(
            self.hue * ratio,
            self.saturation * ratio,
            self.value * ratio,
        )
    }
}

/// Add the colors component-wise. The hue sum wraps by a single -360 when
/// it exceeds 360 (not a full modulo); saturation and value are each
/// clamped to at most 1.0.
impl Add for Hsv {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut hue = self.hue + other.hue;
        if hue > 360.0 {
            hue -= 360.0;
        }
        Self::new(
            hue,
            math::min([self.saturation + other.saturation, 1.0]),
            math::min([self.value + other.value, 1.0]),
        )
    }
}
