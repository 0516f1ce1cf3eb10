//! Linear interpolation between colors.

use num_traits::Float;

use crate::{Component, Hsv, Rgb};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

impl Rgb {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        Self::new(
            lerp(self.red, other.red, t),
            lerp(self.green, other.green, t),
            lerp(self.blue, other.blue, t),
        )
    }
}

impl Hsv {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them.
    ///
    /// All three components are interpolated numerically; the hue does not
    /// take the short way around the circle.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        Self::new(
            lerp(self.hue, other.hue, t),
            lerp(self.saturation, other.saturation, t),
            lerp(self.value, other.value, t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic() {
        let left = Rgb::new(0.1, 0.2, 0.3);
        let right = Rgb::new(0.5, 0.6, 0.7);
        let mixed = left.interpolate(&right, 0.5);
        assert_component_eq!(mixed.red, 0.3);
        assert_component_eq!(mixed.green, 0.4);
        assert_component_eq!(mixed.blue, 0.5);
    }

    #[test]
    fn endpoints() {
        let left = Rgb::new(0.1, 0.2, 0.3);
        let right = Rgb::new(0.5, 0.6, 0.7);
        assert_eq!(left.interpolate(&right, 0.0), left);

        let at_one = left.interpolate(&right, 1.0);
        assert_component_eq!(at_one.red, right.red);
        assert_component_eq!(at_one.green, right.green);
        assert_component_eq!(at_one.blue, right.blue);
    }

    #[test]
    fn hsv_interpolates_the_hue_numerically() {
        let left = Hsv::new(350.0, 1.0, 1.0);
        let right = Hsv::new(10.0, 1.0, 1.0);
        let mixed = left.interpolate(&right, 0.5);
        assert_component_eq!(mixed.hue, 180.0);
    }
}
