//! Model a color with the HSL notation in the sRGB color space.

use crate::{math::normalize_hue, Component, Error, Result};

tinct_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// The hue is an angle in degrees, saturation and lightness are
    /// percentages in `[0, 100]`.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Hsl {
    /// Round each component to the nearest integer, keeping the hue inside
    /// `[0, 360)`.
    pub fn round(&self) -> Self {
        Self::new(
            normalize_hue(self.hue.round()),
            self.saturation.round(),
            self.lightness.round(),
        )
    }

    /// Verify that the color can be converted: the hue must be finite and
    /// saturation and lightness must lie in `[0, 100]`.
    pub fn checked(self) -> Result<Self> {
        if !self.hue.is_finite() {
            return Err(Error::InvalidRange {
                component: "hue",
                value: self.hue,
            });
        }

        for (component, value) in [
            ("saturation", self.saturation),
            ("lightness", self.lightness),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidRange { component, value });
            }
        }

        Ok(self)
    }
}
