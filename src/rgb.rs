//! Model a color in the sRGB color space with 8-bit channels.

use crate::Component;

tinct_macros::gen_model! {
    /// A color specified in the sRGB color space, one byte per channel.
    pub struct Rgb {
        /// The red component of the color.
        red: u8,
        /// The green component of the color.
        green: u8,
        /// The blue component of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Create a color from channel values that may lie outside of
    /// `[0, 255]`, clamping each of them.
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, u8::MAX as i32) as u8;
        Self::new(clamp(red), clamp(green), clamp(blue))
    }

    /// Return the channels scaled to `[0, 1]`.
    pub fn to_unit_components(&self) -> crate::Components {
        let scale = |v: u8| v as Component / u8::MAX as Component;
        crate::Components(scale(self.red), scale(self.green), scale(self.blue))
    }

    /// Returns true if all channels are equal, i.e. the color has no hue.
    pub fn is_achromatic(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}
