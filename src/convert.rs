//! Conversions between the RGB, hex and HSL forms of a color.
//!
//! Conversions on the models ([`Rgb::to_hsl`], [`Hsl::to_rgb`]) are full
//! precision and round trip exactly. The free functions mirror the
//! presentation used by color pickers: HSL values are rounded to whole
//! degrees and percentages, hex strings are uppercase.
//!
//! ```rust
//! use tinct::{hex_to_hsl, hsl_to_hex};
//! let hsl = hex_to_hsl("#d2691e")?;
//! assert_eq!(hsl.to_tuple(), (25.0, 75.0, 47.0));
//! assert_eq!(hsl_to_hex(hsl.hue, hsl.saturation, hsl.lightness)?, "#D2691E");
//! # Ok::<(), tinct::Error>(())
//! ```

use crate::{hex, Component, Components, Hsl, Result, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation without any rounding.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) =
            util::rgb_to_hsl(&self.to_unit_components());
        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit sRGB. Saturation
    /// and lightness are expected in `[0, 100]`, see [`Hsl::checked`].
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) = util::hsl_to_rgb(&Components(
            self.hue,
            self.saturation / 100.0,
            self.lightness / 100.0,
        ));
        Rgb::new(to_byte(red), to_byte(green), to_byte(blue))
    }

    /// Convert this color to an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

fn to_byte(value: Component) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a `#RRGGBB` string into its channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    hex::parse(hex)
}

/// Format channels as `#RRGGBB`, clamping each into `[0, 255]` first.
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> String {
    Rgb::clamped(red, green, blue).to_hex()
}

/// Convert a `#RRGGBB` string to HSL, rounded to whole units.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(hex::parse(hex)?.to_hsl().round())
}

/// Convert channels to HSL, rounded to whole units.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    Rgb::new(red, green, blue).to_hsl().round()
}

/// Convert HSL to an uppercase `#RRGGBB` string. Any finite hue is
/// accepted; saturation and lightness must lie in `[0, 100]`.
pub fn hsl_to_hex(hue: Component, saturation: Component, lightness: Component) -> Result<String> {
    Ok(Hsl::new(hue, saturation, lightness).checked()?.to_hex())
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, clamp, normalize_hue},
    };

    /// Convert from RGB to HSL. Input channels and the output saturation and
    /// lightness are in `[0, 1]`, the hue is in degrees. Colors without
    /// chroma get a hue and saturation of 0.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if almost_zero(delta) {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components(normalize_hue(hue * 60.0), saturation, lightness)
    }

    /// Convert from HSL to RGB. Saturation, lightness and the output
    /// channels are in `[0, 1]`, the hue is in degrees.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;
        let hue = normalize_hue(hue);
        let a = saturation * lightness.min(1.0 - lightness);

        let f = |n: Component| {
            let k = (n + hue / 30.0).rem_euclid(12.0);
            lightness - a * clamp((k - 3.0).min(9.0 - k), -1.0, 1.0)
        };

        Components(f(0.0), f(8.0), f(4.0))
    }
}
