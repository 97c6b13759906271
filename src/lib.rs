//! tinct converts colors between hex, RGB and HSL, scores text/background
//! pairs against the WCAG contrast levels and generates palettes from a
//! base color.
//!
//! ```rust
//! use tinct::{contrast, hex_to_hsl, palette, Level};
//!
//! let hsl = hex_to_hsl("#1976D2")?;
//! assert_eq!(hsl.to_tuple(), (210.0, 79.0, 46.0));
//!
//! let ratio = contrast("#1976D2", "#FFFFFF")?;
//! assert_eq!(tinct::accessibility_level(ratio).level, Level::Aa);
//!
//! let shades = palette::generate_monochrome("#1976D2", 5)?;
//! assert_eq!(shades.len(), 5);
//! # Ok::<(), tinct::Error>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hex;
mod hsl;
mod math;
pub mod palette;
mod rgb;
mod wcag;

#[cfg(test)]
mod test;

pub use color::{Component, Components};
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex, rgb_to_hsl};
pub use error::{Error, Result};
pub use hsl::Hsl;
pub use palette::{
    generate_analogous, generate_by_mood, generate_complementary, generate_monochrome,
    generate_triad, Mood, Palette, PaletteConfig, PaletteGenerator, RandomSource, Strategy,
};
pub use rgb::Rgb;
pub use wcag::{accessibility_level, contrast, evaluate, luminance, AccessibilityResult, Level, Passes};
