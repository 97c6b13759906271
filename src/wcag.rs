//! WCAG 2 relative luminance, contrast ratio and conformance levels.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use std::fmt;

use bitflags::bitflags;

use crate::{hex, math::weighted_sum, Component, Components, Result, Rgb};

/// Red, green and blue weights of the relative luminance.
const LUMINANCE_WEIGHTS: Components = Components(0.2126, 0.7152, 0.0722);

/// Minimum contrast ratio for each level.
const AAA_CONTRAST: Component = 7.0;
const AA_CONTRAST: Component = 4.5;
const AA_LARGE_CONTRAST: Component = 3.0;

bitflags! {
    /// The kinds of text a contrast ratio is readable for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Passes : u8 {
        /// Large text, 18pt or 14pt bold and up.
        const LARGE_TEXT = 1 << 0;
        /// Body text.
        const NORMAL_TEXT = 1 << 1;
    }
}

/// A WCAG conformance level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Below 3:1, not readable.
    Fail,
    /// At least 3:1, only readable as large text.
    AaLargeOnly,
    /// At least 4.5:1.
    Aa,
    /// At least 7:1.
    Aaa,
}

impl Level {
    /// Classify a contrast ratio. Every threshold is inclusive.
    pub fn from_contrast(contrast: Component) -> Self {
        if contrast >= AAA_CONTRAST {
            Level::Aaa
        } else if contrast >= AA_CONTRAST {
            Level::Aa
        } else if contrast >= AA_LARGE_CONTRAST {
            Level::AaLargeOnly
        } else {
            Level::Fail
        }
    }

    /// The kinds of text readable at this level.
    pub fn passes(&self) -> Passes {
        match self {
            Level::Aaa | Level::Aa => Passes::all(),
            Level::AaLargeOnly => Passes::LARGE_TEXT,
            Level::Fail => Passes::empty(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Aaa => "AAA",
            Level::Aa => "AA",
            Level::AaLargeOnly => "AA-large-only",
            Level::Fail => "FAIL",
        })
    }
}

/// How readable one color is on top of another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccessibilityResult {
    /// Contrast ratio in `[1, 21]`.
    pub contrast_ratio: Component,
    /// The highest level reached.
    pub level: Level,
    /// The kinds of text that are readable.
    pub passes: Passes,
}

impl AccessibilityResult {
    /// Classify the given contrast ratio.
    pub fn from_contrast(contrast_ratio: Component) -> Self {
        let level = Level::from_contrast(contrast_ratio);
        Self {
            contrast_ratio,
            level,
            passes: level.passes(),
        }
    }

    /// Readable as large text.
    pub fn passes_large(&self) -> bool {
        self.passes.contains(Passes::LARGE_TEXT)
    }

    /// Readable as body text.
    pub fn passes_normal(&self) -> bool {
        self.passes.contains(Passes::NORMAL_TEXT)
    }
}

impl Rgb {
    /// The relative luminance of this color, 0 for black and 1 for white.
    pub fn luminance(&self) -> Component {
        let linear = self.to_unit_components().map(|v| {
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        });
        weighted_sum(&linear, &LUMINANCE_WEIGHTS)
    }

    /// The contrast ratio between this color and `other`. The order of the
    /// two colors does not matter.
    pub fn contrast(&self, other: &Rgb) -> Component {
        let (a, b) = (self.luminance(), other.luminance());
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }
}

/// The relative luminance of a `#RRGGBB` color.
pub fn luminance(hex: &str) -> Result<Component> {
    Ok(hex::parse(hex)?.luminance())
}

/// The contrast ratio between two `#RRGGBB` colors.
pub fn contrast(a: &str, b: &str) -> Result<Component> {
    Ok(hex::parse(a)?.contrast(&hex::parse(b)?))
}

/// Classify a contrast ratio.
pub fn accessibility_level(contrast: Component) -> AccessibilityResult {
    AccessibilityResult::from_contrast(contrast)
}

/// Evaluate `foreground` drawn on `background`.
pub fn evaluate(foreground: &str, background: &str) -> Result<AccessibilityResult> {
    contrast(foreground, background).map(AccessibilityResult::from_contrast)
}
