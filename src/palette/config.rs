//! Tunable parameters for palette generation.
//!
//! The defaults produce the classic palettes; a configuration can also be
//! loaded from JSON, where every missing field takes its default:
//!
//! ```rust
//! use tinct::PaletteConfig;
//! let config = PaletteConfig::from_json(r#"{ "count": 8, "jitter": 4 }"#)?;
//! assert_eq!(config.count, 8);
//! assert_eq!(config.analogous_step, 30.0);
//! # Ok::<(), tinct::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    math::{clamp, lerp},
    Component, Error, Result,
};

/// A closed range of percentages or degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound, inclusive.
    pub min: Component,
    /// Upper bound, inclusive.
    pub max: Component,
}

impl Bounds {
    /// Create new bounds.
    pub const fn new(min: Component, max: Component) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into these bounds.
    pub fn clamp(&self, value: Component) -> Component {
        clamp(value, self.min, self.max)
    }

    /// The value at `t` between `min` (0) and `max` (1).
    pub fn lerp(&self, t: Component) -> Component {
        lerp(self.min, self.max, t)
    }

    /// Returns true if `value` lies within these bounds.
    pub fn contains(&self, value: Component) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// The bounds must be ordered and fit inside `[0, 100]`.
    fn validate_percentages(&self, component: &'static str) -> Result<()> {
        for value in [self.min, self.max] {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidRange { component, value });
            }
        }
        if self.min > self.max {
            return Err(Error::InvalidRange {
                component,
                value: self.min,
            });
        }
        Ok(())
    }
}

/// Parameters shared by the palette strategies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of colors generated when no count is given.
    pub count: usize,
    /// Degrees between neighbouring hues of an analogous palette.
    pub analogous_step: Component,
    /// Maximum random offset, in percentage points, added to saturation and
    /// lightness.
    pub jitter: Component,
    /// Allowed saturation of jittered and triad colors.
    pub saturation: Bounds,
    /// Allowed lightness of jittered and triad colors.
    pub lightness: Bounds,
    /// Lightness of the darkest and lightest color of a monochrome palette.
    pub monochrome_lightness: Bounds,
    /// Saturation offset of triad variations.
    pub triad_saturation_offset: Component,
    /// Lightness offset of triad variations.
    pub triad_lightness_offset: Component,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            count: 5,
            analogous_step: 30.0,
            jitter: 10.0,
            saturation: Bounds::new(30.0, 100.0),
            lightness: Bounds::new(20.0, 80.0),
            monochrome_lightness: Bounds::new(10.0, 90.0),
            triad_saturation_offset: 15.0,
            triad_lightness_offset: 10.0,
        }
    }
}

impl PaletteConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter can produce valid colors.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidCount { count: self.count });
        }

        for (component, value) in [
            ("analogous step", self.analogous_step),
            ("jitter", self.jitter),
            ("triad saturation offset", self.triad_saturation_offset),
            ("triad lightness offset", self.triad_lightness_offset),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidRange { component, value });
            }
        }
        if self.jitter < 0.0 {
            return Err(Error::InvalidRange {
                component: "jitter",
                value: self.jitter,
            });
        }

        self.saturation.validate_percentages("saturation bounds")?;
        self.lightness.validate_percentages("lightness bounds")?;
        self.monochrome_lightness
            .validate_percentages("monochrome lightness bounds")
    }
}
