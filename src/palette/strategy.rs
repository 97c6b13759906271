//! Naming and selecting a palette strategy.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use super::mood::Mood;
use crate::Error;

/// How a palette is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Neighbouring hues around the base color.
    Analogous,
    /// One hue and saturation, stepped lightness.
    Monochrome,
    /// Three hues evenly spread around the wheel.
    Triad,
    /// The base hue alternating with its opposite.
    Complementary,
    /// Random colors drawn from a mood, ignoring the base color.
    Mood(Mood),
}

impl Strategy {
    /// Every strategy that derives its colors from a base color.
    pub const FROM_BASE: [Strategy; 4] = [
        Strategy::Analogous,
        Strategy::Monochrome,
        Strategy::Triad,
        Strategy::Complementary,
    ];

    /// Returns true if the generated palette depends on the base color.
    pub fn uses_base(&self) -> bool {
        !matches!(self, Strategy::Mood(_))
    }

    /// Returns true if the strategy draws from the random source.
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Strategy::Analogous | Strategy::Complementary | Strategy::Mood(_)
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Analogous => f.write_str("analogous"),
            Strategy::Monochrome => f.write_str("monochrome"),
            Strategy::Triad => f.write_str("triad"),
            Strategy::Complementary => f.write_str("complementary"),
            Strategy::Mood(mood) => write!(f, "mood:{mood}"),
        }
    }
}

/// Accepts the names written by `Display`. `mood` alone selects the default
/// mood, and like [`Mood::from_name`] an unknown mood name selects calm.
impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (name, mood) = match lower.split_once(':') {
            Some((name, mood)) => (name, Some(mood)),
            None => (lower.as_str(), None),
        };

        match (name, mood) {
            ("analogous", None) => Ok(Strategy::Analogous),
            ("monochrome", None) => Ok(Strategy::Monochrome),
            ("triad", None) => Ok(Strategy::Triad),
            ("complementary", None) => Ok(Strategy::Complementary),
            ("mood", mood) => Ok(Strategy::Mood(mood.map(Mood::from_name).unwrap_or_default())),
            _ => Err(Error::UnknownStrategy { name: s.to_owned() }),
        }
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
