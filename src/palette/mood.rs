//! Named presets biasing random palettes towards a feel.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::Bounds;
use crate::Component;

/// The hue, saturation and lightness ranges colors of a mood are drawn
/// from. Hue in degrees, the rest in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodProfile {
    /// Allowed hues.
    pub hue: Bounds,
    /// Allowed saturations.
    pub saturation: Bounds,
    /// Allowed lightnesses.
    pub lightness: Bounds,
}

impl MoodProfile {
    const fn new(
        hue: (Component, Component),
        saturation: (Component, Component),
        lightness: (Component, Component),
    ) -> Self {
        Self {
            hue: Bounds::new(hue.0, hue.1),
            saturation: Bounds::new(saturation.0, saturation.1),
            lightness: Bounds::new(lightness.0, lightness.1),
        }
    }
}

const CALM: MoodProfile = MoodProfile::new((180.0, 240.0), (30.0, 60.0), (40.0, 70.0));
const ENERGETIC: MoodProfile = MoodProfile::new((0.0, 60.0), (70.0, 100.0), (40.0, 60.0));
const PROFESSIONAL: MoodProfile = MoodProfile::new((200.0, 280.0), (20.0, 50.0), (30.0, 60.0));
const NATURAL: MoodProfile = MoodProfile::new((60.0, 150.0), (40.0, 80.0), (30.0, 70.0));
const WARM: MoodProfile = MoodProfile::new((15.0, 45.0), (50.0, 90.0), (45.0, 75.0));
const COOL: MoodProfile = MoodProfile::new((180.0, 270.0), (40.0, 80.0), (35.0, 65.0));

/// A named mood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Quiet blues.
    #[default]
    Calm,
    /// Saturated reds and oranges.
    Energetic,
    /// Muted blues and purples.
    Professional,
    /// Greens.
    Natural,
    /// Oranges and ambers.
    Warm,
    /// Blues and cyans.
    Cool,
}

impl Mood {
    /// Every mood, in table order.
    pub const ALL: [Mood; 6] = [
        Mood::Calm,
        Mood::Energetic,
        Mood::Professional,
        Mood::Natural,
        Mood::Warm,
        Mood::Cool,
    ];

    /// The lowercase name of the mood.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Professional => "professional",
            Mood::Natural => "natural",
            Mood::Warm => "warm",
            Mood::Cool => "cool",
        }
    }

    /// Look up a mood by name, ignoring case. Unknown names fall back to
    /// [`Mood::Calm`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::debug!(mood = name, "unknown mood, falling back to calm");
                Mood::Calm
            })
    }

    /// The ranges colors of this mood are drawn from.
    pub fn profile(&self) -> &'static MoodProfile {
        match self {
            Mood::Calm => &CALM,
            Mood::Energetic => &ENERGETIC,
            Mood::Professional => &PROFESSIONAL,
            Mood::Natural => &NATURAL,
            Mood::Warm => &WARM,
            Mood::Cool => &COOL,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
