//! Palette generation from a single base color.
//!
//! Every strategy is a pure function of its inputs and a [`RandomSource`].
//! Pass a [`FixedSequence`] to make the random strategies reproducible:
//!
//! ```rust
//! use tinct::palette::{self, FixedSequence};
//! // A draw of 0.5 adds no jitter.
//! let colors = palette::analogous("#1976D2", 5, &mut FixedSequence::new([0.5]))?;
//! assert_eq!(colors.len(), 5);
//! assert_eq!(colors[2], "#1975D2");
//! # Ok::<(), tinct::Error>(())
//! ```

use serde::Serialize;

use crate::{hex, math::normalize_hue, Component, Error, Hsl, Result, Rgb};

mod config;
mod mood;
mod random;
mod strategy;

pub use config::{Bounds, PaletteConfig};
pub use mood::{Mood, MoodProfile};
pub use random::{FixedSequence, RandomSource, RngSource};
pub use strategy::Strategy;

/// An ordered list of colors generated by one strategy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    /// The strategy that produced the colors.
    pub strategy: Strategy,
    /// Uppercase `#RRGGBB` colors.
    pub colors: Vec<String>,
}

impl Palette {
    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if there are no colors, which generated palettes never
    /// are.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Generates palettes using a random source and a configuration.
#[derive(Clone, Debug)]
pub struct PaletteGenerator<S> {
    source: S,
    config: PaletteConfig,
}

impl<S: RandomSource> PaletteGenerator<S> {
    /// Create a generator with the default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: PaletteConfig::default(),
        }
    }

    /// Create a generator with the given configuration.
    pub fn with_config(source: S, config: PaletteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Give back the random source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Generate `config.count` colors with the given strategy. The base
    /// color is not read by mood strategies.
    pub fn generate(&mut self, strategy: Strategy, base: &str) -> Result<Palette> {
        let count = self.config.count;
        let colors = match strategy {
            Strategy::Analogous => self.analogous(base, count)?,
            Strategy::Monochrome => self.monochrome(base, count)?,
            Strategy::Triad => self.triad(base, count)?,
            Strategy::Complementary => self.complementary(base, count)?,
            Strategy::Mood(mood) => self.by_mood(mood, count)?,
        };
        Ok(Palette { strategy, colors })
    }

    /// Hues stepping around the base hue, centered on it, with jittered
    /// saturation and lightness.
    pub fn analogous(&mut self, base: &str, count: usize) -> Result<Vec<String>> {
        let (_, base_hsl) = prepare(base, count)?;
        let center = (count / 2) as Component;

        let colors = (0..count)
            .map(|i| {
                let hue = base_hsl.hue + (i as Component - center) * self.config.analogous_step;
                let saturation = base_hsl.saturation + self.jitter();
                let lightness = base_hsl.lightness + self.jitter();
                self.bounded(hue, saturation, lightness)
            })
            .collect::<Result<Vec<_>>>()?;

        trace_palette(Strategy::Analogous, base, &colors);
        Ok(colors)
    }

    /// The base hue and saturation with lightness stepping evenly from dark
    /// to light. A single color palette is the base color itself.
    pub fn monochrome(&mut self, base: &str, count: usize) -> Result<Vec<String>> {
        let (base_rgb, base_hsl) = prepare(base, count)?;

        let colors = if count == 1 {
            vec![base_rgb.to_hex()]
        } else {
            let range = self.config.monochrome_lightness;
            let step = (range.max - range.min) / (count - 1) as Component;
            (0..count)
                .map(|i| {
                    let lightness = range.min + i as Component * step;
                    to_hex(Hsl::new(base_hsl.hue, base_hsl.saturation, lightness))
                })
                .collect::<Result<Vec<_>>>()?
        };

        trace_palette(Strategy::Monochrome, base, &colors);
        Ok(colors)
    }

    /// The base color followed by colors cycling through the three triad
    /// hues, alternately desaturated and lightened, then saturated and
    /// darkened, every full cycle.
    pub fn triad(&mut self, base: &str, count: usize) -> Result<Vec<String>> {
        let (base_rgb, base_hsl) = prepare(base, count)?;
        let hues = [0.0, 120.0, 240.0].map(|offset| normalize_hue(base_hsl.hue + offset));

        let mut colors = Vec::with_capacity(count);
        colors.push(base_rgb.to_hex());
        for i in 1..count {
            let sign = if (i / 3) % 2 == 0 { 1.0 } else { -1.0 };
            let saturation = base_hsl.saturation - sign * self.config.triad_saturation_offset;
            let lightness = base_hsl.lightness + sign * self.config.triad_lightness_offset;
            colors.push(self.bounded(hues[i % 3], saturation, lightness)?);
        }

        trace_palette(Strategy::Triad, base, &colors);
        Ok(colors)
    }

    /// The base color followed by jittered colors alternating between the
    /// complementary hue and the base hue.
    pub fn complementary(&mut self, base: &str, count: usize) -> Result<Vec<String>> {
        let (base_rgb, base_hsl) = prepare(base, count)?;
        let opposite = normalize_hue(base_hsl.hue + 180.0);

        let mut colors = Vec::with_capacity(count);
        colors.push(base_rgb.to_hex());
        for i in 1..count {
            let hue = if i % 2 == 1 { opposite } else { base_hsl.hue };
            let saturation = base_hsl.saturation + self.jitter();
            let lightness = base_hsl.lightness + self.jitter();
            colors.push(self.bounded(hue, saturation, lightness)?);
        }

        trace_palette(Strategy::Complementary, base, &colors);
        Ok(colors)
    }

    /// Independent colors drawn uniformly from the ranges of a mood.
    pub fn by_mood(&mut self, mood: Mood, count: usize) -> Result<Vec<String>> {
        check_count(count)?;
        let profile = mood.profile();

        let colors = (0..count)
            .map(|_| {
                let hue = profile.hue.lerp(self.source.next_uniform());
                let saturation = profile.saturation.lerp(self.source.next_uniform());
                let lightness = profile.lightness.lerp(self.source.next_uniform());
                to_hex(Hsl::new(hue, saturation, lightness))
            })
            .collect::<Result<Vec<_>>>()?;

        trace_palette(Strategy::Mood(mood), mood.name(), &colors);
        Ok(colors)
    }

    /// A uniform offset in `[-jitter, jitter)`.
    fn jitter(&mut self) -> Component {
        (self.source.next_uniform() * 2.0 - 1.0) * self.config.jitter
    }

    /// Clamp saturation and lightness into the configured bounds and convert.
    fn bounded(
        &self,
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> Result<String> {
        to_hex(Hsl::new(
            normalize_hue(hue),
            self.config.saturation.clamp(saturation),
            self.config.lightness.clamp(lightness),
        ))
    }
}

fn check_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::InvalidCount { count });
    }
    Ok(())
}

/// Validate the inputs shared by the base color strategies. The HSL form is
/// rounded to whole units.
fn prepare(base: &str, count: usize) -> Result<(Rgb, Hsl)> {
    let rgb = hex::parse(base)?;
    check_count(count)?;
    Ok((rgb, rgb.to_hsl().round()))
}

fn to_hex(hsl: Hsl) -> Result<String> {
    Ok(hsl.checked()?.to_hex())
}

fn trace_palette(strategy: Strategy, from: &str, colors: &[String]) {
    tracing::trace!(%strategy, from, count = colors.len(), "generated palette");
}

/// Analogous palette of `count` colors around `base`.
pub fn analogous(base: &str, count: usize, source: &mut impl RandomSource) -> Result<Vec<String>> {
    PaletteGenerator::new(source).analogous(base, count)
}

/// Monochrome palette of `count` colors from `base`.
pub fn monochrome(base: &str, count: usize, source: &mut impl RandomSource) -> Result<Vec<String>> {
    PaletteGenerator::new(source).monochrome(base, count)
}

/// Triad palette of `count` colors starting with `base`.
pub fn triad(base: &str, count: usize, source: &mut impl RandomSource) -> Result<Vec<String>> {
    PaletteGenerator::new(source).triad(base, count)
}

/// Complementary palette of `count` colors starting with `base`.
pub fn complementary(
    base: &str,
    count: usize,
    source: &mut impl RandomSource,
) -> Result<Vec<String>> {
    PaletteGenerator::new(source).complementary(base, count)
}

/// Palette of `count` colors for the named mood. Unknown names use calm.
pub fn by_mood(mood: &str, count: usize, source: &mut impl RandomSource) -> Result<Vec<String>> {
    PaletteGenerator::new(source).by_mood(Mood::from_name(mood), count)
}

/// [`analogous`] drawing from the thread-local generator.
pub fn generate_analogous(base: &str, count: usize) -> Result<Vec<String>> {
    analogous(base, count, &mut RngSource::thread())
}

/// [`monochrome`]; it takes no random draws.
pub fn generate_monochrome(base: &str, count: usize) -> Result<Vec<String>> {
    monochrome(base, count, &mut FixedSequence::default())
}

/// [`triad`]; it takes no random draws.
pub fn generate_triad(base: &str, count: usize) -> Result<Vec<String>> {
    triad(base, count, &mut FixedSequence::default())
}

/// [`complementary`] drawing from the thread-local generator.
pub fn generate_complementary(base: &str, count: usize) -> Result<Vec<String>> {
    complementary(base, count, &mut RngSource::thread())
}

/// [`by_mood`] drawing from the thread-local generator.
pub fn generate_by_mood(mood: &str, count: usize) -> Result<Vec<String>> {
    by_mood(mood, count, &mut RngSource::thread())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert::hsl_to_hex, hex_to_hsl};

    fn hsl(h: Component, s: Component, l: Component) -> String {
        hsl_to_hex(h, s, l).unwrap()
    }

    fn centered() -> FixedSequence {
        FixedSequence::new([0.5])
    }

    #[test]
    fn analogous_hues_step_around_the_base() {
        // #1976D2 is hsl(210 79% 46%).
        let colors = analogous("#1976D2", 5, &mut centered()).unwrap();
        assert_eq!(
            colors,
            [150.0, 180.0, 210.0, 240.0, 270.0].map(|h| hsl(h, 79.0, 46.0))
        );
    }

    #[test]
    fn analogous_hues_wrap_around() {
        // Red sits at 0 degrees, so the first two hues are negative.
        let colors = analogous("#FF0000", 5, &mut centered()).unwrap();
        assert_eq!(colors[0], hsl(300.0, 100.0, 50.0));
        assert_eq!(colors[1], hsl(330.0, 100.0, 50.0));
        assert_eq!(colors[4], hsl(60.0, 100.0, 50.0));
    }

    #[test]
    fn analogous_jitter_is_bounded_and_clamped() {
        // A draw of 0 subtracts the full jitter.
        let colors = analogous("#1976D2", 3, &mut FixedSequence::new([0.0])).unwrap();
        assert_eq!(colors[1], hsl(210.0, 69.0, 36.0));

        // A draw just below 1 adds nearly the full jitter; saturation is
        // clamped back to 100.
        let mut source = FixedSequence::new([0.99]);
        let colors = analogous("#FF0000", 1, &mut source).unwrap();
        assert_eq!(colors[0], hsl(0.0, 100.0, 59.8));
        assert_eq!(source.taken(), 2);
    }

    #[test]
    fn analogous_clamps_dark_grays() {
        // #000000 has saturation and lightness 0.
        let colors = analogous("#000000", 1, &mut centered()).unwrap();
        assert_eq!(colors, [hsl(0.0, 30.0, 20.0)]);
    }

    #[test]
    fn monochrome_steps_lightness() {
        let colors = monochrome("#1976D2", 5, &mut centered()).unwrap();
        assert_eq!(
            colors,
            ["#051A2E", "#104D89", "#1B80E4", "#76B3EF", "#D1E6FA"]
        );
        assert_eq!(
            colors,
            [10.0, 30.0, 50.0, 70.0, 90.0].map(|l| hsl(210.0, 79.0, l))
        );
    }

    #[test]
    fn monochrome_single_color_is_the_base() {
        assert_eq!(monochrome("#1976D2", 1, &mut centered()).unwrap(), ["#1976D2"]);
        assert_eq!(monochrome("#1976d2", 1, &mut centered()).unwrap(), ["#1976D2"]);
    }

    #[test]
    fn monochrome_takes_no_draws() {
        let mut source = FixedSequence::new([0.1]);
        monochrome("#1976D2", 12, &mut source).unwrap();
        assert_eq!(source.taken(), 0);
    }

    #[test]
    fn triad_cycles_through_three_hues() {
        let colors = triad("#1976D2", 5, &mut centered()).unwrap();
        assert_eq!(
            colors,
            [
                "#1976D2".to_owned(),
                hsl(330.0, 64.0, 56.0),
                hsl(90.0, 64.0, 56.0),
                hsl(210.0, 94.0, 36.0),
                hsl(330.0, 94.0, 36.0),
            ]
        );
    }

    #[test]
    fn triad_variation_alternates_every_cycle() {
        let colors = triad("#1976D2", 7, &mut centered()).unwrap();
        assert_eq!(colors[5], hsl(90.0, 94.0, 36.0));
        assert_eq!(colors[6], hsl(210.0, 64.0, 56.0));
    }

    #[test]
    fn triad_clamps_to_bounds() {
        // #808080 has no saturation, so the offset of -15 clamps to 30.
        let colors = triad("#808080", 2, &mut centered()).unwrap();
        assert_eq!(colors, ["#808080".to_owned(), hsl(120.0, 30.0, 60.0)]);
    }

    #[test]
    fn complementary_alternates_hues() {
        let colors = complementary("#1976D2", 5, &mut centered()).unwrap();
        assert_eq!(colors[0], "#1976D2");
        assert_eq!(colors[1], hsl(30.0, 79.0, 46.0));
        assert_eq!(colors[2], hsl(210.0, 79.0, 46.0));
        assert_eq!(colors[3], hsl(30.0, 79.0, 46.0));
        assert_eq!(colors[4], hsl(210.0, 79.0, 46.0));
    }

    #[test]
    fn complementary_draws_saturation_then_lightness() {
        let mut source = FixedSequence::new([1.0, 0.0]);
        let colors = complementary("#1976D2", 2, &mut source).unwrap();
        assert_eq!(colors[1], hsl(30.0, 89.0, 36.0));
        assert_eq!(source.taken(), 2);
    }

    #[test]
    fn mood_draws_from_its_ranges() {
        let colors = by_mood("calm", 2, &mut FixedSequence::new([0.0])).unwrap();
        assert_eq!(colors, [hsl(180.0, 30.0, 40.0), hsl(180.0, 30.0, 40.0)]);

        let colors = by_mood("energetic", 1, &mut centered()).unwrap();
        assert_eq!(colors, [hsl(30.0, 85.0, 50.0)]);
    }

    #[test]
    fn mood_draws_hue_saturation_lightness_in_order() {
        let mut source = FixedSequence::new([0.0, 0.5, 1.0]);
        let colors = by_mood("warm", 1, &mut source).unwrap();
        assert_eq!(colors, [hsl(15.0, 70.0, 75.0)]);
        assert_eq!(source.taken(), 3);
    }

    #[test]
    fn unknown_mood_is_calm() {
        let a = by_mood("bewildered", 3, &mut FixedSequence::new([0.2, 0.7])).unwrap();
        let b = by_mood("calm", 3, &mut FixedSequence::new([0.2, 0.7])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mood_colors_stay_in_range() {
        let mut source = RngSource::seeded(42);
        for mood in Mood::ALL {
            let profile = mood.profile();
            for color in PaletteGenerator::new(&mut source).by_mood(mood, 12).unwrap() {
                let hsl = hex_to_hsl(&color).unwrap();
                // Rounding through 8-bit channels moves HSL by a few units.
                assert!(hsl.saturation >= profile.saturation.min - 5.0, "{mood} {color}");
                assert!(hsl.saturation <= profile.saturation.max + 5.0, "{mood} {color}");
                assert!(hsl.lightness >= profile.lightness.min - 1.0, "{mood} {color}");
                assert!(hsl.lightness <= profile.lightness.max + 1.0, "{mood} {color}");
            }
        }
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut source = centered();
        for result in [
            analogous("#1976D2", 0, &mut source),
            monochrome("#1976D2", 0, &mut source),
            triad("#1976D2", 0, &mut source),
            complementary("#1976D2", 0, &mut source),
            by_mood("calm", 0, &mut source),
        ] {
            assert!(matches!(result, Err(Error::InvalidCount { count: 0 })));
        }
    }

    #[test]
    fn malformed_base_is_rejected() {
        let mut source = centered();
        for result in [
            analogous("1976D2", 5, &mut source),
            monochrome("#1976D", 5, &mut source),
            triad("#XYZXYZ", 5, &mut source),
            complementary("", 5, &mut source),
        ] {
            assert!(matches!(result, Err(Error::InvalidHexFormat { .. })));
        }
    }

    #[test]
    fn generate_uses_the_configured_count() {
        let config = PaletteConfig {
            count: 7,
            ..Default::default()
        };
        let mut generator = PaletteGenerator::with_config(centered(), config).unwrap();
        for strategy in Strategy::FROM_BASE {
            let palette = generator.generate(strategy, "#1976D2").unwrap();
            assert_eq!(palette.len(), 7);
            assert_eq!(palette.strategy, strategy);
        }
        let palette = generator
            .generate(Strategy::Mood(Mood::Cool), "ignored")
            .unwrap();
        assert_eq!(palette.len(), 7);
    }

    #[test]
    fn custom_configuration_changes_the_palette() {
        let config = PaletteConfig {
            analogous_step: 15.0,
            ..Default::default()
        };
        let mut generator = PaletteGenerator::with_config(centered(), config).unwrap();
        let colors = generator.analogous("#1976D2", 3).unwrap();
        assert_eq!(colors, [195.0, 210.0, 225.0].map(|h| hsl(h, 79.0, 46.0)));
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let config = PaletteConfig {
            count: 0,
            ..Default::default()
        };
        assert!(PaletteGenerator::with_config(centered(), config).is_err());
    }

    #[test]
    fn palette_serializes_with_strategy_name() {
        let palette = Palette {
            strategy: Strategy::Mood(Mood::Warm),
            colors: vec!["#FFA500".to_owned()],
        };
        assert_eq!(
            serde_json::to_string(&palette).unwrap(),
            r##"{"strategy":"mood:warm","colors":["#FFA500"]}"##
        );
    }

    #[test]
    fn thread_rng_wrappers() {
        assert_eq!(generate_analogous("#1976D2", 5).unwrap().len(), 5);
        assert_eq!(generate_monochrome("#1976D2", 5).unwrap().len(), 5);
        assert_eq!(generate_triad("#1976D2", 5).unwrap().len(), 5);
        assert_eq!(generate_complementary("#1976D2", 5).unwrap().len(), 5);
        assert_eq!(generate_by_mood("natural", 5).unwrap().len(), 5);
    }
}
