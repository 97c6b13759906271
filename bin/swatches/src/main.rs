//! Render the palettes of every strategy for a base color to a PNG, one row
//! per strategy.
//!
//! ```sh
//! tinct-swatches '#1976D2' palettes.png
//! ```

use image::{Rgb as Pixel, RgbImage};
use tinct::{palette::RngSource, Mood, PaletteGenerator, Rgb, Strategy};
use tracing_subscriber::EnvFilter;

const SWATCH_SIZE: u32 = 80;
const COUNT: usize = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base = args.next().unwrap_or_else(|| "#1976D2".to_owned());
    let out = args.next().unwrap_or_else(|| "palettes.png".to_owned());

    let config = tinct::PaletteConfig {
        count: COUNT,
        ..Default::default()
    };
    let mut generator = PaletteGenerator::with_config(RngSource::thread(), config)?;

    let strategies = Strategy::FROM_BASE
        .into_iter()
        .chain(Mood::ALL.map(Strategy::Mood))
        .collect::<Vec<_>>();

    let mut img = RgbImage::new(SWATCH_SIZE * COUNT as u32, SWATCH_SIZE * strategies.len() as u32);

    for (row, strategy) in strategies.iter().enumerate() {
        let palette = generator.generate(*strategy, &base)?;

        for (column, hex) in palette.colors.iter().enumerate() {
            let color: Rgb = hex.parse()?;
            let on_white = color.contrast(&Rgb::new(255, 255, 255));
            let on_black = color.contrast(&Rgb::new(0, 0, 0));
            tracing::info!(
                %strategy,
                color = %hex,
                on_white = %tinct::accessibility_level(on_white).level,
                on_black = %tinct::accessibility_level(on_black).level,
                "swatch"
            );

            let (x0, y0) = (column as u32 * SWATCH_SIZE, row as u32 * SWATCH_SIZE);
            for y in y0..y0 + SWATCH_SIZE {
                for x in x0..x0 + SWATCH_SIZE {
                    img.put_pixel(x, y, Pixel([color.red, color.green, color.blue]));
                }
            }
        }
    }

    img.save(&out)?;
    tracing::info!(path = %out, rows = strategies.len(), "wrote palettes");

    Ok(())
}
