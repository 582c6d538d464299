use crate::core::actions::shade_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape::EscapeSample;
use crate::core::palette::cosine_palette::PaletteCoeffs;
use std::error::Error;

/// Shades smooth escape values through the cosine palette.
///
/// `t = (ν / max_iteration_count)^colour_exponent * colour_cycles²`; the
/// exponent compresses the ramp near the set boundary, the squared cycle
/// count stretches how many palette periods span the iteration range.
/// Interior points get a fixed black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothColourMap {
    palette: PaletteCoeffs,
    max_iteration_count: u32,
    colour_exponent: f32,
    colour_cycles_squared: f32,
}

impl ColourMap<EscapeSample> for SmoothColourMap {
    fn map(&self, sample: EscapeSample) -> Result<Colour, Box<dyn Error>> {
        match sample {
            EscapeSample::Interior => Ok(Colour::BLACK),
            EscapeSample::Escaped { nu } => {
                // ν dips fractionally below zero for orbits that start
                // outside the escape radius; clamp before the fractional
                // power.
                let normalised =
                    (nu / f64::from(self.max_iteration_count)).max(0.0) as f32;
                let t = normalised.powf(self.colour_exponent) * self.colour_cycles_squared;

                Ok(self.palette.sample(t))
            }
        }
    }
}

impl SmoothColourMap {
    #[must_use]
    pub fn new(
        palette: PaletteCoeffs,
        max_iteration_count: u32,
        colour_exponent: f32,
        colour_cycles_squared: f32,
    ) -> Self {
        Self {
            palette,
            max_iteration_count,
            colour_exponent,
            colour_cycles_squared,
        }
    }
}
