use std::error::Error;
use std::path::Path;
use std::time::Instant;

use crate::core::actions::evaluate_frame::evaluate_frame_parallel::evaluate_frame_parallel;
use crate::core::actions::shade_frame::shade_frame::shade_frame;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::MandelbrotAlgorithm;
use crate::core::palette::cosine_palette::CosinePalette;
use crate::core::params::frame_params::{
    DEFAULT_COLOUR_CYCLES, DEFAULT_COLOUR_EXPONENT, DEFAULT_MAX_ITERATION_COUNT, FrameParams,
};
use crate::core::viewport::Viewport;
use crate::storage::write_ppm::write_ppm;

const SNAPSHOT_WIDTH: u32 = 1280;
const SNAPSHOT_HEIGHT: u32 = 720;

/// Renders the canonical Mandelbrot view headlessly and writes it as a PPM
/// image. Exercises the same evaluator pipeline the GUI drives per frame.
pub fn render_snapshot(filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let pixel_rect = PixelRect::from_window_size(SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT)?;
    let viewport = Viewport::new(FractalKinds::Mandelbrot, pixel_rect.aspect_ratio());

    let params = FrameParams {
        plane: viewport.plane_rect()?,
        julia: false,
        c: Complex::ZERO,
        max_iteration_count: DEFAULT_MAX_ITERATION_COUNT,
        colour_exponent: DEFAULT_COLOUR_EXPONENT,
        colour_cycles_squared: DEFAULT_COLOUR_CYCLES * DEFAULT_COLOUR_CYCLES,
        palette: CosinePalette::default().coeffs(0.0),
    };

    let algorithm =
        MandelbrotAlgorithm::new(pixel_rect, params.plane, params.max_iteration_count)?;

    log::info!(
        "rendering {}x{} snapshot, {} iterations",
        SNAPSHOT_WIDTH,
        SNAPSHOT_HEIGHT,
        params.max_iteration_count
    );

    let start = Instant::now();
    let samples = evaluate_frame_parallel(pixel_rect, &algorithm)?;
    log::info!("evaluated in {:?}", start.elapsed());

    let pixel_buffer = shade_frame(samples, &params.colour_map(), pixel_rect)?;
    write_ppm(pixel_buffer, filepath.as_ref())?;

    log::info!("saved to {}", filepath.as_ref().display());
    Ok(())
}
