use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fractalscope::core::actions::evaluate_frame::evaluate_frame_parallel::evaluate_frame_parallel;
use fractalscope::core::actions::evaluate_frame::evaluate_frame_serial::evaluate_frame_serial;
use fractalscope::core::actions::shade_frame::shade_frame::shade_frame;
use fractalscope::core::data::complex::Complex;
use fractalscope::core::data::pixel_rect::PixelRect;
use fractalscope::core::fractals::fractal_kinds::FractalKinds;
use fractalscope::core::fractals::mandelbrot::MandelbrotAlgorithm;
use fractalscope::core::palette::cosine_palette::CosinePalette;
use fractalscope::core::params::frame_params::{
    DEFAULT_COLOUR_CYCLES, DEFAULT_COLOUR_EXPONENT, DEFAULT_MAX_ITERATION_COUNT, FrameParams,
};
use fractalscope::core::viewport::Viewport;

fn home_view(width: u32, height: u32) -> (PixelRect, FrameParams, MandelbrotAlgorithm) {
    let pixel_rect = PixelRect::from_window_size(width, height).expect("bench rect is valid");
    let viewport = Viewport::new(FractalKinds::Mandelbrot, pixel_rect.aspect_ratio());

    let params = FrameParams {
        plane: viewport.plane_rect().expect("bench plane is valid"),
        julia: false,
        c: Complex::ZERO,
        max_iteration_count: DEFAULT_MAX_ITERATION_COUNT,
        colour_exponent: DEFAULT_COLOUR_EXPONENT,
        colour_cycles_squared: DEFAULT_COLOUR_CYCLES * DEFAULT_COLOUR_CYCLES,
        palette: CosinePalette::default().coeffs(0.0),
    };

    let algorithm = MandelbrotAlgorithm::new(pixel_rect, params.plane, params.max_iteration_count)
        .expect("bench algorithm params are valid");

    (pixel_rect, params, algorithm)
}

fn bench_evaluate_frame(c: &mut Criterion) {
    let (pixel_rect, params, algorithm) = home_view(256, 256);

    c.bench_function("evaluate_frame_serial_256", |b| {
        b.iter(|| {
            let samples =
                evaluate_frame_serial(black_box(pixel_rect), &algorithm).expect("evaluation");
            shade_frame(samples, &params.colour_map(), pixel_rect).expect("shading")
        })
    });

    c.bench_function("evaluate_frame_parallel_256", |b| {
        b.iter(|| {
            let samples =
                evaluate_frame_parallel(black_box(pixel_rect), &algorithm).expect("evaluation");
            shade_frame(samples, &params.colour_map(), pixel_rect).expect("shading")
        })
    });
}

criterion_group!(benches, bench_evaluate_frame);
criterion_main!(benches);
