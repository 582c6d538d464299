use crate::controllers::interactive::data::frame_request::FrameRequest;
use crate::core::animation::AnimationState;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_rect::PlaneRectError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palette::cosine_palette::CosinePalette;
use crate::core::params::frame_params::{
    DEFAULT_COLOUR_CYCLES, DEFAULT_COLOUR_EXPONENT, DEFAULT_MAX_ITERATION_COUNT, FrameParams,
};
use crate::core::params::julia_constant::JuliaConstant;
use crate::core::viewport::Viewport;
use std::sync::Arc;

/// The live parameter state shared between the panels and the frame loop.
///
/// The panels mutate it directly; once per frame [`Self::advance_frame`]
/// folds animation into it and [`Self::build_frame_request`] freezes it into
/// an immutable snapshot for the render worker.
pub struct ExplorerState {
    pub fractal: FractalKinds,
    pub viewport: Viewport,
    pub julia_constant: JuliaConstant,
    pub max_iteration_count: u32,
    pub colour_exponent: f32,
    pub colour_cycles: f32,
    pub palette: CosinePalette,
    pub animation: AnimationState,
    /// Composed Julia constant with the orbit offset, refreshed every frame.
    c: Complex,
    last_submitted_request: Option<Arc<FrameRequest>>,
    pub latest_submitted_generation: u64,
}

impl ExplorerState {
    #[must_use]
    pub fn new(aspect_ratio: f64) -> Self {
        let fractal = FractalKinds::default();

        Self {
            fractal,
            viewport: Viewport::new(fractal, aspect_ratio),
            julia_constant: JuliaConstant::default(),
            max_iteration_count: DEFAULT_MAX_ITERATION_COUNT,
            colour_exponent: DEFAULT_COLOUR_EXPONENT,
            colour_cycles: DEFAULT_COLOUR_CYCLES,
            palette: CosinePalette::default(),
            animation: AnimationState::default(),
            c: Complex::ZERO,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }

    /// Switches the fractal variant and returns the view to that variant's
    /// canonical frame.
    pub fn select_fractal(&mut self, kind: FractalKinds, aspect_ratio: f64) {
        if self.fractal != kind {
            self.fractal = kind;
            self.viewport.reset(kind, aspect_ratio);
        }
    }

    pub fn reset_zoom(&mut self, aspect_ratio: f64) {
        self.viewport.reset(self.fractal, aspect_ratio);
    }

    /// Per-frame state update: advance animation accumulators, apply the
    /// zoom envelope, recompose the Julia constant and recompute the view
    /// bounds.
    pub fn advance_frame(&mut self, delta: f64, aspect_ratio: f64) {
        self.animation.advance(delta);

        let effective_width = self
            .animation
            .zoom
            .effective_width(self.viewport.width_zoom());
        self.viewport.set_effective_width(effective_width);

        self.c = self.julia_constant.compose() + self.animation.orbit.offset(effective_width);

        self.viewport.refresh_bounds(aspect_ratio);
    }

    /// The Julia constant as rendered this frame, for the info panel.
    #[must_use]
    pub fn julia_c(&self) -> Complex {
        self.c
    }

    pub fn build_frame_request(
        &self,
        pixel_rect: PixelRect,
        elapsed: f64,
    ) -> Result<FrameRequest, PlaneRectError> {
        let phase_drift = self.animation.palette_phase_drift(elapsed);

        Ok(FrameRequest {
            pixel_rect,
            params: FrameParams {
                plane: self.viewport.plane_rect()?,
                julia: self.fractal == FractalKinds::Julia,
                c: self.c,
                max_iteration_count: self.max_iteration_count,
                colour_exponent: self.colour_exponent,
                colour_cycles_squared: self.colour_cycles * self.colour_cycles,
                palette: self.palette.coeffs(phase_drift),
            },
        })
    }

    #[must_use]
    pub fn should_submit(&self, request: &FrameRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<FrameRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }
}
