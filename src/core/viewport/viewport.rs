use crate::core::data::complex::Complex;
use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Plane width of the canonical view after a reset.
pub const HOME_ZOOM_WIDTH: f64 = 5.0;

/// Per-notch wheel zoom factor. Zooming out uses the reciprocal so a
/// notch in followed by a notch out restores the original width.
const ZOOM_STEP: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The visible window into the complex plane.
///
/// `width_zoom` is the user's chosen zoom level; `width` is the effective
/// width actually rendered, which the zoom envelope may override for a frame.
/// `min`/`max` are derived from `center` and `width` and recomputed every
/// frame via [`Viewport::refresh_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Complex,
    width_zoom: f64,
    width: f64,
    min: Complex,
    max: Complex,
}

impl Viewport {
    #[must_use]
    pub fn new(kind: FractalKinds, aspect_ratio: f64) -> Self {
        let mut viewport = Self {
            center: kind.home_center(),
            width_zoom: HOME_ZOOM_WIDTH,
            width: HOME_ZOOM_WIDTH,
            min: Complex::ZERO,
            max: Complex::ZERO,
        };
        viewport.refresh_bounds(aspect_ratio);
        viewport
    }

    /// Restores the canonical view for the given fractal variant.
    pub fn reset(&mut self, kind: FractalKinds, aspect_ratio: f64) {
        self.center = kind.home_center();
        self.width_zoom = HOME_ZOOM_WIDTH;
        self.width = HOME_ZOOM_WIDTH;
        self.refresh_bounds(aspect_ratio);
    }

    /// Overrides the effective width for this frame (zoom envelope).
    pub fn set_effective_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Recomputes `min`/`max` from the center and effective width. The
    /// imaginary extent is scaled by the window aspect ratio so plane units
    /// stay square on screen.
    pub fn refresh_bounds(&mut self, aspect_ratio: f64) {
        let half_width = 0.5 * self.width;
        let half_height = half_width / aspect_ratio;

        self.min = Complex::new(self.center.real - half_width, self.center.imag - half_height);
        self.max = Complex::new(self.center.real + half_width, self.center.imag + half_height);
    }

    /// Shifts the view by a pointer drag of `(delta_x, delta_y)` window
    /// pixels. Screen down is plane-up, hence the sign flip on y.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64, window_pixel_width: f64) {
        let coeff = self.width / window_pixel_width;
        let shift = Complex::new(-coeff * delta_x, coeff * delta_y);

        self.center = self.center + shift;
        self.min = self.min + shift;
        self.max = self.max + shift;
    }

    /// Zooms around the plane point under the pointer, keeping it fixed on
    /// screen. `pointer` and `window` are in window-pixel space.
    pub fn zoom_at(
        &mut self,
        pointer: (f64, f64),
        window: (f64, f64),
        direction: ZoomDirection,
    ) {
        let rel_x = pointer.0 / window.0;
        let rel_y = 1.0 - pointer.1 / window.1;

        let extent = self.max - self.min;
        let mouse_pos = self.min + Complex::new(rel_x * extent.real, rel_y * extent.imag);

        let coeff = match direction {
            ZoomDirection::In => ZOOM_STEP,
            ZoomDirection::Out => 1.0 / ZOOM_STEP,
        };

        self.min = self.min
            + Complex::new(
                (1.0 - coeff) * (mouse_pos.real - self.min.real),
                (1.0 - coeff) * (mouse_pos.imag - self.min.imag),
            );
        self.max = self.max
            + Complex::new(
                (1.0 - coeff) * (mouse_pos.real - self.max.real),
                (1.0 - coeff) * (mouse_pos.imag - self.max.imag),
            );

        self.width_zoom *= coeff;
        self.center = Complex::new(
            0.5 * (self.min.real + self.max.real),
            0.5 * (self.min.imag + self.max.imag),
        );
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn width_zoom(&self) -> f64 {
        self.width_zoom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    pub fn plane_rect(&self) -> Result<PlaneRect, PlaneRectError> {
        PlaneRect::new(self.min, self.max)
    }
}
