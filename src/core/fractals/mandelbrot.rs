use crate::core::actions::evaluate_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape::{EscapeSample, escape_sample};
use crate::core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum MandelbrotAlgorithmError {
    ZeroMaxIterations,
}

impl fmt::Display for MandelbrotAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iteration count must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotAlgorithmError {}

/// Self-referential escape-time variant: each pixel iterates `z ↦ z² + p`
/// from `z₀ = 0`, where `p` is the pixel's own plane coordinate.
#[derive(Debug, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    plane_rect: PlaneRect,
    max_iteration_count: u32,
}

impl EscapeAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeSample;
    type Failure = PixelToPlaneError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let p = pixel_to_plane(pixel, self.pixel_rect, self.plane_rect)?;

        Ok(escape_sample(Complex::ZERO, p, self.max_iteration_count))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        plane_rect: PlaneRect,
        max_iteration_count: u32,
    ) -> Result<Self, MandelbrotAlgorithmError> {
        if max_iteration_count == 0 {
            return Err(MandelbrotAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            plane_rect,
            max_iteration_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_rects() -> (PixelRect, PlaneRect) {
        let pixel_rect =
            PixelRect::new(Point { x: 0, y: 0 }, Point { x: 100, y: 100 }).unwrap();
        let plane_rect =
            PlaneRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        (pixel_rect, plane_rect)
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        let (pixel_rect, plane_rect) = create_rects();

        let algorithm = MandelbrotAlgorithm::new(pixel_rect, plane_rect, 0);

        assert_eq!(
            algorithm.unwrap_err(),
            MandelbrotAlgorithmError::ZeroMaxIterations
        );
    }

    #[test]
    fn test_plane_origin_is_interior() {
        let (pixel_rect, plane_rect) = create_rects();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, plane_rect, 500).unwrap();

        // The center pixel maps to the plane origin, a fixed point of the
        // iteration.
        let sample = algorithm.compute(Point { x: 50, y: 50 }).unwrap();

        assert_eq!(sample, EscapeSample::Interior);
    }

    #[test]
    fn test_corner_pixel_escapes() {
        let (pixel_rect, plane_rect) = create_rects();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, plane_rect, 100).unwrap();

        // (2, 2) lies far outside the set.
        let sample = algorithm.compute(Point { x: 100, y: 0 }).unwrap();

        assert!(matches!(sample, EscapeSample::Escaped { .. }));
    }

    #[test]
    fn test_compute_returns_error_for_pixel_outside_rect() {
        let (pixel_rect, plane_rect) = create_rects();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, plane_rect, 100).unwrap();
        let point = Point { x: 101, y: 0 };

        let result = algorithm.compute(point);

        assert_eq!(
            result,
            Err(PixelToPlaneError::PointOutsideRect { point, pixel_rect })
        );
    }
}
