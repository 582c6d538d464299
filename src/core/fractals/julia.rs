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
pub enum JuliaAlgorithmError {
    ZeroMaxIterations,
}

impl fmt::Display for JuliaAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iteration count must be greater than zero")
            }
        }
    }
}

impl Error for JuliaAlgorithmError {}

/// Externally-parametrized escape-time variant: each pixel iterates
/// `z ↦ z² + c` starting from its own plane coordinate, with `c` shared by
/// the whole frame.
#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    pixel_rect: PixelRect,
    plane_rect: PlaneRect,
    c: Complex,
    max_iteration_count: u32,
}

impl EscapeAlgorithm for JuliaAlgorithm {
    type Success = EscapeSample;
    type Failure = PixelToPlaneError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z_start = pixel_to_plane(pixel, self.pixel_rect, self.plane_rect)?;

        Ok(escape_sample(z_start, self.c, self.max_iteration_count))
    }
}

impl JuliaAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        plane_rect: PlaneRect,
        c: Complex,
        max_iteration_count: u32,
    ) -> Result<Self, JuliaAlgorithmError> {
        if max_iteration_count == 0 {
            return Err(JuliaAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            plane_rect,
            c,
            max_iteration_count,
        })
    }
}
