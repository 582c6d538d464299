use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRectError {
    InvalidExtent { width: f64, height: f64 },
}

impl fmt::Display for PlaneRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { width, height } => {
                write!(f, "plane rect extent must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PlaneRectError {}

/// Axis-aligned rectangle in the complex plane.
///
/// `min` is the bottom-left corner (smallest real and imaginary parts),
/// `max` the top-right. Screen space runs top-down, so the top-left screen
/// corner maps to `(min.real, max.imag)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRect {
    min: Complex,
    max: Complex,
}

impl PlaneRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, PlaneRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(PlaneRectError::InvalidExtent { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    /// Screen top-left corner: smallest real part, largest imaginary part.
    #[must_use]
    pub fn top_left(&self) -> Complex {
        Complex::new(self.min.real, self.max.imag)
    }

    /// Screen bottom-right corner: largest real part, smallest imaginary part.
    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        Complex::new(self.max.real, self.min.imag)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    /// Bilinear interpolation of normalized coordinates into the rectangle.
    ///
    /// `rel_x` and `rel_y` of 0 map to `min`, 1 to `max`. The caller is
    /// responsible for flipping the y axis when converting from screen space.
    #[must_use]
    pub fn point_at(&self, rel_x: f64, rel_y: f64) -> Complex {
        Complex::new(
            self.min.real + rel_x * self.width(),
            self.min.imag + rel_y * self.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_rect_new_valid() {
        let min = Complex::new(-2.0, -1.0);
        let max = Complex::new(1.0, 1.0);

        let rect = PlaneRect::new(min, max).unwrap();

        assert_eq!(rect.min(), min);
        assert_eq!(rect.max(), max);
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_plane_rect_extent_must_be_positive() {
        let origin = Complex::ZERO;

        assert_eq!(
            PlaneRect::new(origin, Complex::new(0.0, 1.0)),
            Err(PlaneRectError::InvalidExtent {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            PlaneRect::new(origin, Complex::new(1.0, 0.0)),
            Err(PlaneRectError::InvalidExtent {
                width: 1.0,
                height: 0.0
            })
        );
        assert!(PlaneRect::new(origin, Complex::new(-1.0, -1.0)).is_err());
    }

    #[test]
    fn test_screen_corners() {
        let rect = PlaneRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.5)).unwrap();

        assert_eq!(rect.top_left(), Complex::new(-2.0, 1.5));
        assert_eq!(rect.bottom_right(), Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_point_at_corners_and_center() {
        let rect = PlaneRect::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap();

        assert_eq!(rect.point_at(0.0, 0.0), rect.min());
        assert_eq!(rect.point_at(1.0, 1.0), rect.max());
        assert_eq!(rect.point_at(0.5, 0.5), Complex::ZERO);
    }
}
