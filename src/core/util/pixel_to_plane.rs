use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToPlaneError {}

/// Maps a pixel position to its complex-plane coordinate.
///
/// Screen space runs top-down while the imaginary axis runs bottom-up, so
/// pixel row 0 maps to `plane_rect.max().imag` and the last row to
/// `plane_rect.min().imag`.
pub fn pixel_to_plane(
    pixel_position: Point,
    pixel_rect: PixelRect,
    plane_rect: PlaneRect,
) -> Result<Complex, PixelToPlaneError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToPlaneError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = (pixel_position.x - pixel_rect.top_left().x) as f64;
    let relative_pixel_y = (pixel_position.y - pixel_rect.top_left().y) as f64;

    let z0 = plane_rect.top_left();
    let z1 = plane_rect.bottom_right();

    let real = z0.real
        + (relative_pixel_x / f64::from(pixel_rect.width() - 1)) * (z1.real - z0.real);
    let imag = z0.imag
        + (relative_pixel_y / f64::from(pixel_rect.height() - 1)) * (z1.imag - z0.imag);

    Ok(Complex { real, imag })
}
