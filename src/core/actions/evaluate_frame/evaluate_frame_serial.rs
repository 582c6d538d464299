use crate::core::actions::evaluate_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Evaluates every pixel of the rect on the calling thread, row-major.
///
/// Reference implementation: the parallel evaluator must produce identical
/// output in identical order.
pub fn evaluate_frame_serial<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: EscapeAlgorithm,
{
    let mut samples = Vec::with_capacity(pixel_rect.size() as usize);

    for y in pixel_rect.top_left().y..=pixel_rect.bottom_right().y {
        for x in pixel_rect.top_left().x..=pixel_rect.bottom_right().x {
            samples.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CoordinateSum;

    impl EscapeAlgorithm for CoordinateSum {
        type Success = i64;
        type Failure = std::convert::Infallible;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(i64::from(pixel.x) + i64::from(pixel.y))
        }
    }

    #[test]
    fn test_serial_evaluates_in_row_major_order() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();

        let samples = evaluate_frame_serial(pixel_rect, &CoordinateSum).unwrap();

        assert_eq!(samples, vec![0, 1, 2, 1, 2, 3]);
    }

    #[test]
    fn test_serial_output_length_matches_rect_size() {
        let pixel_rect = PixelRect::new(Point { x: 3, y: 7 }, Point { x: 12, y: 11 }).unwrap();

        let samples = evaluate_frame_serial(pixel_rect, &CoordinateSum).unwrap();

        assert_eq!(samples.len(), pixel_rect.size() as usize);
    }
}
