use crate::core::data::point::Point;

/// Per-pixel evaluation capability.
///
/// Implementations are pure functions of the pixel coordinate and their own
/// immutable parameters, so a frame can be mapped over any parallel executor
/// with no cross-pixel state.
pub trait EscapeAlgorithm {
    type Success;
    type Failure;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
