use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::evaluate_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Error type for cancelable frame evaluation.
///
/// Cancellation is expected control flow (a newer frame superseded this one)
/// and is kept apart from genuine algorithm failures.
#[derive(Debug)]
pub enum EvaluateFrameError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for EvaluateFrameError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluateFrameError::Cancelled(c) => write!(f, "{}", c),
            EvaluateFrameError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for EvaluateFrameError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluateFrameError::Cancelled(c) => Some(c),
            EvaluateFrameError::Algorithm(e) => Some(e),
        }
    }
}

/// Evaluates a frame in parallel using rayon's work-stealing scheduler.
///
/// Rows are distributed across the pool; there is no shared mutable state
/// between pixel tasks. Output is row-major, identical to
/// [`evaluate_frame_serial`](super::evaluate_frame_serial::evaluate_frame_serial).
pub fn evaluate_frame_parallel<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: EscapeAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    evaluate_frame_parallel_cancelable(pixel_rect, algorithm, &NeverCancel).map_err(|e| match e {
        EvaluateFrameError::Algorithm(err) => err,
        EvaluateFrameError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`evaluate_frame_parallel`], but polls a cancellation token at the
/// start of each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels
/// within a row, aborting promptly when a newer frame makes this one stale.
pub fn evaluate_frame_parallel_cancelable<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, EvaluateFrameError<Alg::Failure>>
where
    Alg: EscapeAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let y_range: Vec<i32> = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y).collect();
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = (x_end - x_start + 1) as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, EvaluateFrameError<Alg::Failure>> = y_range
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (x_start..=x_end).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(EvaluateFrameError::Cancelled(Cancelled));
                }

                let sample = algorithm
                    .compute(Point { x, y })
                    .map_err(EvaluateFrameError::Algorithm)?;
                row.push(sample);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::evaluate_frame::evaluate_frame_serial::evaluate_frame_serial;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError;

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm;

    impl EscapeAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x + pixel.y) as u64)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm;

    impl EscapeAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError)
        }
    }

    #[test]
    fn test_parallel_matches_serial_output() {
        let algorithm = StubSuccessAlgorithm;
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 10, y: 8 }).unwrap();

        let serial = evaluate_frame_serial(pixel_rect, &algorithm).unwrap();
        let parallel = evaluate_frame_parallel(pixel_rect, &algorithm).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_parallel_matches_serial_on_offset_rect() {
        let algorithm = StubSuccessAlgorithm;
        let pixel_rect = PixelRect::new(Point { x: 5, y: 5 }, Point { x: 6, y: 6 }).unwrap();

        let serial = evaluate_frame_serial(pixel_rect, &algorithm).unwrap();
        let parallel = evaluate_frame_parallel(pixel_rect, &algorithm).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_parallel_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm;
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 3, y: 4 }).unwrap();

        let result = evaluate_frame_parallel(pixel_rect, &algorithm);

        assert!(result.is_err());
    }

    #[test]
    fn test_cancelable_returns_cancelled_for_tripped_token() {
        let algorithm = StubSuccessAlgorithm;
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 10, y: 8 }).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = evaluate_frame_parallel_cancelable(pixel_rect, &algorithm, &cancel_token);

        assert!(matches!(result, Err(EvaluateFrameError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_matches_serial_when_not_cancelled() {
        let algorithm = StubSuccessAlgorithm;
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 20, y: 15 }).unwrap();

        let serial = evaluate_frame_serial(pixel_rect, &algorithm).unwrap();
        let parallel =
            evaluate_frame_parallel_cancelable(pixel_rect, &algorithm, &NeverCancel).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_cancellation_is_polled_at_every_row_start() {
        let algorithm = StubSuccessAlgorithm;
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 4 }).unwrap();

        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = evaluate_frame_parallel_cancelable(pixel_rect, &algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 5, "expected at least 5 polls for 5 rows, got {}", polls);
    }

    #[test]
    fn test_cancellation_is_polled_within_wide_rows() {
        let algorithm = StubSuccessAlgorithm;
        // 3000 pixels per row crosses the poll interval twice.
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2999, y: 1 }).unwrap();

        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = evaluate_frame_parallel_cancelable(pixel_rect, &algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 6, "expected at least 6 polls for 2 wide rows, got {}", polls);
    }

    #[test]
    fn test_error_display_formats() {
        let cancelled: EvaluateFrameError<StubError> = EvaluateFrameError::Cancelled(Cancelled);
        let algorithm: EvaluateFrameError<StubError> = EvaluateFrameError::Algorithm(StubError);

        assert_eq!(format!("{}", cancelled), "operation cancelled");
        assert_eq!(format!("{}", algorithm), "algorithm error: StubError");
    }
}
