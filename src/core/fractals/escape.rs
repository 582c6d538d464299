use crate::core::data::complex::Complex;

/// Squared escape bound. Once |z|² exceeds 4 the orbit of z ↦ z² + c
/// provably diverges, so iteration can stop.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Continuous classification of a single orbit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeSample {
    /// The orbit stayed bounded for the full iteration budget.
    Interior,
    /// The orbit escaped. `nu` is the smooth iteration count
    /// `n - log2(log2(|z_n|))`, a real-valued refinement of the integer
    /// escape count that removes banding.
    Escaped { nu: f64 },
}

impl EscapeSample {
    /// Integer escape iteration, if the orbit escaped.
    #[must_use]
    pub fn escape_iteration(&self) -> Option<u32> {
        match self {
            Self::Interior => None,
            Self::Escaped { nu } => Some(nu.ceil().max(0.0) as u32),
        }
    }
}

/// Runs the quadratic escape-time iteration `z ↦ z² + c` from `z_start`.
///
/// The magnitude test happens before each update, so `nu` is computed from
/// the first iterate found outside the escape radius.
#[must_use]
pub fn escape_sample(z_start: Complex, c: Complex, max_iteration_count: u32) -> EscapeSample {
    let mut z = z_start;

    for iteration in 0..max_iteration_count {
        let magnitude_squared = z.magnitude_squared();
        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            let nu = f64::from(iteration) - magnitude_squared.sqrt().log2().log2();
            return EscapeSample::Escaped { nu };
        }
        z = z * z + c;
    }

    EscapeSample::Interior
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_a_fixed_point_and_never_escapes() {
        let sample = escape_sample(Complex::ZERO, Complex::ZERO, 1000);
        assert_eq!(sample, EscapeSample::Interior);
    }

    #[test]
    fn test_points_inside_escape_disk_do_not_escape_at_iteration_one() {
        // With z₀ = 0 and c on the closed disk |c| ≤ 2, the first iterate is
        // c itself, which is not outside the escape radius.
        let on_disk = [
            Complex::new(2.0, 0.0),
            Complex::new(-2.0, 0.0),
            Complex::new(0.0, 2.0),
            Complex::new(1.2, -1.1),
        ];

        for c in on_disk {
            match escape_sample(Complex::ZERO, c, 2) {
                EscapeSample::Escaped { nu } => {
                    assert!(nu > 1.0, "escaped at iteration <= 1 for c = {:?}", c)
                }
                EscapeSample::Interior => {}
            }
        }
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let sample = escape_sample(Complex::new(10.0, 0.0), Complex::ZERO, 100);
        match sample {
            EscapeSample::Escaped { nu } => assert!(nu < 1.0),
            EscapeSample::Interior => panic!("point far outside the disk must escape"),
        }
    }

    #[test]
    fn test_raising_the_cap_never_changes_an_escape() {
        // Consistency of the stopping rule: once a point escapes under a low
        // cap, a higher cap yields the identical smooth value.
        let c = Complex::new(0.5, 0.5);
        let low = escape_sample(Complex::ZERO, c, 50);
        let high = escape_sample(Complex::ZERO, c, 5000);

        match (low, high) {
            (EscapeSample::Escaped { nu: nu_low }, EscapeSample::Escaped { nu: nu_high }) => {
                assert_eq!(nu_low, nu_high);
            }
            other => panic!("expected both runs to escape, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_iteration_is_monotone_in_the_cap() {
        // An interior verdict under a small cap can only turn into an escape
        // at an iteration beyond that cap.
        let c = Complex::new(-0.75, 0.05);

        let mut previous = 0u32;
        for cap in [10u32, 40, 160, 640, 2560] {
            let sample = escape_sample(Complex::ZERO, c, cap);
            let iteration = sample.escape_iteration().unwrap_or(cap);
            assert!(
                iteration >= previous,
                "escape iteration decreased when cap rose to {}",
                cap
            );
            previous = iteration;
        }
    }

    #[test]
    fn test_smooth_value_is_continuous_across_the_escape_boundary() {
        // Walk a short segment of starting points whose escape iteration
        // steps from n to n+1; adjacent smooth values must differ by far
        // less than a whole band.
        let c = Complex::ZERO;
        let mut previous_nu: Option<f64> = None;

        for step in 0..200 {
            let x = 2.0 + 0.001 * f64::from(step);
            match escape_sample(Complex::new(x, 0.0), c, 100) {
                EscapeSample::Escaped { nu } => {
                    if let Some(prev) = previous_nu {
                        assert!(
                            (nu - prev).abs() < 0.1,
                            "smooth value jumped from {} to {} at x = {}",
                            prev,
                            nu,
                            x
                        );
                    }
                    previous_nu = Some(nu);
                }
                EscapeSample::Interior => panic!("points beyond the radius must escape"),
            }
        }
    }
}
