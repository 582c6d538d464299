use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// Canonical view center for this variant. The Mandelbrot set sits mostly
    /// left of the origin; the Julia sets of interest are centered on it.
    #[must_use]
    pub const fn home_center(self) -> Complex {
        match self {
            Self::Mandelbrot => Complex {
                real: -0.7,
                imag: 0.0,
            },
            Self::Julia => Complex::ZERO,
        }
    }
}
