use crate::core::data::complex::Complex;
use std::f64::consts::TAU;

/// Circular drift of the Julia constant.
///
/// Two independent phase accumulators drive the real and imaginary offsets,
/// so unequal speeds trace Lissajous-like paths through parameter space. The
/// orbit radius is `2^-scale` of the current view width, keeping the motion
/// visually proportionate at any zoom depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaOrbit {
    enabled: bool,
    pub scale: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    accu_x: f64,
    accu_y: f64,
}

impl Default for JuliaOrbit {
    fn default() -> Self {
        Self {
            enabled: false,
            scale: 1.0,
            speed_x: 0.5,
            speed_y: 0.5,
            accu_x: 0.0,
            accu_y: 0.0,
        }
    }
}

impl JuliaOrbit {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggles the orbit. Any toggle restarts both phases.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.accu_x = 0.0;
            self.accu_y = 0.0;
        }
        self.enabled = enabled;
    }

    pub fn advance(&mut self, delta: f64) {
        if self.enabled {
            self.accu_x = (self.accu_x + f64::from(self.speed_x) * delta) % TAU;
            self.accu_y = (self.accu_y + f64::from(self.speed_y) * delta) % TAU;
        }
    }

    /// The constant offset for this frame, scaled to the effective view
    /// width.
    #[must_use]
    pub fn offset(&self, effective_width: f64) -> Complex {
        if !self.enabled {
            return Complex::ZERO;
        }

        let scale = 2f64.powf(-f64::from(self.scale)) * effective_width;

        Complex::new(self.accu_x.cos() * scale, self.accu_y.sin() * scale)
    }
}
