/// Log₂-width the envelope pulses towards, a comfortably zoomed-out view.
const TARGET_EXPONENT: f64 = 2.0;

/// Periodic zoom animation.
///
/// The accumulator advances at `2^-speed` per second and is folded into a
/// triangle wave over [0,1], eased with a smoothstep, then used to
/// interpolate the *exponent* of the view width between the user's zoom
/// level and [`TARGET_EXPONENT`]. Working in the log domain keeps the pulse
/// visually uniform at any zoom depth, and the triangle wave guarantees the
/// envelope returns exactly to the user's zoom level each cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomEnvelope {
    enabled: bool,
    pub speed: f32,
    accu: f64,
}

impl Default for ZoomEnvelope {
    fn default() -> Self {
        Self {
            enabled: false,
            speed: 1.0,
            accu: 0.0,
        }
    }
}

impl ZoomEnvelope {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggles the envelope. Any toggle restarts the cycle from the user's
    /// zoom level.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.accu = 0.0;
        }
        self.enabled = enabled;
    }

    pub fn advance(&mut self, delta: f64) {
        if self.enabled {
            self.accu = (self.accu + delta * 2f64.powf(-f64::from(self.speed))) % 2.0;
        }
    }

    /// The width to render this frame given the user's persistent zoom width.
    #[must_use]
    pub fn effective_width(&self, width_zoom: f64) -> f64 {
        if !self.enabled {
            return width_zoom;
        }

        let t = self.accu % 2.0;
        let t = if t > 1.0 { 2.0 - t } else { t };
        if t == 0.0 {
            // Cycle boundary: report the baseline exactly rather than
            // round-tripping it through exp2(log2(w)).
            return width_zoom;
        }
        let t = t * t * (3.0 - 2.0 * t);

        let exponent = (1.0 - t) * width_zoom.log2() + t * TARGET_EXPONENT;
        2f64.powf(exponent)
    }
}
