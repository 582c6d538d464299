use crate::core::data::complex::Complex;

/// Number of fine-tuning levels in the hierarchy.
pub const FINE_TUNE_LEVELS: usize = 10;

/// Hierarchically fine-tuned Julia constant.
///
/// The constant is composed from ten 2D offsets weighted geometrically:
/// `c = Σ offset[i] * 4^-i`. Level 0 moves `c` across the whole parameter
/// plane; each deeper level moves it a quarter as far, so the constant can
/// be edited with precision matching any zoom depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConstant {
    offsets: [[f32; 2]; FINE_TUNE_LEVELS],
    level: usize,
}

impl Default for JuliaConstant {
    fn default() -> Self {
        Self {
            offsets: [[0.0; 2]; FINE_TUNE_LEVELS],
            level: 0,
        }
    }
}

impl JuliaConstant {
    /// The level currently selected for editing, always in `[0, 9]`.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Selects the editing level, clamped to the valid range.
    pub fn set_level(&mut self, level: usize) {
        self.level = level.min(FINE_TUNE_LEVELS - 1);
    }

    /// Mutable access to the offset at the selected level, for direct
    /// binding to UI sliders.
    pub fn offset_mut(&mut self) -> &mut [f32; 2] {
        &mut self.offsets[self.level]
    }

    #[must_use]
    pub fn offset(&self, level: usize) -> [f32; 2] {
        self.offsets[level.min(FINE_TUNE_LEVELS - 1)]
    }

    pub fn set_offset(&mut self, level: usize, offset: [f32; 2]) {
        self.offsets[level.min(FINE_TUNE_LEVELS - 1)] = offset;
    }

    /// Zeroes the offsets at the selected level and every deeper one,
    /// discarding detail finer than the current editing level.
    pub fn reset_from_level(&mut self) {
        for offset in &mut self.offsets[self.level..] {
            *offset = [0.0, 0.0];
        }
    }

    /// Recomposes the constant from the full hierarchy. Cheap enough to run
    /// every frame, which keeps the value correct whatever changed.
    #[must_use]
    pub fn compose(&self) -> Complex {
        let mut c = Complex::ZERO;

        for (i, offset) in self.offsets.iter().enumerate() {
            let weight = 4f64.powi(-(i as i32));
            c = c + Complex::new(f64::from(offset[0]) * weight, f64::from(offset[1]) * weight);
        }

        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_composes_to_zero() {
        assert_eq!(JuliaConstant::default().compose(), Complex::ZERO);
    }

    #[test]
    fn test_level_zero_offset_has_unit_weight() {
        let mut constant = JuliaConstant::default();
        constant.set_offset(0, [0.3, -0.1]);

        let c = constant.compose();

        assert_eq!(c.real, 0.3f32 as f64);
        assert_eq!(c.imag, -0.1f32 as f64);
    }

    #[test]
    fn test_deeper_levels_are_geometrically_weighted() {
        let mut constant = JuliaConstant::default();
        constant.set_offset(1, [1.0, 0.0]);
        constant.set_offset(2, [0.0, 1.0]);

        let c = constant.compose();

        assert_eq!(c.real, 0.25);
        assert_eq!(c.imag, 0.0625);
    }

    #[test]
    fn test_set_level_clamps_to_valid_range() {
        let mut constant = JuliaConstant::default();

        constant.set_level(42);
        assert_eq!(constant.level(), FINE_TUNE_LEVELS - 1);

        constant.set_level(3);
        assert_eq!(constant.level(), 3);
    }

    #[test]
    fn test_reset_from_level_zeroes_selected_and_deeper() {
        let mut constant = JuliaConstant::default();
        constant.set_offset(0, [0.5, 0.5]);
        constant.set_offset(4, [0.2, 0.2]);
        constant.set_offset(9, [0.1, 0.1]);

        constant.set_level(4);
        constant.reset_from_level();

        assert_eq!(constant.offset(0), [0.5, 0.5]);
        assert_eq!(constant.offset(4), [0.0, 0.0]);
        assert_eq!(constant.offset(9), [0.0, 0.0]);
    }

    #[test]
    fn test_offset_mut_edits_the_selected_level() {
        let mut constant = JuliaConstant::default();
        constant.set_level(2);

        constant.offset_mut()[0] = 0.75;

        assert_eq!(constant.offset(2), [0.75, 0.0]);
        assert_eq!(constant.offset(0), [0.0, 0.0]);
    }
}
