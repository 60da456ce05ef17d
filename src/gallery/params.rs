//! User-tunable layout parameters for the card stack
//!
//! Three knobs, each bound to a slider in the surrounding UI and clamped to
//! a fixed closed range. Changing a value takes effect on the next computed
//! transform at every depth.

use std::ops::RangeInclusive;

use serde::Deserialize;

/// Vertical distance between consecutive depths, in pixels
pub const SPACING_RANGE: RangeInclusive<f64> = 1.0..=40.0;

/// Fractional size shrink recovered per depth (0 = steepest shrink)
pub const SCALE_DECAY_RANGE: RangeInclusive<f64> = 0.0..=0.05;

/// Rotation per depth, in degrees
pub const ROTATION_STEP_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// The three stack layout knobs. Setters clamp to the ranges above, so a
/// `LayoutParams` is always in range no matter where its values came from.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(from = "RawLayoutParams")]
pub struct LayoutParams {
    spacing: f64,
    scale_decay: f64,
    rotation_step: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            scale_decay: 0.02,
            rotation_step: 5.0,
        }
    }
}

impl LayoutParams {
    pub fn new(spacing: f64, scale_decay: f64, rotation_step: f64) -> Self {
        let mut params = Self::default();
        params.set_spacing(spacing);
        params.set_scale_decay(scale_decay);
        params.set_rotation_step(rotation_step);
        params
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn scale_decay(&self) -> f64 {
        self.scale_decay
    }

    pub fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing.clamp(*SPACING_RANGE.start(), *SPACING_RANGE.end());
    }

    pub fn set_scale_decay(&mut self, scale_decay: f64) {
        self.scale_decay = scale_decay.clamp(*SCALE_DECAY_RANGE.start(), *SCALE_DECAY_RANGE.end());
    }

    pub fn set_rotation_step(&mut self, rotation_step: f64) {
        self.rotation_step =
            rotation_step.clamp(*ROTATION_STEP_RANGE.start(), *ROTATION_STEP_RANGE.end());
    }
}

/// Deserialization proxy so config files go through the same clamping as the
/// slider setters
#[derive(Deserialize)]
#[serde(default)]
struct RawLayoutParams {
    spacing: f64,
    scale_decay: f64,
    rotation_step: f64,
}

impl Default for RawLayoutParams {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            spacing: params.spacing,
            scale_decay: params.scale_decay,
            rotation_step: params.rotation_step,
        }
    }
}

impl From<RawLayoutParams> for LayoutParams {
    fn from(raw: RawLayoutParams) -> Self {
        LayoutParams::new(raw.spacing, raw.scale_decay, raw.rotation_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_range() {
        let params = LayoutParams::default();
        assert!(SPACING_RANGE.contains(&params.spacing()));
        assert!(SCALE_DECAY_RANGE.contains(&params.scale_decay()));
        assert!(ROTATION_STEP_RANGE.contains(&params.rotation_step()));
    }

    #[test]
    fn test_setters_clamp() {
        let mut params = LayoutParams::default();

        params.set_spacing(0.0);
        assert_eq!(params.spacing(), 1.0);
        params.set_spacing(100.0);
        assert_eq!(params.spacing(), 40.0);

        params.set_scale_decay(-0.5);
        assert_eq!(params.scale_decay(), 0.0);
        params.set_scale_decay(1.0);
        assert_eq!(params.scale_decay(), 0.05);

        params.set_rotation_step(-500.0);
        assert_eq!(params.rotation_step(), -90.0);
        params.set_rotation_step(120.0);
        assert_eq!(params.rotation_step(), 90.0);
    }

    #[test]
    fn test_deserialize_clamps() {
        let params: LayoutParams =
            toml::from_str("spacing = 99.0\nscale_decay = 0.03\nrotation_step = -95.0").unwrap();
        assert_eq!(params.spacing(), 40.0);
        assert_eq!(params.scale_decay(), 0.03);
        assert_eq!(params.rotation_step(), -90.0);
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let params: LayoutParams = toml::from_str("spacing = 12.0").unwrap();
        assert_eq!(params.spacing(), 12.0);
        assert_eq!(params.scale_decay(), 0.02);
        assert_eq!(params.rotation_step(), 5.0);
    }
}
