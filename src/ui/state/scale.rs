// SPDX-License-Identifier: MPL-2.0
//! Zoom scale domain types.
//!
//! A scale of `1.0` fits the image to the surface, `5.0` is the maximum zoom.

pub use crate::app::config::{
    DEFAULT_BUTTON_STEP, DEFAULT_DOUBLE_TAP_SCALE, MAX_BUTTON_STEP, MAX_SCALE, MIN_BUTTON_STEP,
    MIN_SCALE,
};

/// Zoom scale factor.
///
/// Values built with [`ZoomScale::new`] are clamped to `MIN_SCALE..=MAX_SCALE`.
/// [`ZoomScale::live`] keeps the raw magnitude of an ongoing pinch, which may
/// leave the range until the pinch is committed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The fitted scale.
    pub const FIT: Self = Self(MIN_SCALE);

    /// The maximum scale.
    pub const MAX: Self = Self(MAX_SCALE);

    /// Creates a scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::FIT;
        }
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Creates an unclamped scale from a live pinch magnitude.
    ///
    /// Non-finite or negative magnitudes collapse to `0.0`, which any
    /// commit turns into a reset.
    #[must_use]
    pub fn live(magnitude: f32) -> Self {
        if magnitude.is_finite() && magnitude > 0.0 {
            Self(magnitude)
        } else {
            Self(0.0)
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the image is at (or below) the fitted scale.
    #[must_use]
    pub fn is_fit(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Whether the scale exactly equals the fitted scale.
    #[must_use]
    pub fn is_exactly_fit(self) -> bool {
        self.0 == MIN_SCALE
    }

    /// Whether the scale is at (or beyond) the maximum.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Whether the scale lies within `MIN_SCALE..=MAX_SCALE`.
    #[must_use]
    pub fn in_range(self) -> bool {
        (MIN_SCALE..=MAX_SCALE).contains(&self.0)
    }

    /// Increases the scale by `step`, capped at the maximum.
    #[must_use]
    pub fn step_in(self, step: ButtonStep) -> Self {
        Self((self.0 + step.value()).min(MAX_SCALE))
    }

    /// Decreases the scale by `step` without a lower clamp.
    ///
    /// Callers treat a result at or below `MIN_SCALE` as a reset.
    #[must_use]
    pub fn step_out(self, step: ButtonStep) -> Self {
        Self(self.0 - step.value())
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::FIT
    }
}

/// Increment used by the zoom in/out buttons, guaranteed within range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStep(f32);

impl ButtonStep {
    /// Creates a new step, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_BUTTON_STEP, MAX_BUTTON_STEP))
    }

    /// Returns the raw step.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ButtonStep {
    fn default() -> Self {
        Self(DEFAULT_BUTTON_STEP)
    }
}

/// Formats a scale for the info readout (trailing zeros removed).
#[must_use]
pub fn format_scale(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract().abs() < f32::EPSILON {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ZoomScale::new(0.2).value(), MIN_SCALE);
        assert_eq!(ZoomScale::new(12.0).value(), MAX_SCALE);
        assert_eq!(ZoomScale::new(2.5).value(), 2.5);
        assert_eq!(ZoomScale::new(f32::NAN), ZoomScale::FIT);
    }

    #[test]
    fn live_keeps_out_of_range_magnitudes() {
        assert_eq!(ZoomScale::live(0.4).value(), 0.4);
        assert_eq!(ZoomScale::live(7.0).value(), 7.0);
        assert!(!ZoomScale::live(7.0).in_range());
    }

    #[test]
    fn live_rejects_non_finite_input() {
        assert_eq!(ZoomScale::live(f32::INFINITY).value(), 0.0);
        assert_eq!(ZoomScale::live(-1.0).value(), 0.0);
        assert!(ZoomScale::live(f32::NAN).is_fit());
    }

    #[test]
    fn step_in_caps_at_max() {
        let step = ButtonStep::default();
        assert_eq!(ZoomScale::new(4.0).step_in(step), ZoomScale::MAX);
        assert_eq!(ZoomScale::new(4.5).step_in(step), ZoomScale::MAX);
    }

    #[test]
    fn step_out_has_no_lower_clamp() {
        let step = ButtonStep::new(1.0);
        assert_eq!(ZoomScale::new(1.5).step_out(step).value(), 0.5);
    }

    #[test]
    fn button_step_clamps() {
        assert_eq!(ButtonStep::new(0.0).value(), MIN_BUTTON_STEP);
        assert_eq!(ButtonStep::new(9.0).value(), MAX_BUTTON_STEP);
    }

    #[test]
    fn format_scale_trims_decimals() {
        assert_eq!(format_scale(1.0), "1");
        assert_eq!(format_scale(2.5), "2.5");
        assert_eq!(format_scale(1.234), "1.23");
    }
}
