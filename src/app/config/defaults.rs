// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom factor bounds and button step
//! - **Animation**: Linear and spring curve parameters
//! - **Gesture**: Thresholds used by the gesture recognizer

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale at which the image fits the surface (no zoom).
pub const MIN_SCALE: f32 = 1.0;

/// Maximum zoom factor.
pub const MAX_SCALE: f32 = 5.0;

/// Scale applied by a double tap on a fitted image.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 5.0;

/// Default increment for the zoom in/out buttons.
pub const DEFAULT_BUTTON_STEP: f32 = 1.0;

/// Minimum allowed button step.
pub const MIN_BUTTON_STEP: f32 = 0.25;

/// Maximum allowed button step.
pub const MAX_BUTTON_STEP: f32 = 4.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the linear curve used for drag, pinch and entry feedback.
pub const DEFAULT_LINEAR_DURATION_MS: u32 = 1000;

/// Minimum linear curve duration.
pub const MIN_LINEAR_DURATION_MS: u32 = 50;

/// Maximum linear curve duration.
pub const MAX_LINEAR_DURATION_MS: u32 = 5000;

/// Spring response (period of the undamped oscillation).
pub const DEFAULT_SPRING_RESPONSE_MS: u32 = 550;

/// Minimum spring response.
pub const MIN_SPRING_RESPONSE_MS: u32 = 100;

/// Maximum spring response.
pub const MAX_SPRING_RESPONSE_MS: u32 = 2000;

/// Spring damping fraction (1.0 = critically damped).
pub const DEFAULT_SPRING_DAMPING: f32 = 0.825;

/// Minimum spring damping fraction.
pub const MIN_SPRING_DAMPING: f32 = 0.1;

/// Maximum spring damping fraction.
pub const MAX_SPRING_DAMPING: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum delay between two presses to count as a double tap.
pub const DOUBLE_TAP_THRESHOLD_MS: u64 = 350;

/// Maximum distance between two presses to count as a double tap.
pub const DOUBLE_TAP_MAX_DISTANCE: f32 = 24.0;

/// Pointer travel before a press turns into a drag.
pub const DRAG_SLOP: f32 = 3.0;

/// Magnitude change per wheel line while Ctrl is held.
pub const WHEEL_PINCH_STEP: f32 = 0.1;

/// Pixels counted as one wheel line for precise scroll devices.
pub const WHEEL_PIXELS_PER_LINE: f32 = 120.0;

/// Wheel silence after which a Ctrl + wheel pinch is committed.
pub const WHEEL_PINCH_IDLE_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_SCALE >= MIN_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_SCALE <= MAX_SCALE);
    assert!(MIN_BUTTON_STEP > 0.0);
    assert!(MAX_BUTTON_STEP >= MIN_BUTTON_STEP);
    assert!(DEFAULT_BUTTON_STEP >= MIN_BUTTON_STEP);
    assert!(DEFAULT_BUTTON_STEP <= MAX_BUTTON_STEP);

    // Animation validation
    assert!(MIN_LINEAR_DURATION_MS > 0);
    assert!(DEFAULT_LINEAR_DURATION_MS >= MIN_LINEAR_DURATION_MS);
    assert!(DEFAULT_LINEAR_DURATION_MS <= MAX_LINEAR_DURATION_MS);
    assert!(MIN_SPRING_RESPONSE_MS > 0);
    assert!(DEFAULT_SPRING_RESPONSE_MS >= MIN_SPRING_RESPONSE_MS);
    assert!(DEFAULT_SPRING_RESPONSE_MS <= MAX_SPRING_RESPONSE_MS);
    assert!(MIN_SPRING_DAMPING > 0.0);
    assert!(DEFAULT_SPRING_DAMPING >= MIN_SPRING_DAMPING);
    assert!(DEFAULT_SPRING_DAMPING <= MAX_SPRING_DAMPING);

    // Gesture validation
    assert!(DOUBLE_TAP_THRESHOLD_MS > 0);
    assert!(DRAG_SLOP >= 0.0);
    assert!(WHEEL_PINCH_STEP > 0.0);
    assert!(WHEEL_PIXELS_PER_LINE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_bounds_match_fit_and_max_zoom() {
        assert_eq!(MIN_SCALE, 1.0);
        assert_eq!(MAX_SCALE, 5.0);
        assert_eq!(DEFAULT_DOUBLE_TAP_SCALE, MAX_SCALE);
    }

    #[test]
    fn button_step_defaults_are_valid() {
        assert_eq!(DEFAULT_BUTTON_STEP, 1.0);
        assert!(DEFAULT_BUTTON_STEP >= MIN_BUTTON_STEP);
        assert!(DEFAULT_BUTTON_STEP <= MAX_BUTTON_STEP);
    }

    #[test]
    fn animation_defaults_are_valid() {
        assert_eq!(DEFAULT_LINEAR_DURATION_MS, 1000);
        assert!(DEFAULT_SPRING_RESPONSE_MS < DEFAULT_LINEAR_DURATION_MS);
        assert!(DEFAULT_SPRING_DAMPING < 1.0);
    }
}
