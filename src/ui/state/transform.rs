// SPDX-License-Identifier: MPL-2.0
//! Transform controller for the displayed image.
//!
//! Reconciles double taps, drags, pinches and the zoom buttons into a single
//! `(scale, offset)` pair. Every transition reports the [`Easing`] the render
//! layer should animate it with, or `None` when nothing changed.
//!
//! Settled invariants:
//! - `MIN_SCALE <= scale <= MAX_SCALE`
//! - `offset == (0, 0)` whenever `scale == MIN_SCALE`
//!
//! A live pinch may push `scale` outside the range until the pinch ends, and a
//! drag at the fitted scale moves the image until the drag ends.

use super::animation::Easing;
use super::scale::{ButtonStep, ZoomScale};
use iced::Vector;

/// Tunables applied by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSettings {
    /// Scale reached by double tapping a fitted image.
    pub double_tap_scale: ZoomScale,
    /// Increment of the zoom in/out buttons.
    pub button_step: ButtonStep,
    /// Curve used for discrete snaps.
    pub spring: Easing,
    /// Curve used for continuous feedback.
    pub linear: Easing,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            double_tap_scale: ZoomScale::new(super::scale::DEFAULT_DOUBLE_TAP_SCALE),
            button_step: ButtonStep::default(),
            spring: Easing::spring(),
            linear: Easing::linear(),
        }
    }
}

/// Per-screen view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub scale: ZoomScale,
    pub offset: Vector,
    pub is_animating_entry: bool,
    pub is_drawer_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: ZoomScale::FIT,
            offset: Vector::new(0.0, 0.0),
            is_animating_entry: false,
            is_drawer_open: false,
        }
    }
}

impl ViewState {
    /// Whether the state is the fitted, centered image.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.scale == ZoomScale::FIT && self.offset == Vector::new(0.0, 0.0)
    }
}

/// Owns the [`ViewState`] and applies gesture transitions to it.
#[derive(Debug, Clone, Default)]
pub struct TransformController {
    state: ViewState,
    settings: TransformSettings,
}

impl TransformController {
    #[must_use]
    pub fn new(settings: TransformSettings) -> Self {
        Self {
            state: ViewState::default(),
            settings,
        }
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &TransformSettings {
        &self.settings
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.state.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.state.offset
    }

    /// Toggles between the fitted scale and the double-tap scale.
    pub fn on_double_tap(&mut self) -> Option<Easing> {
        if self.state.scale.is_exactly_fit() {
            self.state.scale = self.settings.double_tap_scale;
            Some(self.settings.spring)
        } else {
            self.reset()
        }
    }

    /// Moves the image to `translation`, measured from the drag start.
    pub fn on_drag_change(&mut self, translation: Vector) -> Option<Easing> {
        if !translation.x.is_finite() || !translation.y.is_finite() {
            return None;
        }
        self.state.offset = translation;
        Some(self.settings.linear)
    }

    /// Snaps back to the fitted state when the drag ended unzoomed.
    pub fn on_drag_end(&mut self) -> Option<Easing> {
        if self.state.scale.is_fit() {
            self.reset()
        } else {
            None
        }
    }

    /// Follows a live pinch; `magnitude` is relative to the pinch start.
    pub fn on_pinch_change(&mut self, magnitude: f32) -> Option<Easing> {
        if self.state.scale.in_range() {
            self.state.scale = ZoomScale::live(magnitude);
            Some(self.settings.linear)
        } else if self.state.scale.is_max() {
            self.state.scale = ZoomScale::MAX;
            Some(self.settings.linear)
        } else {
            None
        }
    }

    /// Commits a pinch, clamping an overshoot or resetting an undershoot.
    pub fn on_pinch_end(&mut self) -> Option<Easing> {
        if self.state.scale.value() > ZoomScale::MAX.value() {
            self.state.scale = ZoomScale::MAX;
            Some(self.settings.spring)
        } else if self.state.scale.is_fit() {
            self.reset()
        } else {
            None
        }
    }

    /// Steps the scale down; reaching the fitted scale resets the pan too.
    ///
    /// Does nothing when the image is already fitted.
    pub fn on_zoom_out_button(&mut self) -> Option<Easing> {
        if self.state.scale.is_fit() {
            return None;
        }
        let scale = self.state.scale.step_out(self.settings.button_step);
        if scale.is_fit() {
            self.reset()
        } else {
            self.state.scale = scale;
            Some(self.settings.spring)
        }
    }

    /// Steps the scale up, capped at the maximum. A live pinch above the
    /// maximum is pulled back to it.
    pub fn on_zoom_in_button(&mut self) -> Option<Easing> {
        if self.state.scale == ZoomScale::MAX {
            return None;
        }
        self.state.scale = self.state.scale.step_in(self.settings.button_step);
        Some(self.settings.spring)
    }

    pub fn on_reset_button(&mut self) -> Option<Easing> {
        self.reset()
    }

    pub fn on_toggle_drawer(&mut self) -> Option<Easing> {
        self.state.is_drawer_open = !self.state.is_drawer_open;
        Some(self.settings.spring)
    }

    /// Starts the entry fade. Later calls are no-ops.
    pub fn on_appear(&mut self) -> Option<Easing> {
        if self.state.is_animating_entry {
            return None;
        }
        self.state.is_animating_entry = true;
        Some(self.settings.linear)
    }

    fn reset(&mut self) -> Option<Easing> {
        self.state.scale = ZoomScale::FIT;
        self.state.offset = Vector::new(0.0, 0.0);
        Some(self.settings.spring)
    }
}
