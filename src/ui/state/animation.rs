// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation for the image transform.
//!
//! Two easing profiles exist: a damped spring for discrete snaps (double tap,
//! buttons, reset, drawer) and a linear curve for continuous drag and pinch
//! feedback. Animations are sampled against an explicit `Instant` so they can
//! be driven by the tick subscription and tested without a clock.

use crate::app::config::{
    DEFAULT_LINEAR_DURATION_MS, DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_RESPONSE_MS,
};
use crate::ui::state::ViewState;
use iced::Vector;
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Envelope amplitude under which a spring is considered settled.
const SPRING_SETTLE_THRESHOLD: f32 = 0.001;

/// Animation curve applied to a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Underdamped spring described by its response (period) and damping fraction.
    Spring {
        response: Duration,
        damping_fraction: f32,
    },
    /// Constant-speed interpolation over a fixed duration.
    Linear { duration: Duration },
}

impl Easing {
    /// Spring with the default response and damping.
    #[must_use]
    pub fn spring() -> Self {
        Self::Spring {
            response: Duration::from_millis(u64::from(DEFAULT_SPRING_RESPONSE_MS)),
            damping_fraction: DEFAULT_SPRING_DAMPING,
        }
    }

    /// Linear curve with the default duration.
    #[must_use]
    pub fn linear() -> Self {
        Self::Linear {
            duration: Duration::from_millis(u64::from(DEFAULT_LINEAR_DURATION_MS)),
        }
    }

    /// Total time until the curve reaches (or visually settles at) its target.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Self::Linear { duration } => duration,
            Self::Spring {
                response,
                damping_fraction,
            } => {
                let decay = damping_fraction * angular_frequency(response);
                if decay <= f32::EPSILON {
                    return response;
                }
                Duration::from_secs_f32(-SPRING_SETTLE_THRESHOLD.ln() / decay)
            }
        }
    }

    /// Progress in `0.0..` for the elapsed time. Springs may overshoot `1.0`.
    #[must_use]
    pub fn progress(self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32();

        match self {
            Self::Linear { duration } => {
                let total = duration.as_secs_f32();
                if total <= f32::EPSILON {
                    1.0
                } else {
                    (t / total).clamp(0.0, 1.0)
                }
            }
            Self::Spring {
                response,
                damping_fraction,
            } => {
                let omega = angular_frequency(response);
                let zeta = damping_fraction.min(1.0);
                let envelope = (-zeta * omega * t).exp();

                if zeta >= 1.0 {
                    // Critically damped
                    1.0 - envelope * (1.0 + omega * t)
                } else {
                    let damped = omega * (1.0 - zeta * zeta).sqrt();
                    let phase = damped * t;
                    1.0 - envelope * (phase.cos() + (zeta * omega / damped) * phase.sin())
                }
            }
        }
    }
}

fn angular_frequency(response: Duration) -> f32 {
    let period = response.as_secs_f32().max(f32::EPSILON);
    2.0 * PI / period
}

/// Values that can be blended by an [`Animated`] tween.
pub trait Interpolate: Copy + PartialEq {
    /// Blends `from` towards `to` by `t` (not clamped, so springs can overshoot).
    fn interpolate(from: Self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Interpolate for Vector {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        Vector::new(
            f32::interpolate(from.x, to.x, t),
            f32::interpolate(from.y, to.y, t),
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition<T> {
    from: T,
    easing: Easing,
    started_at: Instant,
}

/// A value animated towards a target.
#[derive(Debug, Clone, Copy)]
pub struct Animated<T: Interpolate> {
    target: T,
    transition: Option<Transition<T>>,
}

impl<T: Interpolate> Animated<T> {
    /// Creates a settled value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            target: value,
            transition: None,
        }
    }

    /// Retargets the animation, starting from the value displayed at `now`.
    pub fn go(&mut self, target: T, easing: Easing, now: Instant) {
        if target == self.target && self.transition.is_none() {
            return;
        }
        let from = self.value(now);
        self.target = target;
        self.transition = Some(Transition {
            from,
            easing,
            started_at: now,
        });
    }

    /// Jumps straight to `value`.
    pub fn set(&mut self, value: T) {
        self.target = value;
        self.transition = None;
    }

    /// The value the animation is heading to.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Samples the displayed value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> T {
        match self.transition {
            Some(transition) => {
                let elapsed = now.saturating_duration_since(transition.started_at);
                let t = transition.easing.progress(elapsed);
                T::interpolate(transition.from, self.target, t)
            }
            None => self.target,
        }
    }

    /// Whether the value is still moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|transition| {
            now.saturating_duration_since(transition.started_at) < transition.easing.duration()
        })
    }

    /// Drops a finished transition so later samples skip interpolation.
    pub fn settle_if_done(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.transition = None;
        }
    }
}

impl<T: Interpolate + Default> Default for Animated<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Displayed values of a [`TransformAnimation`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub scale: f32,
    pub offset: Vector,
    /// Entry fade, `0.0` hidden to `1.0` visible.
    pub opacity: f32,
    /// Drawer slide, `0.0` closed to `1.0` open. Springs may overshoot.
    pub drawer: f32,
}

/// Animated mirror of a [`ViewState`].
#[derive(Debug, Clone, Copy)]
pub struct TransformAnimation {
    scale: Animated<f32>,
    offset: Animated<Vector>,
    opacity: Animated<f32>,
    drawer: Animated<f32>,
}

impl TransformAnimation {
    /// Creates an animation resting at `state`.
    #[must_use]
    pub fn new(state: &ViewState) -> Self {
        Self {
            scale: Animated::new(state.scale.value()),
            offset: Animated::new(state.offset),
            opacity: Animated::new(entry_opacity(state)),
            drawer: Animated::new(drawer_progress(state)),
        }
    }

    /// Moves every value towards `state` using `easing`.
    ///
    /// Values whose target did not change keep their current transition.
    pub fn retarget(&mut self, state: &ViewState, easing: Easing, now: Instant) {
        retarget(&mut self.scale, state.scale.value(), easing, now);
        retarget(&mut self.offset, state.offset, easing, now);
        retarget(&mut self.opacity, entry_opacity(state), easing, now);
        retarget(&mut self.drawer, drawer_progress(state), easing, now);
    }

    #[must_use]
    pub fn sample(&self, now: Instant) -> Frame {
        Frame {
            scale: self.scale.value(now),
            offset: self.offset.value(now),
            opacity: self.opacity.value(now),
            drawer: self.drawer.value(now),
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scale.is_animating(now)
            || self.offset.is_animating(now)
            || self.opacity.is_animating(now)
            || self.drawer.is_animating(now)
    }

    pub fn settle_if_done(&mut self, now: Instant) {
        self.scale.settle_if_done(now);
        self.offset.settle_if_done(now);
        self.opacity.settle_if_done(now);
        self.drawer.settle_if_done(now);
    }
}

impl Default for TransformAnimation {
    fn default() -> Self {
        Self::new(&ViewState::default())
    }
}

fn retarget<T: Interpolate>(value: &mut Animated<T>, target: T, easing: Easing, now: Instant) {
    if value.target() != target {
        value.go(target, easing, now);
    }
}

fn entry_opacity(state: &ViewState) -> f32 {
    if state.is_animating_entry {
        1.0
    } else {
        0.0
    }
}

fn drawer_progress(state: &ViewState) -> f32 {
    if state.is_drawer_open {
        1.0
    } else {
        0.0
    }
}
