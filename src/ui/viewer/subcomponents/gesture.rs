// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition sub-component.
//!
//! Turns raw pointer, touch and wheel input into the gestures understood by
//! the transform controller: double tap, drag, and pinch. Ctrl + wheel acts as
//! a pinch on devices without touch input.

use crate::app::config::{
    DOUBLE_TAP_MAX_DISTANCE, DOUBLE_TAP_THRESHOLD_MS, DRAG_SLOP, WHEEL_PINCH_IDLE_MS,
    WHEEL_PINCH_STEP, WHEEL_PIXELS_PER_LINE,
};
use iced::{Point, Vector};
use std::time::{Duration, Instant};

const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(DOUBLE_TAP_THRESHOLD_MS);
const WHEEL_PINCH_IDLE: Duration = Duration::from_millis(WHEEL_PINCH_IDLE_MS);

/// Scroll amount reported by a wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    Lines(f32),
    Pixels(f32),
}

impl WheelDelta {
    fn lines(self) -> f32 {
        match self {
            Self::Lines(lines) => lines,
            Self::Pixels(pixels) => pixels / WHEEL_PIXELS_PER_LINE,
        }
    }
}

/// Raw input forwarded by the image surface.
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary button or first finger went down.
    PointerPressed { position: Point, at: Instant },
    /// Pointer moved (surface coordinates).
    PointerMoved(Point),
    /// Primary button released.
    PointerReleased,
    /// A finger touched the surface.
    FingerPressed {
        id: u64,
        position: Point,
        at: Instant,
    },
    /// A finger moved.
    FingerMoved { id: u64, position: Point },
    /// A finger was lifted or lost.
    FingerLifted { id: u64 },
    /// Vertical wheel scroll while Ctrl is held.
    ZoomWheel {
        delta: WheelDelta,
        current_scale: f32,
        at: Instant,
    },
    /// Ctrl was pressed or released.
    ZoomModifierChanged(bool),
    /// Periodic tick used to commit idle wheel pinches.
    Tick(Instant),
}

/// Gestures recognized from the raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    DoubleTap,
    /// Translation since the drag started.
    DragChanged(Vector),
    DragEnded,
    /// Magnitude of the pinch.
    PinchChanged(f32),
    PinchEnded,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    at: Instant,
    dragging: bool,
}

#[derive(Debug, Clone, Copy)]
struct TouchPinch {
    first: (u64, Point),
    second: (u64, Point),
    initial_distance: f32,
}

impl TouchPinch {
    fn distance(&self) -> f32 {
        self.first.1.distance(self.second.1)
    }

    fn magnitude(&self) -> f32 {
        if self.initial_distance <= f32::EPSILON {
            1.0
        } else {
            self.distance() / self.initial_distance
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WheelPinch {
    base_scale: f32,
    lines: f32,
    last_event: Instant,
}

impl WheelPinch {
    fn magnitude(&self) -> f32 {
        (self.base_scale * (1.0 + self.lines * WHEEL_PINCH_STEP)).max(0.0)
    }
}

/// Gesture recognizer state.
#[derive(Debug, Clone, Default)]
pub struct State {
    press: Option<Press>,
    last_tap: Option<(Instant, Point)>,
    /// Fingers currently down, in press order (at most two are tracked).
    fingers: Vec<(u64, Point)>,
    pinch: Option<TouchPinch>,
    wheel_pinch: Option<WheelPinch>,
}

impl State {
    /// Handle a raw input message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PointerPressed { position, at } => self.press(position, at),
            Message::PointerMoved(position) => self.move_pointer(position),
            Message::PointerReleased => self.release(),
            Message::FingerPressed { id, position, at } => self.finger_pressed(id, position, at),
            Message::FingerMoved { id, position } => self.finger_moved(id, position),
            Message::FingerLifted { id } => self.finger_lifted(id),
            Message::ZoomWheel {
                delta,
                current_scale,
                at,
            } => self.zoom_wheel(delta, current_scale, at),
            Message::ZoomModifierChanged(pressed) => {
                if !pressed && self.wheel_pinch.take().is_some() {
                    Effect::PinchEnded
                } else {
                    Effect::None
                }
            }
            Message::Tick(now) => match self.wheel_pinch {
                Some(wheel) if now.saturating_duration_since(wheel.last_event) >= WHEEL_PINCH_IDLE => {
                    self.wheel_pinch = None;
                    Effect::PinchEnded
                }
                _ => Effect::None,
            },
        }
    }

    /// Whether a drag is currently moving the image.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    /// Whether a pinch (touch or wheel) is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some() || self.wheel_pinch.is_some()
    }

    /// Whether the recognizer needs ticks to commit an idle wheel pinch.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.wheel_pinch.is_some()
    }

    fn press(&mut self, position: Point, at: Instant) -> Effect {
        self.press = Some(Press {
            origin: position,
            at,
            dragging: false,
        });
        Effect::None
    }

    fn move_pointer(&mut self, position: Point) -> Effect {
        let Some(press) = self.press.as_mut() else {
            return Effect::None;
        };
        let translation = position - press.origin;

        if !press.dragging {
            if press.origin.distance(position) <= DRAG_SLOP {
                return Effect::None;
            }
            press.dragging = true;
            self.last_tap = None;
        }
        Effect::DragChanged(translation)
    }

    /// Completes a tap or a drag. A double tap is reported when the second
    /// tap is released.
    fn release(&mut self) -> Effect {
        let Some(press) = self.press.take() else {
            return Effect::None;
        };
        if press.dragging {
            return Effect::DragEnded;
        }

        let is_double_tap = self.last_tap.is_some_and(|(time, origin)| {
            press.at.saturating_duration_since(time) < DOUBLE_TAP_THRESHOLD
                && origin.distance(press.origin) <= DOUBLE_TAP_MAX_DISTANCE
        });

        if is_double_tap {
            // Reset to avoid triple-tap
            self.last_tap = None;
            Effect::DoubleTap
        } else {
            self.last_tap = Some((press.at, press.origin));
            Effect::None
        }
    }

    fn finger_pressed(&mut self, id: u64, position: Point, at: Instant) -> Effect {
        if self.fingers.iter().any(|(finger, _)| *finger == id) || self.fingers.len() >= 2 {
            return Effect::None;
        }
        self.fingers.push((id, position));

        match self.fingers.as_slice() {
            [_] => self.press(position, at),
            [first, second] => {
                // A second finger turns the gesture into a pinch.
                self.press = None;
                self.last_tap = None;
                let pinch = TouchPinch {
                    first: *first,
                    second: *second,
                    initial_distance: first.1.distance(second.1),
                };
                self.pinch = Some(pinch);
                log::debug!("pinch started at distance {:.1}", pinch.initial_distance);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn finger_moved(&mut self, id: u64, position: Point) -> Effect {
        let Some(slot) = self.fingers.iter_mut().find(|(finger, _)| *finger == id) else {
            return Effect::None;
        };
        slot.1 = position;

        if let Some(pinch) = self.pinch.as_mut() {
            if pinch.first.0 == id {
                pinch.first.1 = position;
            } else if pinch.second.0 == id {
                pinch.second.1 = position;
            }
            return Effect::PinchChanged(pinch.magnitude());
        }

        self.move_pointer(position)
    }

    fn finger_lifted(&mut self, id: u64) -> Effect {
        let before = self.fingers.len();
        self.fingers.retain(|(finger, _)| *finger != id);
        if self.fingers.len() == before {
            return Effect::None;
        }

        if self.pinch.take().is_some() {
            // The remaining finger must be lifted before a new drag starts.
            self.press = None;
            return Effect::PinchEnded;
        }

        self.release()
    }

    fn zoom_wheel(&mut self, delta: WheelDelta, current_scale: f32, at: Instant) -> Effect {
        if self.pinch.is_some() {
            return Effect::None;
        }
        let wheel = self.wheel_pinch.get_or_insert(WheelPinch {
            base_scale: current_scale,
            lines: 0.0,
            last_event: at,
        });
        wheel.lines += delta.lines();
        wheel.last_event = at;
        Effect::PinchChanged(wheel.magnitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(state: &mut State, x: f32, y: f32, at: Instant) -> Effect {
        state.handle(Message::PointerPressed {
            position: Point::new(x, y),
            at,
        })
    }

    fn tap(state: &mut State, x: f32, y: f32, at: Instant) -> Effect {
        assert_eq!(pressed(state, x, y, at), Effect::None);
        state.handle(Message::PointerReleased)
    }

    #[test]
    fn double_tap_fires_on_second_release() {
        let mut state = State::default();
        let now = Instant::now();
        assert_eq!(tap(&mut state, 10.0, 10.0, now), Effect::None);

        let second_press = pressed(&mut state, 12.0, 11.0, now + Duration::from_millis(120));
        assert_eq!(second_press, Effect::None);
        assert_eq!(state.handle(Message::PointerReleased), Effect::DoubleTap);
    }

    #[test]
    fn slow_second_tap_is_single() {
        let mut state = State::default();
        let now = Instant::now();
        tap(&mut state, 10.0, 10.0, now);

        let effect = tap(&mut state, 10.0, 10.0, now + Duration::from_millis(600));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn distant_second_tap_is_single() {
        let mut state = State::default();
        let now = Instant::now();
        tap(&mut state, 10.0, 10.0, now);

        let effect = tap(&mut state, 200.0, 10.0, now + Duration::from_millis(100));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn triple_tap_does_not_retrigger() {
        let mut state = State::default();
        let now = Instant::now();
        tap(&mut state, 0.0, 0.0, now);
        assert_eq!(
            tap(&mut state, 0.0, 0.0, now + Duration::from_millis(100)),
            Effect::DoubleTap
        );
        let third = tap(&mut state, 0.0, 0.0, now + Duration::from_millis(200));
        assert_eq!(third, Effect::None);
    }

    #[test]
    fn tap_then_drag_is_not_a_double_tap() {
        let mut state = State::default();
        let now = Instant::now();
        tap(&mut state, 50.0, 50.0, now);

        pressed(&mut state, 50.0, 50.0, now + Duration::from_millis(100));
        let effect = state.handle(Message::PointerMoved(Point::new(90.0, 50.0)));
        assert_eq!(effect, Effect::DragChanged(Vector::new(40.0, 0.0)));
        assert_eq!(state.handle(Message::PointerReleased), Effect::DragEnded);

        // The interrupted sequence does not pair with a later tap
        let effect = tap(&mut state, 50.0, 50.0, now + Duration::from_millis(200));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn single_finger_double_tap_fires_on_lift() {
        let mut state = State::default();
        let now = Instant::now();
        for (id, offset_ms) in [(1, 0), (2, 150)] {
            state.handle(Message::FingerPressed {
                id,
                position: Point::new(30.0, 30.0),
                at: now + Duration::from_millis(offset_ms),
            });
            let lifted = state.handle(Message::FingerLifted { id });
            if id == 1 {
                assert_eq!(lifted, Effect::None);
            } else {
                assert_eq!(lifted, Effect::DoubleTap);
            }
        }
    }

    #[test]
    fn drag_reports_translation_after_slop() {
        let mut state = State::default();
        pressed(&mut state, 100.0, 100.0, Instant::now());

        let jitter = state.handle(Message::PointerMoved(Point::new(101.0, 101.0)));
        assert_eq!(jitter, Effect::None);
        assert!(!state.is_dragging());

        let effect = state.handle(Message::PointerMoved(Point::new(130.0, 90.0)));
        assert_eq!(effect, Effect::DragChanged(Vector::new(30.0, -10.0)));
        assert!(state.is_dragging());

        assert_eq!(state.handle(Message::PointerReleased), Effect::DragEnded);
        assert!(!state.is_dragging());
    }

    #[test]
    fn release_without_drag_is_silent() {
        let mut state = State::default();
        pressed(&mut state, 0.0, 0.0, Instant::now());
        assert_eq!(state.handle(Message::PointerReleased), Effect::None);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut state = State::default();
        let effect = state.handle(Message::PointerMoved(Point::new(50.0, 50.0)));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn two_fingers_report_relative_magnitude() {
        let mut state = State::default();
        let now = Instant::now();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(100.0, 100.0),
            at: now,
        });
        state.handle(Message::FingerPressed {
            id: 2,
            position: Point::new(200.0, 100.0),
            at: now,
        });
        assert!(state.is_pinching());

        let effect = state.handle(Message::FingerMoved {
            id: 2,
            position: Point::new(300.0, 100.0),
        });
        assert_eq!(effect, Effect::PinchChanged(2.0));

        let effect = state.handle(Message::FingerLifted { id: 1 });
        assert_eq!(effect, Effect::PinchEnded);
        assert!(!state.is_pinching());

        // Remaining finger does not start a drag
        let effect = state.handle(Message::FingerMoved {
            id: 2,
            position: Point::new(350.0, 100.0),
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn second_finger_cancels_drag_without_drag_end() {
        let mut state = State::default();
        let now = Instant::now();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(0.0, 0.0),
            at: now,
        });
        let effect = state.handle(Message::FingerMoved {
            id: 1,
            position: Point::new(40.0, 0.0),
        });
        assert_eq!(effect, Effect::DragChanged(Vector::new(40.0, 0.0)));

        let effect = state.handle(Message::FingerPressed {
            id: 2,
            position: Point::new(100.0, 0.0),
            at: now,
        });
        assert_eq!(effect, Effect::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn single_finger_drag_ends_on_lift() {
        let mut state = State::default();
        state.handle(Message::FingerPressed {
            id: 7,
            position: Point::new(0.0, 0.0),
            at: Instant::now(),
        });
        state.handle(Message::FingerMoved {
            id: 7,
            position: Point::new(0.0, 25.0),
        });
        assert_eq!(state.handle(Message::FingerLifted { id: 7 }), Effect::DragEnded);
    }

    #[test]
    fn zoom_wheel_accumulates_from_current_scale() {
        let mut state = State::default();
        let now = Instant::now();
        let effect = state.handle(Message::ZoomWheel {
            delta: WheelDelta::Lines(1.0),
            current_scale: 2.0,
            at: now,
        });
        assert!(matches!(effect, Effect::PinchChanged(m) if (m - 2.2).abs() < 1e-4));

        let effect = state.handle(Message::ZoomWheel {
            delta: WheelDelta::Pixels(120.0),
            current_scale: 2.2,
            at: now,
        });
        if let Effect::PinchChanged(magnitude) = effect {
            assert!((magnitude - 2.4).abs() < 1e-4);
        } else {
            panic!("expected PinchChanged, got {effect:?}");
        }
    }

    #[test]
    fn zoom_wheel_commits_after_idle_tick() {
        let mut state = State::default();
        let now = Instant::now();
        state.handle(Message::ZoomWheel {
            delta: WheelDelta::Lines(-1.0),
            current_scale: 1.0,
            at: now,
        });
        assert!(state.needs_tick());

        let early = state.handle(Message::Tick(now + Duration::from_millis(100)));
        assert_eq!(early, Effect::None);

        let late = state.handle(Message::Tick(now + Duration::from_millis(300)));
        assert_eq!(late, Effect::PinchEnded);
        assert!(!state.needs_tick());
    }

    #[test]
    fn releasing_ctrl_commits_wheel_pinch() {
        let mut state = State::default();
        state.handle(Message::ZoomWheel {
            delta: WheelDelta::Lines(2.0),
            current_scale: 1.0,
            at: Instant::now(),
        });
        assert_eq!(
            state.handle(Message::ZoomModifierChanged(false)),
            Effect::PinchEnded
        );
        assert_eq!(
            state.handle(Message::ZoomModifierChanged(false)),
            Effect::None
        );
    }
}
