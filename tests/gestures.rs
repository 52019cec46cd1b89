// SPDX-License-Identifier: MPL-2.0
//! End-to-end gesture scenarios driven through the viewer component.

use iced::{Point, Vector};
use pinch_lens::ui::state::ZoomScale;
use pinch_lens::ui::viewer::component::{Effect, Message, State};
use pinch_lens::ui::viewer::controls;
use pinch_lens::ui::viewer::drawer;
use pinch_lens::ui::viewer::subcomponents::gesture;
use std::time::{Duration, Instant};

fn finger_down(state: &mut State, id: u64, x: f32, y: f32, at: Instant) -> Effect {
    state.handle_at(
        Message::Gesture(gesture::Message::FingerPressed {
            id,
            position: Point::new(x, y),
            at,
        }),
        at,
    )
}

fn finger_move(state: &mut State, id: u64, x: f32, y: f32, at: Instant) -> Effect {
    state.handle_at(
        Message::Gesture(gesture::Message::FingerMoved {
            id,
            position: Point::new(x, y),
        }),
        at,
    )
}

fn finger_up(state: &mut State, id: u64, at: Instant) -> Effect {
    state.handle_at(Message::Gesture(gesture::Message::FingerLifted { id }), at)
}

#[test]
fn pinch_out_then_pan_then_reset() {
    let start = Instant::now();
    let mut state = State::default();

    // Two fingers 100px apart spread to 300px: magnitude 3.
    finger_down(&mut state, 1, 100.0, 200.0, start);
    finger_down(&mut state, 2, 200.0, 200.0, start);
    finger_move(&mut state, 2, 400.0, 200.0, start);
    assert!((state.view_state().scale.value() - 3.0).abs() < 1e-4);

    finger_up(&mut state, 2, start);
    finger_up(&mut state, 1, start);
    assert!((state.view_state().scale.value() - 3.0).abs() < 1e-4);

    // One-finger pan while zoomed keeps the offset on release.
    let later = start + Duration::from_secs(1);
    finger_down(&mut state, 3, 50.0, 50.0, later);
    finger_move(&mut state, 3, 90.0, 20.0, later);
    finger_up(&mut state, 3, later);
    assert_eq!(state.view_state().offset, Vector::new(40.0, -30.0));

    state.handle_at(Message::Controls(controls::Message::Reset), later);
    assert!(state.view_state().is_reset());
}

#[test]
fn pinch_past_maximum_snaps_back() {
    let start = Instant::now();
    let mut state = State::default();

    finger_down(&mut state, 1, 0.0, 0.0, start);
    finger_down(&mut state, 2, 10.0, 0.0, start);
    finger_move(&mut state, 2, 80.0, 0.0, start);
    assert!(state.view_state().scale.value() > ZoomScale::MAX.value());

    let effect = finger_up(&mut state, 1, start);
    assert!(matches!(effect, Effect::ViewChanged(view) if view.scale == ZoomScale::MAX));
}

#[test]
fn pinch_in_below_fit_resets() {
    let start = Instant::now();
    let mut state = State::default();

    finger_down(&mut state, 1, 0.0, 0.0, start);
    finger_down(&mut state, 2, 100.0, 0.0, start);
    finger_move(&mut state, 2, 50.0, 0.0, start);
    assert!(state.view_state().scale.value() < 1.0);

    finger_up(&mut state, 2, start);
    assert!(state.view_state().is_reset());
}

#[test]
fn drawer_slides_with_spring_and_settles() {
    let start = Instant::now();
    let mut state = State::default();

    state.handle_at(Message::Drawer(drawer::Message::Toggle), start);
    assert!(state.view_state().is_drawer_open);
    assert!(state.is_animating(start + Duration::from_millis(100)));

    let settled = start + Duration::from_secs(2);
    state.handle_at(Message::Tick(settled), settled);
    assert!(!state.needs_tick(settled));

    state.handle_at(Message::Drawer(drawer::Message::Toggle), settled);
    assert!(!state.view_state().is_drawer_open);
}

#[test]
fn settled_state_stays_in_range_under_mixed_input() {
    let mut now = Instant::now();
    let mut state = State::default();
    let inputs = [
        Message::Controls(controls::Message::ZoomIn),
        Message::Controls(controls::Message::ZoomIn),
        Message::Controls(controls::Message::ZoomIn),
        Message::Controls(controls::Message::ZoomIn),
        Message::Controls(controls::Message::ZoomIn),
        Message::Controls(controls::Message::ZoomOut),
        Message::Controls(controls::Message::ZoomOut),
        Message::Controls(controls::Message::ZoomOut),
        Message::Controls(controls::Message::ZoomOut),
        Message::Controls(controls::Message::ZoomOut),
        Message::Controls(controls::Message::ZoomOut),
    ];

    for input in inputs {
        now += Duration::from_millis(50);
        state.handle_at(input, now);
        let view = state.view_state();
        assert!(view.scale.in_range());
        if view.scale == ZoomScale::FIT {
            assert_eq!(view.offset, Vector::new(0.0, 0.0));
        }
    }
    assert!(state.view_state().is_reset());
}
