// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! Gesture input, the controls, the drawer handle and keyboard shortcuts are
//! funneled into the [`TransformController`]; every transition it reports
//! retargets the [`TransformAnimation`] with the easing it returned.

use crate::i18n::fluent::I18n;
use crate::ui::icons;
use crate::ui::design_tokens::spacing;
use crate::ui::state::{
    Easing, TransformAnimation, TransformController, TransformSettings, ViewState,
};
use crate::ui::viewer::subcomponents::gesture;
use crate::ui::viewer::{controls, drawer, info_panel};
use crate::ui::widgets::{Transform, TransformImage};
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{container, Stack};
use iced::{alignment, Element, Length, Size};
use std::time::Instant;

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Gesture(gesture::Message),
    Controls(controls::Message),
    Drawer(drawer::Message),
    /// The screen became visible.
    Appeared,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    /// Animation frame.
    Tick(Instant),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The committed view state changed.
    ViewChanged(ViewState),
}

/// Keyboard shortcuts understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ZoomIn,
    ZoomOut,
    Reset,
    ToggleDrawer,
}

/// Maps a key press to a shortcut. Presses combined with Ctrl/Cmd or Alt are
/// left to the platform.
#[must_use]
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    let Key::Character(character) = key else {
        return None;
    };

    match character.as_str() {
        "+" | "=" => Some(Shortcut::ZoomIn),
        "-" => Some(Shortcut::ZoomOut),
        "0" => Some(Shortcut::Reset),
        "d" | "D" => Some(Shortcut::ToggleDrawer),
        _ => None,
    }
}

/// Contextual data needed to render the viewer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    controller: TransformController,
    gesture: gesture::State,
    animation: TransformAnimation,
}

impl State {
    #[must_use]
    pub fn new(settings: TransformSettings) -> Self {
        let controller = TransformController::new(settings);
        let animation = TransformAnimation::new(controller.state());
        Self {
            controller,
            gesture: gesture::State::default(),
            animation,
        }
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        self.controller.state()
    }

    #[must_use]
    pub fn controller(&self) -> &TransformController {
        &self.controller
    }

    /// Whether an animation is running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_animating(now)
    }

    /// Whether the application should keep delivering [`Message::Tick`].
    #[must_use]
    pub fn needs_tick(&self, now: Instant) -> bool {
        self.is_animating(now) || self.gesture.needs_tick()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        self.handle_at(message, Instant::now())
    }

    /// Handles `message` as if it arrived at `now`.
    pub fn handle_at(&mut self, message: Message, now: Instant) -> Effect {
        let easing = match message {
            Message::Gesture(input) => {
                let recognized = self.gesture.handle(input);
                self.apply_gesture(recognized)
            }
            Message::Controls(controls::Message::ZoomOut) => self.controller.on_zoom_out_button(),
            Message::Controls(controls::Message::Reset) => self.controller.on_reset_button(),
            Message::Controls(controls::Message::ZoomIn) => self.controller.on_zoom_in_button(),
            Message::Drawer(drawer::Message::Toggle) => self.controller.on_toggle_drawer(),
            Message::Appeared => self.controller.on_appear(),
            Message::KeyPressed { key, modifiers } => match shortcut(&key, modifiers) {
                Some(Shortcut::ZoomIn) => self.controller.on_zoom_in_button(),
                Some(Shortcut::ZoomOut) => self.controller.on_zoom_out_button(),
                Some(Shortcut::Reset) => self.controller.on_reset_button(),
                Some(Shortcut::ToggleDrawer) => self.controller.on_toggle_drawer(),
                None => None,
            },
            Message::Tick(at) => {
                self.animation.settle_if_done(at);
                let recognized = self.gesture.handle(gesture::Message::Tick(at));
                self.apply_gesture(recognized)
            }
        };

        self.commit(easing, now)
    }

    fn apply_gesture(&mut self, recognized: gesture::Effect) -> Option<Easing> {
        match recognized {
            gesture::Effect::None => None,
            gesture::Effect::DoubleTap => self.controller.on_double_tap(),
            gesture::Effect::DragChanged(translation) => {
                self.controller.on_drag_change(translation)
            }
            gesture::Effect::DragEnded => self.controller.on_drag_end(),
            gesture::Effect::PinchChanged(magnitude) => self.controller.on_pinch_change(magnitude),
            gesture::Effect::PinchEnded => self.controller.on_pinch_end(),
        }
    }

    fn commit(&mut self, easing: Option<Easing>, now: Instant) -> Effect {
        match easing {
            Some(easing) => {
                let state = *self.controller.state();
                self.animation.retarget(&state, easing, now);
                Effect::ViewChanged(state)
            }
            None => Effect::None,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let frame = self.animation.sample(Instant::now());
        let (cover_width, cover_height) = icons::COVER_SIZE;

        let surface = TransformImage::new(
            icons::cover(),
            Size::new(cover_width as f32, cover_height as f32),
            Transform {
                scale: frame.scale,
                offset: frame.offset,
                opacity: frame.opacity,
            },
            self.controller.scale().value(),
            Message::Gesture,
        );

        let state = self.controller.state();
        let info = container(info_panel::view(info_panel::ViewContext {
            i18n: ctx.i18n,
            scale: state.scale.value(),
            offset: state.offset,
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top);

        let controls = container(
            controls::view(controls::ViewContext { i18n: ctx.i18n }).map(Message::Controls),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom);

        let drawer = container(
            drawer::view(drawer::ViewContext {
                i18n: ctx.i18n,
                is_open: state.is_drawer_open,
                progress: frame.drawer,
            })
            .map(Message::Drawer),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(surface)
            .push(info)
            .push(controls)
            .push(drawer)
            .into()
    }
}

/// Builds the viewer message for a native key press.
#[must_use]
pub fn key_pressed(event: &keyboard::Event) -> Option<Message> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => {
            shortcut(key, *modifiers).map(|_| Message::KeyPressed {
                key: key.clone(),
                modifiers: *modifiers,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ZoomScale;
    use iced::{Point, Vector};
    use std::time::Duration;

    fn tap(state: &mut State, at: Instant) -> Effect {
        state.handle_at(
            Message::Gesture(gesture::Message::PointerPressed {
                position: Point::new(50.0, 50.0),
                at,
            }),
            at,
        );
        state.handle_at(Message::Gesture(gesture::Message::PointerReleased), at)
    }

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn shortcuts_map_expected_keys() {
        let none = Modifiers::empty();
        assert_eq!(shortcut(&character("+"), none), Some(Shortcut::ZoomIn));
        assert_eq!(shortcut(&character("="), none), Some(Shortcut::ZoomIn));
        assert_eq!(shortcut(&character("-"), none), Some(Shortcut::ZoomOut));
        assert_eq!(shortcut(&character("0"), none), Some(Shortcut::Reset));
        assert_eq!(shortcut(&character("D"), none), Some(Shortcut::ToggleDrawer));
        assert_eq!(shortcut(&character("x"), none), None);
        assert_eq!(shortcut(&character("+"), Modifiers::COMMAND), None);
    }

    #[test]
    fn double_tap_zooms_and_animates_with_spring() {
        let start = Instant::now();
        let mut state = State::default();

        tap(&mut state, start);
        let second_tap = start + Duration::from_millis(100);
        let effect = tap(&mut state, second_tap);

        assert!(matches!(effect, Effect::ViewChanged(view) if view.scale == ZoomScale::MAX));
        assert!(state.is_animating(second_tap));
        assert!(!state.is_animating(second_tap + Duration::from_secs(2)));
    }

    #[test]
    fn drag_then_release_at_fit_snaps_back() {
        let start = Instant::now();
        let mut state = State::default();

        state.handle_at(
            Message::Gesture(gesture::Message::PointerPressed {
                position: Point::new(10.0, 10.0),
                at: start,
            }),
            start,
        );
        let effect = state.handle_at(
            Message::Gesture(gesture::Message::PointerMoved(Point::new(40.0, 30.0))),
            start,
        );
        assert!(matches!(effect, Effect::ViewChanged(view) if view.offset == Vector::new(30.0, 20.0)));

        let effect = state.handle_at(Message::Gesture(gesture::Message::PointerReleased), start);
        assert!(matches!(effect, Effect::ViewChanged(view) if view.is_reset()));
    }

    #[test]
    fn controls_step_the_scale() {
        let now = Instant::now();
        let mut state = State::default();

        state.handle_at(Message::Controls(controls::Message::ZoomIn), now);
        state.handle_at(Message::Controls(controls::Message::ZoomIn), now);
        assert_eq!(state.view_state().scale.value(), 3.0);

        state.handle_at(Message::Controls(controls::Message::ZoomOut), now);
        assert_eq!(state.view_state().scale.value(), 2.0);

        state.handle_at(Message::Controls(controls::Message::Reset), now);
        assert!(state.view_state().is_reset());
    }

    #[test]
    fn zoom_out_when_fitted_reports_nothing() {
        let mut state = State::default();
        let effect = state.handle_at(Message::Controls(controls::Message::ZoomOut), Instant::now());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn key_press_toggles_drawer() {
        let now = Instant::now();
        let mut state = State::default();
        state.handle_at(
            Message::KeyPressed {
                key: character("d"),
                modifiers: Modifiers::empty(),
            },
            now,
        );
        assert!(state.view_state().is_drawer_open);
        assert!(state.needs_tick(now));
    }

    #[test]
    fn appear_fades_in_once() {
        let now = Instant::now();
        let mut state = State::default();
        assert!(matches!(state.handle_at(Message::Appeared, now), Effect::ViewChanged(_)));
        assert_eq!(state.handle_at(Message::Appeared, now), Effect::None);
        assert!(state.view_state().is_animating_entry);
    }

    #[test]
    fn idle_wheel_pinch_is_committed_on_tick() {
        let start = Instant::now();
        let mut state = State::default();

        state.handle_at(
            Message::Gesture(gesture::Message::ZoomWheel {
                delta: gesture::WheelDelta::Lines(-3.0),
                current_scale: 1.0,
                at: start,
            }),
            start,
        );
        assert!(state.view_state().scale.value() < 1.0);
        assert!(state.needs_tick(start));

        let later = start + Duration::from_millis(400);
        state.handle_at(Message::Tick(later), later);
        assert!(state.view_state().is_reset());
    }

    #[test]
    fn viewer_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
