// SPDX-License-Identifier: MPL-2.0
//! Image surface drawing the cover with the current scale, offset and opacity.
//!
//! The widget owns no transform logic: it draws what it is given and forwards
//! raw pointer, touch and Ctrl + wheel input as [`gesture::Message`]s.

use crate::ui::design_tokens::{radius, shadow, spacing};
use crate::ui::viewer::subcomponents::gesture::{self, WheelDelta};
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::image;
use iced::{keyboard, touch, Color, Element, Event, Length, Point, Rectangle, Size, Theme, Vector};
use std::time::Instant;

/// Values sampled from the transform animation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub offset: Vector,
    pub opacity: f32,
}

/// Fits an image of `image_size` inside `bounds` (contain), keeping `padding`
/// on every side, centered.
#[must_use]
pub fn fit_rect(bounds: Rectangle, image_size: Size, padding: f32) -> Rectangle {
    let available = Size::new(
        (bounds.width - 2.0 * padding).max(0.0),
        (bounds.height - 2.0 * padding).max(0.0),
    );
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return Rectangle::new(bounds.center(), Size::ZERO);
    }

    let ratio = (available.width / image_size.width).min(available.height / image_size.height);
    let size = Size::new(image_size.width * ratio, image_size.height * ratio);
    let center = bounds.center();

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

/// Applies the transform to a fitted rectangle.
///
/// Scaling happens around the fitted center and scales the pan offset along
/// with the image.
#[must_use]
pub fn transformed_rect(fitted: Rectangle, scale: f32, offset: Vector) -> Rectangle {
    let center = fitted.center();
    let size = Size::new(fitted.width * scale, fitted.height * scale);

    Rectangle::new(
        Point::new(
            center.x + offset.x * scale - size.width / 2.0,
            center.y + offset.y * scale - size.height / 2.0,
        ),
        size,
    )
}

#[derive(Debug, Default)]
struct State {
    zoom_modifier: bool,
}

/// Translates a native event into gesture input, relative to `bounds`.
fn translate(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    zoom_modifier: bool,
    committed_scale: f32,
    now: Instant,
) -> Option<gesture::Message> {
    let relative = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
            .position_in(bounds)
            .map(|position| gesture::Message::PointerPressed { position, at: now }),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(gesture::Message::PointerMoved(relative(*position)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(gesture::Message::PointerReleased)
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) if zoom_modifier => {
            if !cursor.is_over(bounds) {
                return None;
            }
            let delta = match delta {
                mouse::ScrollDelta::Lines { y, .. } => WheelDelta::Lines(*y),
                mouse::ScrollDelta::Pixels { y, .. } => WheelDelta::Pixels(*y),
            };
            Some(gesture::Message::ZoomWheel {
                delta,
                current_scale: committed_scale,
                at: now,
            })
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            bounds.contains(*position).then(|| gesture::Message::FingerPressed {
                id: id.0,
                position: relative(*position),
                at: now,
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            Some(gesture::Message::FingerMoved {
                id: id.0,
                position: relative(*position),
            })
        }
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) => Some(gesture::Message::FingerLifted { id: id.0 }),
        _ => None,
    }
}

/// Custom widget rendering the transformed image.
pub struct TransformImage<'a, Message> {
    handle: image::Handle,
    image_size: Size,
    transform: Transform,
    committed_scale: f32,
    on_input: Box<dyn Fn(gesture::Message) -> Message + 'a>,
}

impl<'a, Message> TransformImage<'a, Message> {
    pub fn new(
        handle: image::Handle,
        image_size: Size,
        transform: Transform,
        committed_scale: f32,
        on_input: impl Fn(gesture::Message) -> Message + 'a,
    ) -> Self {
        Self {
            handle,
            image_size,
            transform,
            committed_scale,
            on_input: Box::new(on_input),
        }
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for TransformImage<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let opacity = self.transform.opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }

        let fitted = fit_rect(bounds, self.image_size, spacing::MD);
        let image_bounds =
            transformed_rect(fitted, self.transform.scale.max(0.0), self.transform.offset);
        let corner = radius::IMAGE * self.transform.scale.max(0.0);

        renderer.with_layer(bounds, |renderer| {
            let card = theme.extended_palette().background.base.color;
            renderer.fill_quad(
                renderer::Quad {
                    bounds: image_bounds,
                    border: iced::Border {
                        radius: corner.into(),
                        ..Default::default()
                    },
                    shadow: iced::Shadow {
                        color: Color {
                            a: shadow::IMAGE.color.a * opacity,
                            ..shadow::IMAGE.color
                        },
                        ..shadow::IMAGE
                    },
                    snap: true,
                },
                Color { a: opacity, ..card },
            );

            let image = advanced_image::Image::<image::Handle> {
                handle: self.handle.clone(),
                filter_method: advanced_image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity,
                snap: true,
                border_radius: corner.into(),
            };
            renderer.draw_image(image, image_bounds, bounds);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();

        if let Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) = event {
            let pressed = modifiers.command();
            if pressed != state.zoom_modifier {
                state.zoom_modifier = pressed;
                shell.publish((self.on_input)(gesture::Message::ZoomModifierChanged(
                    pressed,
                )));
            }
            return;
        }

        let bounds = layout.bounds();
        if let Some(message) = translate(
            event,
            bounds,
            cursor,
            state.zoom_modifier,
            self.committed_scale,
            Instant::now(),
        ) {
            let captures = matches!(
                message,
                gesture::Message::PointerPressed { .. }
                    | gesture::Message::FingerPressed { .. }
                    | gesture::Message::ZoomWheel { .. }
            );
            shell.publish((self.on_input)(message));
            if captures {
                shell.capture_event();
            }
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) && self.committed_scale > 1.0 {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<TransformImage<'a, Message>> for Element<'a, Message> {
    fn from(widget: TransformImage<'a, Message>) -> Self {
        Element::new(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 400.0))
    }

    #[test]
    fn fit_rect_contains_tall_image() {
        let fitted = fit_rect(bounds(), Size::new(600.0, 800.0), 0.0);
        assert_eq!(fitted.height, 400.0);
        assert_eq!(fitted.width, 300.0);
        assert_eq!(fitted.x, 50.0);
        assert_eq!(fitted.y, 0.0);
    }

    #[test]
    fn fit_rect_respects_padding() {
        let fitted = fit_rect(bounds(), Size::new(100.0, 100.0), 16.0);
        assert_eq!(fitted.width, 368.0);
        assert_eq!(fitted.x, 16.0);
    }

    #[test]
    fn fit_rect_handles_empty_image() {
        let fitted = fit_rect(bounds(), Size::ZERO, 0.0);
        assert_eq!(fitted.width, 0.0);
    }

    #[test]
    fn transformed_rect_scales_around_center() {
        let fitted = Rectangle::new(Point::new(100.0, 100.0), Size::new(200.0, 200.0));
        let zoomed = transformed_rect(fitted, 2.0, Vector::new(0.0, 0.0));
        assert_eq!(zoomed.center(), fitted.center());
        assert_eq!(zoomed.width, 400.0);
    }

    #[test]
    fn transformed_rect_scales_offset() {
        let fitted = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let moved = transformed_rect(fitted, 3.0, Vector::new(10.0, -5.0));
        assert_eq!(moved.center(), Point::new(80.0, 35.0));
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(900.0, 900.0));
        assert!(translate(&event, bounds(), cursor, false, 1.0, Instant::now()).is_none());
    }

    #[test]
    fn press_inside_bounds_is_forwarded() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(20.0, 30.0));
        let message = translate(&event, bounds(), cursor, false, 1.0, Instant::now());
        assert!(matches!(
            message,
            Some(gesture::Message::PointerPressed { position, .. }) if position == Point::new(20.0, 30.0)
        ));
    }

    #[test]
    fn wheel_without_modifier_is_ignored() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        let cursor = mouse::Cursor::Available(Point::new(20.0, 30.0));
        assert!(translate(&event, bounds(), cursor, false, 1.0, Instant::now()).is_none());
        assert!(translate(&event, bounds(), cursor, true, 1.0, Instant::now()).is_some());
    }

    #[test]
    fn finger_lost_ends_touch() {
        let event = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(3),
            position: Point::ORIGIN,
        });
        let message = translate(&event, bounds(), mouse::Cursor::Unavailable, false, 1.0, Instant::now());
        assert!(matches!(message, Some(gesture::Message::FingerLifted { id: 3 })));
    }
}
