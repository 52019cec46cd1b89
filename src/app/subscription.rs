// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed to the viewer when no widget captured them.
//! Animation frames are only requested while the viewer needs them.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes uncaptured key presses to the viewer.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match (event, status) {
        (event::Event::Keyboard(keyboard_event), event::Status::Ignored) => {
            component::key_pressed(&keyboard_event).map(Message::Viewer)
        }
        _ => None,
    })
}

/// Creates the animation frame subscription while something is moving.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(FRAME_INTERVAL).map(|at| Message::Viewer(component::Message::Tick(at)))
    } else {
        Subscription::none()
    }
}
