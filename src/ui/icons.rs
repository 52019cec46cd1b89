// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons and the bundled cover image.
//!
//! Assets are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so every frame reuses the same decoded resource.
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g., `magnifier_minus` not `zoom_out`).

use crate::ui::theming;
use iced::widget::{image, svg, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| svg::Handle::from_memory(DATA));
            themed(Svg::new(handle.clone()))
        }
    };
}

define_icon!(
    magnifier_minus,
    "magnifier_minus.svg",
    "Magnifying glass with a minus sign."
);
define_icon!(
    magnifier_plus,
    "magnifier_plus.svg",
    "Magnifying glass with a plus sign."
);
define_icon!(
    magnifier_reset,
    "magnifier_reset.svg",
    "Magnifying glass with a diagonal double arrow."
);
define_icon!(chevron_left, "chevron_left.svg", "Chevron pointing left.");
define_icon!(chevron_right, "chevron_right.svg", "Chevron pointing right.");

/// Tints an icon with the theme foreground color.
fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme, _status| svg::Style {
        color: Some(theming::foreground(theme)),
    })
}

/// Applies a square size to an icon.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Intrinsic size of the bundled cover image, in pixels.
pub const COVER_SIZE: (u32, u32) = (600, 800);

/// The static image displayed by the viewer.
pub fn cover() -> image::Handle {
    static HANDLE: OnceLock<image::Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/images/magazine-front-cover.png"
    ));
    HANDLE
        .get_or_init(|| image::Handle::from_bytes(DATA))
        .clone()
}
