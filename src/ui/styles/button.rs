// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless icon button used by the zoom controls.
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let foreground = theming::foreground(theme);
    let (alpha, background) = match status {
        button::Status::Hovered => (
            opacity::OPAQUE,
            Some(Background::Color(Color {
                a: opacity::SHADOW,
                ..palette::PRIMARY_400
            })),
        ),
        button::Status::Pressed => (opacity::OVERLAY_PRESSED, None),
        button::Status::Disabled => (opacity::OVERLAY_MEDIUM, None),
        button::Status::Active => (opacity::OVERLAY_HOVER, None),
    };

    button::Style {
        background,
        text_color: Color {
            a: alpha,
            ..foreground
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drawer handle sticking out of the right edge.
pub fn drawer_handle(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base.color;
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::SURFACE,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..base })),
        text_color: theming::foreground(theme),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_button_is_transparent_at_rest() {
        let style = icon(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn icon_button_highlights_on_hover() {
        let style = icon(&Theme::Light, button::Status::Hovered);
        assert!(style.background.is_some());
    }
}
