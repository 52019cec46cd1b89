// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn translucent_base(theme: &Theme, alpha: f32) -> Color {
    let base = theme.extended_palette().background.base.color;
    Color { a: alpha, ..base }
}

/// Pill-shaped translucent surface behind the info readout and controls.
///
/// The color is derived from the active Iced `Theme` background so the panel
/// stays readable in both light and dark modes.
pub fn floating_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(translucent_base(
            theme,
            opacity::OVERLAY_MEDIUM,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drawer panel sliding in from the right edge.
pub fn drawer(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(translucent_base(
            theme,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Empty thumbnail slot shown in the drawer placeholder.
pub fn thumbnail_slot(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Navigation bar strip.
pub fn navbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        shadow: shadow::SM,
        ..Default::default()
    }
}
