// SPDX-License-Identifier: MPL-2.0
//! Page drawer sliding in from the right edge.
//!
//! Only the handle is visible while closed. The content is a column of empty
//! thumbnail slots.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, tooltip, Column, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_open: bool,
    /// Slide progress, `0.0` closed to `1.0` open.
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
}

/// Width of the visible drawer content for a slide progress.
#[must_use]
pub fn content_width(progress: f32) -> f32 {
    if progress.is_finite() {
        sizing::DRAWER_WIDTH * progress.max(0.0)
    } else {
        0.0
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (chevron, label) = if ctx.is_open {
        (icons::chevron_right(), ctx.i18n.tr("drawer-close"))
    } else {
        (icons::chevron_left(), ctx.i18n.tr("drawer-open"))
    };

    let handle = button(
        container(icons::sized(chevron, sizing::ICON_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::Toggle)
    .width(Length::Fixed(sizing::DRAWER_HANDLE_WIDTH))
    .height(Length::Fixed(sizing::DRAWER_HANDLE_HEIGHT))
    .style(styles::button::drawer_handle);
    let handle = tooltip(handle, Text::new(label), tooltip::Position::Left).gap(spacing::XXS);

    let slots = (1..=sizing::DRAWER_THUMB_COUNT).fold(
        Column::new().spacing(spacing::SM),
        |column, index| {
            let index = index.to_string();
            let caption = ctx
                .i18n
                .tr_with_args("drawer-placeholder", &[("index", index.as_str())]);
            column.push(
                container(Text::new(caption).size(typography::CAPTION))
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::DRAWER_THUMB_HEIGHT))
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center)
                    .style(styles::container::thumbnail_slot),
            )
        },
    );

    let content = container(
        container(slots)
            .width(Length::Fixed(sizing::DRAWER_WIDTH))
            .padding(spacing::SM),
    )
    .width(Length::Fixed(content_width(ctx.progress)))
    .clip(true)
    .style(styles::container::drawer);

    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(handle)
        .push(content)
        .into()
}
