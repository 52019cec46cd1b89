// SPDX-License-Identifier: MPL-2.0
//! Navigation bar showing the screen title.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::{container, Text};
use iced::{font, Element, Font, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the navigation bar.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_SM)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        });

    container(title)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}
