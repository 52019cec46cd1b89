// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: zoom out, reset and zoom in buttons.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, tooltip, Row, Svg, Text};
use iced::{alignment::Vertical, Element};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomOut,
    Reset,
    ZoomIn,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(control(
            icons::magnifier_minus(),
            ctx.i18n.tr("controls-zoom-out"),
            Message::ZoomOut,
        ))
        .push(control(
            icons::magnifier_reset(),
            ctx.i18n.tr("controls-reset"),
            Message::Reset,
        ))
        .push(control(
            icons::magnifier_plus(),
            ctx.i18n.tr("controls-zoom-in"),
            Message::ZoomIn,
        ));

    container(row)
        .padding([spacing::XS, spacing::LG])
        .style(styles::container::floating_panel)
        .into()
}

/// A 36px icon button with a label shown on hover.
fn control<'a>(icon: Svg<'static>, label: String, message: Message) -> Element<'a, Message> {
    let button = button(icons::sized(icon, sizing::ICON_LG))
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::icon);

    tooltip(button, Text::new(label), tooltip::Position::Top)
        .gap(spacing::XS)
        .padding(spacing::XS)
        .style(styles::container::floating_panel)
        .into()
}
