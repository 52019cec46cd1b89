// SPDX-License-Identifier: MPL-2.0
//! Read-out of the current scale and offset shown above the image.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::scale::format_scale;
use crate::ui::styles;
use iced::widget::{container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Vector};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scale: f32,
    pub offset: Vector,
}

/// Values as displayed: the scale with up to two decimals, the offset rounded.
#[must_use]
pub fn readout(scale: f32, offset: Vector) -> (String, String, String) {
    (
        format_scale(scale),
        format!("{:.0}", round_for_display(offset.x)),
        format!("{:.0}", round_for_display(offset.y)),
    )
}

fn round_for_display(value: f32) -> f32 {
    // Avoids printing "-0"
    let rounded = value.round();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (scale, x, y) = readout(ctx.scale, ctx.offset);

    let scale_text = Text::new(ctx.i18n.tr_with_args("info-scale", &[("scale", scale.as_str())]))
        .size(typography::CAPTION);
    let offset_text = Text::new(
        ctx.i18n
            .tr_with_args("info-offset", &[("x", x.as_str()), ("y", y.as_str())]),
    )
    .size(typography::CAPTION);

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(scale_text)
        .push(Space::new().width(Length::Fill))
        .push(offset_text);

    container(row)
        .width(Length::Fixed(sizing::INFO_PANEL_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::floating_panel)
        .into()
}
