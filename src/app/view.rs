// SPDX-License-Identifier: MPL-2.0
//! Root view composition: navbar above the viewer.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::viewer::component;
use iced::widget::Column;
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let viewer = ctx
        .viewer
        .view(component::ViewContext { i18n: ctx.i18n })
        .map(Message::Viewer);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar::view(navbar::ViewContext { i18n: ctx.i18n }))
        .push(viewer)
        .into()
}
