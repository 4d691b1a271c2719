use crate::app::Message;
use crate::utils::display::{get_command_display_name, status_color, status_label};
use iced::widget::{button, column, row, text, Column, Text};
use iced::{Element, Font, Length};
use misaki_core::status::Status;
use misaki_core::view::ItemView;

pub fn status_badge<'a>(status: Status) -> Text<'a> {
    let badge = text(status_label(status)).size(12);
    match status_color(status) {
        Some(color) => badge.color(color),
        None => badge,
    }
}

/// One entry of the command list. Pressing it triggers the command.
pub fn command_button<'a>(item: &ItemView, is_selected: bool) -> Element<'a, Message> {
    let mut label = column![text(item.name.clone()).size(16)].spacing(2);
    if !item.memo.is_empty() {
        label = label.push(text(item.memo.clone()).size(12));
    }

    button(
        row![
            label.width(Length::Fill),
            status_badge(item.status)
        ]
        .spacing(8),
    )
    .width(Length::Fill)
    .padding(10)
    .style(if is_selected {
        button::primary
    } else {
        button::secondary
    })
    .on_press(Message::CommandPressed(item.name.clone()))
    .into()
}

pub fn program_lines<'a>(item: &ItemView) -> Column<'a, Message> {
    item.program_lines.iter().fold(Column::new().spacing(4), |lines, line| {
        lines.push(text(format!("$ {line}")).font(Font::MONOSPACE).size(14))
    })
}

pub fn command_header<'a>(item: &ItemView) -> Element<'a, Message> {
    row![
        text(get_command_display_name(item)).size(24).width(Length::Fill),
        status_badge(item.status).size(16)
    ]
    .spacing(10)
    .into()
}
