use crate::app::{LoadState, Message, MisakiApp};
use crate::ui::components;
use iced::widget::{container, row, scrollable, text, Column};
use iced::{Center, Element, Length};

pub fn main_view(app: &MisakiApp) -> Element<Message> {
    let content: Element<Message> = match &app.load_state {
        LoadState::Loading => centered_message(text("Loading commands...").size(18)),
        LoadState::Failed(e) => centered_message(text(e.clone()).size(16).color([0.8, 0.2, 0.2])),
        LoadState::Loaded => row![
            container(command_list_view(app))
                .width(Length::Fixed(280.0))
                .height(Length::Fill)
                .style(container::bordered_box),
            container(command_details_view(app))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(20)
        ]
        .into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn centered_message<'a>(message: iced::widget::Text<'a>) -> Element<'a, Message> {
    container(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn command_list_view(app: &MisakiApp) -> Element<Message> {
    if app.board.is_empty() {
        return centered_message(text("The server has no commands").size(14));
    }

    let selected = app.selected.as_deref();
    let column = app
        .board
        .items()
        .iter()
        .fold(Column::new().spacing(5).padding(10), |column, item| {
            column.push(components::command_button(
                item,
                selected == Some(item.name.as_str()),
            ))
        });

    scrollable(column).height(Length::Fill).into()
}

fn command_details_view(app: &MisakiApp) -> Element<Message> {
    match app.selected_item() {
        Some(item) => {
            let mut details = Column::new()
                .spacing(15)
                .push(components::command_header(&item))
                .push(text("Programs:").size(18))
                .push(
                    container(scrollable(components::program_lines(&item)))
                        .padding(10)
                        .style(container::bordered_box)
                        .width(Length::Fill),
                );

            if item.output {
                details = details.push(text("This command replies with its output").size(12));
            }

            details.into()
        }
        None => Column::new()
            .push(text("Click a command to trigger it").size(18))
            .align_x(Center)
            .width(Length::Fill)
            .into(),
    }
}
