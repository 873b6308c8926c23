//! Chat list destination screen

use crate::messages::Message;
use crate::state::AppState;
use crate::theme::Backdrop;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

pub struct ChatListScreen;

impl ChatListScreen {
    pub fn view(state: &AppState) -> Element<'static, Message> {
        let header = Self::header(state);

        let empty = container(
            text(&state.language.chat_list_empty)
                .size(14)
                .style(iced::theme::Text::Color(state.theme.placeholder)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y();

        let content = column![header, empty]
            .width(Length::Fill)
            .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(Backdrop(
                state.theme.background,
            ))))
            .into()
    }

    fn header(state: &AppState) -> Element<'static, Message> {
        let lang = &state.language;

        let title = text(&lang.chat_list_title)
            .size(24)
            .style(iced::theme::Text::Color(
                state.theme.input_text_color(state.dark_mode()),
            ));

        let logout_btn = button(
            text(&lang.logout_button)
                .size(14)
                .style(iced::theme::Text::Color(state.theme.app_color)),
        )
        .padding(8)
        .on_press(Message::Logout)
        .style(iced::theme::Button::Text);

        row![title, Space::with_width(Length::Fill), logout_btn]
            .padding(16)
            .align_items(Alignment::Center)
            .into()
    }
}
