//! Sign-up destination screen

use crate::messages::Message;
use crate::state::AppState;
use crate::theme::Backdrop;
use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

pub struct SignupScreen;

impl SignupScreen {
    pub fn view(state: &AppState) -> Element<'static, Message> {
        let lang = &state.language;
        let theme = &state.theme;

        let content = column![
            text(&lang.signup_title)
                .size(28)
                .style(iced::theme::Text::Color(theme.input_text_color(state.dark_mode()))),
            Space::with_height(20),
            button(
                text(&lang.back_to_login)
                    .size(14)
                    .style(iced::theme::Text::Color(theme.app_color)),
            )
            .on_press(Message::GoBack)
            .style(iced::theme::Button::Text),
        ]
        .align_items(Alignment::Center)
        .padding(40);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(Backdrop(theme.background))))
            .into()
    }
}
