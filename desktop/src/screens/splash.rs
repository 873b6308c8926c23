//! Startup splash shown until the login screen has rendered

use crate::messages::Message;
use crate::state::AppState;
use crate::theme::Backdrop;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

pub struct SplashView;

impl SplashView {
    pub fn view(state: &AppState) -> Element<'static, Message> {
        let theme = &state.theme;
        let color = theme.input_text_color(state.dark_mode());

        let content = column![
            text(&state.language.app_name)
                .size(48)
                .style(iced::theme::Text::Color(theme.app_color)),
            text(&state.language.loading)
                .size(14)
                .style(iced::theme::Text::Color(color)),
        ]
        .spacing(12)
        .align_items(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(Backdrop(theme.background))))
            .into()
    }
}
