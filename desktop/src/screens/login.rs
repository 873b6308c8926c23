//! Login screen for Parley Desktop

use crate::messages::Message;
use crate::state::AppState;
use crate::theme::{AppTheme, AuthCard, Backdrop, FieldInput, PrimaryButton};
use iced::widget::{button, column, container, row, text, text_input, Column, Space, TextInput};
use iced::{Alignment, Element, Length};
use parley_core::login::{PASSWORD, USERNAME};

pub struct LoginScreen;

impl LoginScreen {
    pub fn view(state: &AppState) -> Element<'static, Message> {
        let lang = &state.language;
        let form = &state.login;

        let username = Self::field(
            state,
            text_input(&lang.username_placeholder, form.username())
                .on_input(Message::UsernameChanged)
                .on_submit(Message::SubmitLogin),
            form.error(USERNAME),
        );

        let password = Self::field(
            state,
            text_input(&lang.password_placeholder, form.password())
                .on_input(Message::PasswordChanged)
                .on_submit(Message::SubmitLogin)
                .secure(true),
            form.error(PASSWORD),
        );

        let card = auth_layout(
            &state.theme,
            &lang.app_name,
            &lang.login_button,
            Message::SubmitLogin,
            vec![username, password],
        );

        // Sign-up prompt
        let footer = column![
            text(&lang.signup_check)
                .size(13)
                .style(iced::theme::Text::Color(
                    state.theme.input_text_color(state.dark_mode())
                )),
            button(
                text(&lang.signup_button)
                    .size(13)
                    .style(iced::theme::Text::Color(state.theme.app_color)),
            )
            .on_press(Message::GoToSignup)
            .style(iced::theme::Button::Text),
        ]
        .spacing(2)
        .padding([0, 0, 10, 0])
        .align_items(Alignment::Center);

        let content = column![
            Space::with_height(Length::FillPortion(1)),
            card,
            Space::with_height(Length::FillPortion(1)),
            footer,
        ]
        .align_items(Alignment::Center)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .style(iced::theme::Container::Custom(Box::new(Backdrop(
                state.theme.background,
            ))))
            .into()
    }

    fn field(
        state: &AppState,
        input: TextInput<'static, Message>,
        error: Option<&str>,
    ) -> Element<'static, Message> {
        let theme = &state.theme;

        let input = input
            .padding([10, 8])
            .size(15)
            .style(iced::theme::TextInput::Custom(Box::new(FieldInput {
                value: theme.input_text_color(state.dark_mode()),
                placeholder: theme.placeholder,
                border: theme.border,
                focus: theme.app_color,
                error: error.map(|_| theme.error_color),
            })));

        let mut field = Column::new().push(input).spacing(4);

        if let Some(error) = error {
            field = field.push(
                text(error)
                    .size(12)
                    .style(iced::theme::Text::Color(theme.error_color)),
            );
        }

        field.into()
    }
}

/// Card with a title, the given fields and a full-width action button.
pub fn auth_layout(
    theme: &AppTheme,
    title: &str,
    button_label: &str,
    on_press: Message,
    fields: Vec<Element<'static, Message>>,
) -> Element<'static, Message> {
    let title = row![text(title)
        .size(32)
        .style(iced::theme::Text::Color(theme.app_color))]
    .padding([0, 0, 12, 0]);

    let fields = Column::with_children(fields).spacing(16);

    let action = button(
        text(button_label)
            .width(Length::Fill)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(14)
    .on_press(on_press)
    .style(iced::theme::Button::Custom(Box::new(PrimaryButton(
        theme.app_color,
    ))));

    let body = column![title, fields, Space::with_height(8), action]
        .spacing(12)
        .align_items(Alignment::Center)
        .max_width(360);

    container(body)
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(AuthCard {
            background: theme.surface,
            border: theme.border,
        })))
        .into()
}
