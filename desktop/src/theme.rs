//! Theme definitions for Parley Desktop

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppTheme {
    pub background: Color,
    pub surface: Color,
    pub app_color: Color,
    pub text_color: Color,
    pub light_text_color: Color,
    pub placeholder: Color,
    pub error_color: Color,
    pub border: Color,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb(0.11, 0.11, 0.12),      // #1c1c1e
            surface: Color::from_rgb(0.17, 0.17, 0.18),         // #2c2c2e
            app_color: Color::from_rgb(0.0, 0.48, 1.0),         // #007aff
            text_color: Color::from_rgb(0.0, 0.0, 0.0),
            light_text_color: Color::from_rgb(1.0, 1.0, 1.0),
            placeholder: Color::from_rgb(0.4, 0.4, 0.4),
            error_color: Color::from_rgb(1.0, 0.27, 0.23),      // #ff453a
            border: Color::from_rgb(0.3, 0.3, 0.3),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::from_rgb(0.95, 0.95, 0.97),      // #f2f2f7
            surface: Color::from_rgb(1.0, 1.0, 1.0),
            app_color: Color::from_rgb(0.0, 0.48, 1.0),
            text_color: Color::from_rgb(0.0, 0.0, 0.0),
            light_text_color: Color::from_rgb(1.0, 1.0, 1.0),
            placeholder: Color::from_rgb(0.6, 0.6, 0.6),
            error_color: Color::from_rgb(1.0, 0.23, 0.19),
            border: Color::from_rgb(0.8, 0.8, 0.8),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Text color for typed input; light text on dark backgrounds.
    pub fn input_text_color(&self, dark_mode: bool) -> Color {
        if dark_mode {
            self.light_text_color
        } else {
            self.text_color
        }
    }
}

/// Rounded card behind the auth form.
pub struct AuthCard {
    pub background: Color,
    pub border: Color,
}

impl container::StyleSheet for AuthCard {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.background)),
            border: Border {
                color: self.border,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Full-window background fill.
pub struct Backdrop(pub Color);

impl container::StyleSheet for Backdrop {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.0)),
            ..Default::default()
        }
    }
}

/// Underlined input whose value color follows the dark-mode flag.
pub struct FieldInput {
    pub value: Color,
    pub placeholder: Color,
    pub border: Color,
    pub focus: Color,
    pub error: Option<Color>,
}

impl FieldInput {
    fn appearance(&self, border: Color) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                color: self.error.unwrap_or(border),
                width: 1.0,
                radius: 4.0.into(),
            },
            icon_color: self.placeholder,
        }
    }
}

impl text_input::StyleSheet for FieldInput {
    type Style = iced::Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        self.appearance(self.border)
    }

    fn focused(&self, _style: &Self::Style) -> text_input::Appearance {
        self.appearance(self.focus)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        self.placeholder
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        self.value
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        self.placeholder
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color {
            a: 0.3,
            ..self.focus
        }
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }
}

/// Filled button in the app color.
pub struct PrimaryButton(pub Color);

impl button::StyleSheet for PrimaryButton {
    type Style = iced::Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.0)),
            text_color: Color::WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
