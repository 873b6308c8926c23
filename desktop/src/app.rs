//! Main application module for Parley Desktop

use crate::config::{AppConfig, UiConfig};
use crate::messages::Message;
use crate::screens::{
    chat_list::ChatListScreen, login::LoginScreen, signup::SignupScreen, splash::SplashView,
};
use crate::state::{AppState, Screen};

use iced::widget::container;
use iced::{executor, Application, Command, Element, Length};
use parley_core::{History, Language, Route};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct Flags {
    pub data_dir: PathBuf,
    pub config: AppConfig,
}

pub struct Parley {
    state: AppState,
}

impl Application for Parley {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = iced::Theme;
    type Flags = Flags;

    fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
        let language = resolve_language(&flags.config.ui, &flags.data_dir);
        let state = AppState::new(flags.config, language);

        // Login is the root route; mount it once the first frame is up
        let command = Command::perform(async {}, |_| Message::LoginMounted);

        (Self { state }, command)
    }

    fn title(&self) -> String {
        let lang = &self.state.language;
        match self.state.current_screen() {
            Screen::Splash => lang.app_name.clone(),
            Screen::Login => format!("{} - {}", lang.app_name, lang.login_button),
            Screen::Signup => format!("{} - {}", lang.app_name, lang.signup_title),
            Screen::ChatList => format!("{} - {}", lang.app_name, lang.chat_list_title),
        }
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        let previous = self.state.history.current();

        match message {
            // ============= Navigation =============
            Message::GoBack => {
                self.state.history.go_back();
            }

            Message::Logout => {
                self.state.history = History::default();
            }

            // ============= Login =============
            Message::LoginMounted => {
                if previous == Route::Login {
                    self.state.login.mount(&mut self.state.splash);
                }
                return Command::none();
            }

            Message::UsernameChanged(username) => {
                self.state.login.set_username(username);
                return Command::none();
            }

            Message::PasswordChanged(password) => {
                self.state.login.set_password(password);
                return Command::none();
            }

            Message::SubmitLogin => {
                self.state
                    .login
                    .submit(&self.state.language, &mut self.state.history);
            }

            Message::GoToSignup => {
                self.state.login.go_to_signup(&mut self.state.history);
            }
        }

        self.route_changed(previous)
    }

    fn view(&self) -> Element<Self::Message> {
        let content: Element<Self::Message> = match self.state.current_screen() {
            Screen::Splash => SplashView::view(&self.state),
            Screen::Login => LoginScreen::view(&self.state),
            Screen::Signup => SignupScreen::view(&self.state),
            Screen::ChatList => ChatListScreen::view(&self.state),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> iced::Theme {
        if self.state.dark_mode() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Parley {
    /// Mount/unmount bookkeeping after the history may have moved.
    fn route_changed(&mut self, previous: Route) -> Command<Message> {
        let current = self.state.history.current();
        if current == previous {
            return Command::none();
        }

        tracing::info!("Navigated {} -> {}", previous.path(), current.path());

        if previous == Route::Login {
            self.state.login.unmount();
        }

        if current == Route::Login {
            Command::perform(async {}, |_| Message::LoginMounted)
        } else {
            Command::none()
        }
    }
}

/// Language file (relative to the data dir) first, then the built-in locale.
fn resolve_language(ui: &UiConfig, data_dir: &Path) -> Language {
    if let Some(ref file) = ui.language_file {
        let path = data_dir.join(file);
        match Language::load(&path) {
            Ok(language) => return language,
            Err(e) => tracing::warn!("Failed to load language file {:?}: {}", path, e),
        }
    }

    Language::for_locale(&ui.locale).unwrap_or_else(|e| {
        tracing::warn!("{}, falling back to English", e);
        Language::english()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::login::{PASSWORD, USERNAME};

    fn app() -> Parley {
        let (app, _) = Parley::new(Flags::default());
        app
    }

    fn mounted() -> Parley {
        let mut app = app();
        let _ = app.update(Message::LoginMounted);
        app
    }

    #[test]
    fn test_splash_until_mounted() {
        let mut app = app();
        assert_eq!(app.state.current_screen(), Screen::Splash);

        let _ = app.update(Message::LoginMounted);
        assert_eq!(app.state.current_screen(), Screen::Login);
        assert!(app.state.login.is_mounted());
    }

    #[test]
    fn test_valid_submit_opens_chat_list() {
        let mut app = mounted();
        let _ = app.update(Message::UsernameChanged("alice".to_string()));
        let _ = app.update(Message::PasswordChanged("secret1".to_string()));
        let _ = app.update(Message::SubmitLogin);

        assert_eq!(app.state.current_screen(), Screen::ChatList);
        // Leaving the screen discards its state
        assert_eq!(app.state.login.username(), "");
        assert!(!app.state.login.is_mounted());
    }

    #[test]
    fn test_invalid_submit_stays_with_errors() {
        let mut app = mounted();
        let _ = app.update(Message::SubmitLogin);

        assert_eq!(app.state.current_screen(), Screen::Login);
        assert!(app.state.login.error(USERNAME).is_some());
        assert!(app.state.login.error(PASSWORD).is_some());
    }

    #[test]
    fn test_signup_and_back() {
        let mut app = mounted();
        let _ = app.update(Message::SubmitLogin);
        let _ = app.update(Message::GoToSignup);
        assert_eq!(app.state.current_screen(), Screen::Signup);

        let _ = app.update(Message::GoBack);
        assert_eq!(app.state.current_screen(), Screen::Login);
        assert!(app.state.login.errors().is_empty());
    }

    #[test]
    fn test_logout_returns_to_root() {
        let mut app = mounted();
        let _ = app.update(Message::UsernameChanged("alice".to_string()));
        let _ = app.update(Message::PasswordChanged("secret1".to_string()));
        let _ = app.update(Message::SubmitLogin);

        let _ = app.update(Message::Logout);
        assert_eq!(app.state.current_screen(), Screen::Login);
        assert_eq!(app.state.history.len(), 1);
    }

    #[test]
    fn test_keystroke_keeps_errors() {
        let mut app = mounted();
        let _ = app.update(Message::SubmitLogin);
        let errors = app.state.login.errors().clone();

        let _ = app.update(Message::PasswordChanged("p".to_string()));
        assert_eq!(app.state.login.errors(), &errors);
        assert_eq!(app.state.login.username(), "");
    }

    #[test]
    fn test_language_fallbacks() {
        let mut ui = AppConfig::default().ui;
        let dir = tempfile::tempdir().unwrap();

        ui.locale = "xx".to_string();
        assert_eq!(resolve_language(&ui, dir.path()), Language::english());

        ui.locale = "es".to_string();
        ui.language_file = Some(PathBuf::from("missing.json"));
        assert_eq!(resolve_language(&ui, dir.path()), Language::spanish());
    }

    #[test]
    fn test_language_file_relative_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut custom = Language::english();
        custom.locale = "en-pirate".to_string();
        custom.login_button = "Board".to_string();
        std::fs::write(
            dir.path().join("pirate.json"),
            serde_json::to_string(&custom).unwrap(),
        )
        .unwrap();

        let mut ui = AppConfig::default().ui;
        ui.language_file = Some(PathBuf::from("pirate.json"));
        assert_eq!(resolve_language(&ui, dir.path()), custom);
    }
}
