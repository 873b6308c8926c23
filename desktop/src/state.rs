//! Application state management

use crate::config::AppConfig;
use crate::theme::AppTheme;
use parley_core::{History, Language, LoginForm, Route, SplashScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Signup,
    ChatList,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Login => Screen::Login,
            Route::Signup => Screen::Signup,
            Route::ChatList => Screen::ChatList,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,

    // Navigation
    pub history: History,
    pub splash: SplashScreen,

    // Screens
    pub login: LoginForm,

    // Providers
    pub language: Language,
    pub theme: AppTheme,
}

impl AppState {
    pub fn new(config: AppConfig, language: Language) -> Self {
        let theme = AppTheme::for_mode(config.ui.dark_mode);

        Self {
            config,
            history: History::default(),
            splash: SplashScreen::default(),
            login: LoginForm::new(),
            language,
            theme,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.config.ui.dark_mode
    }

    /// Screen to draw; the splash covers everything until dismissed.
    pub fn current_screen(&self) -> Screen {
        if self.splash.is_visible() {
            Screen::Splash
        } else {
            self.history.current().into()
        }
    }
}
