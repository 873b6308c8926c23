//! Login form state and submit logic
//!
//! The form owns the two field values and the error map of the last submit.
//! Validation is delegated to a [`Schema`] built from the active language, and
//! navigation goes through whatever [`Navigator`] the caller supplies.

use crate::i18n::Language;
use crate::router::{Navigator, Route};
use crate::splash::SplashScreen;
use crate::validation::{FieldSource, Rule, Schema, ValidationErrors};

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 12;

/// Snapshot of the values being validated.
#[derive(Debug, Clone, Copy)]
pub struct LoginFields<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl FieldSource for LoginFields<'_> {
    fn value(&self, field: &str) -> Option<&str> {
        match field {
            USERNAME => Some(self.username),
            PASSWORD => Some(self.password),
            _ => None,
        }
    }
}

pub fn login_schema(language: &Language) -> Schema {
    let messages = &language.login_validation;

    Schema::new()
        .field(USERNAME, vec![Rule::required(&messages.username)])
        .field(
            PASSWORD,
            vec![
                Rule::required(&messages.password),
                Rule::length(
                    Some(PASSWORD_MIN_LEN),
                    Some(PASSWORD_MAX_LEN),
                    &messages.password_length,
                ),
            ],
        )
}

pub fn validate(fields: LoginFields<'_>, language: &Language) -> ValidationErrors {
    login_schema(language).validate(&fields)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigated(Route),
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    errors: ValidationErrors,
    mounted: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// First-render side effect: dismiss the splash once per mount.
    pub fn mount(&mut self, splash: &mut SplashScreen) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        splash.hide();
    }

    /// Drop all screen-local state, as when the screen is left.
    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    pub fn submit<N: Navigator + ?Sized>(
        &mut self,
        language: &Language,
        navigator: &mut N,
    ) -> SubmitOutcome {
        let errors = validate(
            LoginFields {
                username: &self.username,
                password: &self.password,
            },
            language,
        );

        if errors.is_empty() {
            log::debug!("login form valid, opening chat list");
            self.errors = errors;
            navigator.push(Route::CHAT_LIST_PATH);
            SubmitOutcome::Navigated(Route::ChatList)
        } else {
            log::debug!("login form rejected: {} field(s)", errors.len());
            self.errors = errors;
            SubmitOutcome::Rejected
        }
    }

    pub fn go_to_signup<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::SIGNUP_PATH);
    }
}
