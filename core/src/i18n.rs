//! Localized display strings

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginValidation {
    pub username: String,
    pub password: String,
    pub password_length: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub locale: String,
    pub app_name: String,
    pub loading: String,
    pub login_button: String,
    pub username_placeholder: String,
    pub password_placeholder: String,
    pub signup_check: String,
    pub signup_button: String,
    pub login_validation: LoginValidation,
    pub signup_title: String,
    pub back_to_login: String,
    pub chat_list_title: String,
    pub chat_list_empty: String,
    pub logout_button: String,
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl Language {
    pub fn english() -> Self {
        Self {
            locale: "en".to_string(),
            app_name: "Parley".to_string(),
            loading: "Loading...".to_string(),
            login_button: "Login".to_string(),
            username_placeholder: "Username".to_string(),
            password_placeholder: "Password".to_string(),
            signup_check: "Don't have an account?".to_string(),
            signup_button: "Sign up".to_string(),
            login_validation: LoginValidation {
                username: "Username is required".to_string(),
                password: "Password is required".to_string(),
                password_length: "Password must be 6 to 12 characters".to_string(),
            },
            signup_title: "Create an account".to_string(),
            back_to_login: "Back to login".to_string(),
            chat_list_title: "Chats".to_string(),
            chat_list_empty: "No conversations yet".to_string(),
            logout_button: "Log out".to_string(),
        }
    }

    pub fn spanish() -> Self {
        Self {
            locale: "es".to_string(),
            app_name: "Parley".to_string(),
            loading: "Cargando...".to_string(),
            login_button: "Iniciar sesión".to_string(),
            username_placeholder: "Usuario".to_string(),
            password_placeholder: "Contraseña".to_string(),
            signup_check: "¿No tienes una cuenta?".to_string(),
            signup_button: "Regístrate".to_string(),
            login_validation: LoginValidation {
                username: "El usuario es obligatorio".to_string(),
                password: "La contraseña es obligatoria".to_string(),
                password_length: "La contraseña debe tener entre 6 y 12 caracteres".to_string(),
            },
            signup_title: "Crear una cuenta".to_string(),
            back_to_login: "Volver al inicio de sesión".to_string(),
            chat_list_title: "Chats".to_string(),
            chat_list_empty: "Aún no hay conversaciones".to_string(),
            logout_button: "Cerrar sesión".to_string(),
        }
    }

    /// Built-in language for a locale code such as `en` or `es-MX`.
    pub fn for_locale(code: &str) -> Result<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Self::english()),
            "es" => Ok(Self::spanish()),
            _ => Err(Error::UnknownLocale(code.to_string())),
        }
    }

    /// Load a language file (JSON) for a locale that isn't built in.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let language: Self = serde_json::from_str(&content)?;
        log::info!("Loaded language '{}' from {:?}", language.locale, path);
        Ok(language)
    }
}
