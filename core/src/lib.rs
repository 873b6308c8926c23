//! Parley Core Library
//!
//! Toolkit-independent pieces of the Parley chat client.
//! Provides: login form state, declarative validation, routing, and localization.

pub mod error;
pub mod i18n;
pub mod login;
pub mod router;
pub mod splash;
pub mod validation;

pub use error::*;
pub use i18n::{Language, LoginValidation, DEFAULT_LOCALE};
pub use login::{LoginFields, LoginForm, SubmitOutcome};
pub use router::{History, Navigator, Route};
pub use splash::SplashScreen;
pub use validation::{FieldSource, Rule, Schema, ValidationErrors};
