//! End-to-end login screen flow against the real history stack

use parley_core::login::{PASSWORD, USERNAME};
use parley_core::{History, Language, LoginForm, Navigator, Route, SplashScreen, SubmitOutcome};

#[test]
fn test_login_then_back() {
    let lang = Language::english();
    let mut history = History::default();
    let mut splash = SplashScreen::default();
    let mut form = LoginForm::new();

    form.mount(&mut splash);
    assert!(!splash.is_visible());

    form.set_username("alice".to_string());
    form.set_password("secret1".to_string());
    assert_eq!(
        form.submit(&lang, &mut history),
        SubmitOutcome::Navigated(Route::ChatList)
    );
    assert_eq!(history.current(), Route::ChatList);

    assert_eq!(history.go_back(), Route::Login);
}

#[test]
fn test_rejected_submit_stays_on_login() {
    let lang = Language::english();
    let mut history = History::default();
    let mut form = LoginForm::new();

    form.set_username("alice".to_string());
    form.set_password("12345678901234".to_string());
    assert_eq!(form.submit(&lang, &mut history), SubmitOutcome::Rejected);

    assert_eq!(history.current(), Route::Login);
    assert_eq!(history.len(), 1);
    assert!(form.error(USERNAME).is_none());
    assert!(form.error(PASSWORD).is_some());
}

#[test]
fn test_signup_from_invalid_form() {
    let lang = Language::spanish();
    let mut history = History::default();
    let mut form = LoginForm::new();

    form.submit(&lang, &mut history);
    form.go_to_signup(&mut history);
    assert_eq!(history.current(), Route::Signup);
}

#[test]
fn test_navigator_as_trait_object() {
    let lang = Language::english();
    let mut history = History::default();
    let navigator: &mut dyn Navigator = &mut history;
    let mut form = LoginForm::new();

    form.set_username("bob".to_string());
    form.set_password("hunter22".to_string());
    form.submit(&lang, navigator);

    assert_eq!(history.current(), Route::ChatList);
}
