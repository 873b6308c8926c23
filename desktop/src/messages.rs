//! Application messages (events)

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    GoBack,
    Logout,

    // Login
    LoginMounted,
    UsernameChanged(String),
    PasswordChanged(String),
    SubmitLogin,
    GoToSignup,
}
