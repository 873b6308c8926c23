pub mod chat_list;
pub mod login;
pub mod signup;
pub mod splash;
