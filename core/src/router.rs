//! Path-based routing with an in-memory history stack

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Signup,
    ChatList,
}

impl Route {
    pub const LOGIN_PATH: &'static str = "/";
    pub const SIGNUP_PATH: &'static str = "/signup";
    pub const CHAT_LIST_PATH: &'static str = "/chatlist";

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => Self::LOGIN_PATH,
            Route::Signup => Self::SIGNUP_PATH,
            Route::ChatList => Self::CHAT_LIST_PATH,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            Self::LOGIN_PATH | "/login" => Some(Route::Login),
            Self::SIGNUP_PATH => Some(Route::Signup),
            Self::CHAT_LIST_PATH => Some(Route::ChatList),
            _ => None,
        }
    }
}

/// Push-style navigation, as seen by screens.
pub trait Navigator {
    fn push(&mut self, path: &str);
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl History {
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn current(&self) -> Route {
        // entries is never empty
        self.entries.last().copied().unwrap_or(Route::Login)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Pops the current entry. The root entry is never removed.
    pub fn go_back(&mut self) -> Route {
        if self.can_go_back() {
            self.entries.pop();
        }
        self.current()
    }
}

impl Navigator for History {
    fn push(&mut self, path: &str) {
        match Route::from_path(path) {
            Some(route) => {
                log::debug!("history push {} -> {:?}", path, route);
                self.entries.push(route);
            }
            None => log::warn!("ignoring navigation to unknown path {}", path),
        }
    }
}
