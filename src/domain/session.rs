// Session domain model - Terminal staff sign-in
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
    pub display_name: String,
}

impl Session {
    /// Open a session; any non-empty username and password is accepted
    pub fn open(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            display_name: format!("Terminal Master {}", username),
        })
    }
}
