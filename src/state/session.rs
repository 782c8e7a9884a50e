//! Signed-in user context
//!
//! Holds the last profile fetched from the backend. The profile is replaced
//! whenever the `/api/user` query is refetched.

use crate::models::UserProfile;

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<UserProfile>,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
        self.last_error = None;
    }

    /// Keep the previous profile, remember why loading failed
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_keeps_profile() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.set_user(UserProfile {
            username: "rita".into(),
            level: 2,
            experience: 150,
            coins: 40,
        });
        session.set_error("timeout");
        assert_eq!(session.user().map(|u| u.level), Some(2));
        assert_eq!(session.last_error(), Some("timeout"));
    }
}
