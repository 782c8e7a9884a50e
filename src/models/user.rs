//! Signed-in user profile as served by `GET /api/user`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    pub level: u32,
    pub experience: u32,
    #[serde(default)]
    pub coins: u32,
}

impl UserProfile {
    /// A brand-new account that has not earned anything yet
    pub fn is_fresh(&self) -> bool {
        self.level == 1 && self.experience == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_account() {
        let user: UserProfile =
            serde_json::from_str(r#"{"username":"ana","level":1,"experience":0}"#).unwrap();
        assert!(user.is_fresh());
        assert_eq!(user.coins, 0);

        let veteran = UserProfile {
            experience: 100,
            ..user
        };
        assert!(!veteran.is_fresh());
    }
}
