//! The credential store: where user records are looked up and passwords checked.
//!
//! Only an in-memory single-user store exists. Passwords are compared in
//! plaintext, which is acceptable for the demo record and nothing else.

use std::fmt;

use pokegate_core::AuthError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("student"),
            Role::Teacher => f.write_str("teacher"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
}

impl User {
    /// The hardcoded account every demo client logs in with.
    pub fn demo() -> Self {
        Self {
            id: 1,
            username: "Sacha".to_string(),
            password: "passwordPokedex123".to_string(),
            role: Role::Student,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Lookup interface the session protocol depends on.
pub trait CredentialStore: Send + Sync + fmt::Debug {
    fn find_by_username(&self, username: &str) -> Option<User>;

    fn find_by_id(&self, id: u64) -> Option<User>;

    /// Checks a username/password pair. Unknown user and wrong password are
    /// reported identically.
    fn verify(&self, username: &str, password: &str) -> Result<User, AuthError> {
        self.find_by_username(username)
            .filter(|user| user.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Store holding exactly one immutable record.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    user: User,
}

impl StaticCredentialStore {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

impl Default for StaticCredentialStore {
    fn default() -> Self {
        Self::new(User::demo())
    }
}

impl CredentialStore for StaticCredentialStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        (self.user.username == username).then(|| self.user.clone())
    }

    fn find_by_id(&self, id: u64) -> Option<User> {
        (self.user.id == id).then(|| self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_success() {
        let store = StaticCredentialStore::default();
        let user = store.verify("Sacha", "passwordPokedex123").unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_wrong_password_and_unknown_user_look_the_same() {
        let store = StaticCredentialStore::default();
        let wrong_password = store.verify("Sacha", "pikachu").unwrap_err();
        let unknown_user = store.verify("Ondine", "passwordPokedex123").unwrap_err();
        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(wrong_password, unknown_user);
    }

    #[test]
    fn test_comparison_is_exact() {
        let store = StaticCredentialStore::default();
        assert!(store.verify("sacha", "passwordPokedex123").is_err());
        assert!(store.verify("Sacha", "passwordPokedex123 ").is_err());
        assert!(store.verify("", "").is_err());
    }

    #[test]
    fn test_find_by_id() {
        let store = StaticCredentialStore::default();
        assert_eq!(store.find_by_id(1).map(|u| u.username), Some("Sacha".to_string()));
        assert!(store.find_by_id(2).is_none());
    }

    #[test]
    fn test_role_display_matches_serialized_form() {
        for role in [Role::Student, Role::Teacher, Role::Admin] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }

    #[test]
    fn test_password_never_serialized_or_debugged() {
        let user = User::demo();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("passwordPokedex123"));
        assert!(!format!("{:?}", user).contains("passwordPokedex123"));
    }
}
