use serde::{Deserialize, Serialize};

/// An authenticated user session issued by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user identity; owns history records
    pub user_id: String,

    /// Access token for backend requests
    pub access_token: String,

    /// Session expiration timestamp (Unix timestamp)
    pub expires_at: i64,
}

impl Session {
    /// Check if the session is expired
    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expiry() {
        let now = chrono::Utc::now().timestamp();

        let expired = Session {
            user_id: "user-1".to_string(),
            access_token: "token".to_string(),
            expires_at: now - 3600, // 1 hour ago
        };
        assert!(expired.is_expired());

        let valid = Session {
            user_id: "user-1".to_string(),
            access_token: "token".to_string(),
            expires_at: now + 3600, // 1 hour from now
        };
        assert!(!valid.is_expired());
    }
}
