//! Local credential check.
use async_trait::async_trait;

use crate::api::{AuthError, AuthProvider};

/// Accepts a fixed account, plus the `test` user when development mode is on.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthProvider {
    allow_test_user: bool,
    account: Option<(String, String)>,
}

impl StaticAuthProvider {
    const TEST_USER: &'static str = "test";

    pub fn new() -> Self {
        Self::default()
    }

    /// Let `test` in with any password.
    pub fn allow_test_user(mut self, allow: bool) -> Self {
        self.allow_test_user = allow;
        self
    }

    pub fn with_account(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.account = Some((username.into(), password.into()));
        self
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn login(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        if self.allow_test_user && username == Self::TEST_USER {
            return Ok(true);
        }

        Ok(self
            .account
            .as_ref()
            .is_some_and(|(user, pass)| user == username && pass == password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_requires_dev_mode() {
        assert!(!StaticAuthProvider::new().login("test", "").await.unwrap());
        assert!(
            StaticAuthProvider::new()
                .allow_test_user(true)
                .login("test", "")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn account_must_match_exactly() {
        let auth = StaticAuthProvider::new().with_account("driver", "pw");

        assert!(auth.login("driver", "pw").await.unwrap());
        assert!(!auth.login("driver", "PW").await.unwrap());
        assert!(!auth.login("other", "pw").await.unwrap());
    }
}
