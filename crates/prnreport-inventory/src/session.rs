//! Authentication session

use std::fmt;

use tracing::{info, instrument};

use crate::api::MonitoringApi;
use crate::error::CollectError;
use crate::request::requests;

/// Characters of the token that may appear in logs
const TOKEN_PREVIEW_LEN: usize = 10;

/// Login credentials for the monitoring API
#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Authenticated session for one collection run
///
/// The token is never printed in full: `Debug` and [`Session::redacted`]
/// show only its first characters.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Wrap an existing token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Token to send with each call
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Truncated token for diagnostics
    #[must_use]
    pub fn redacted(&self) -> String {
        let preview: String = self.token.chars().take(TOKEN_PREVIEW_LEN).collect();
        format!("{preview}...")
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.redacted())
            .finish()
    }
}

impl MonitoringApi {
    /// Log in and open a session
    ///
    /// # Errors
    /// Returns [`CollectError::Authentication`] if the call fails, times out
    /// or yields an empty token.
    #[instrument(skip(self, credentials), fields(user = %credentials.user))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session, CollectError> {
        let request = requests::login(&credentials.user, &credentials.password);

        let token: String = self.fetch(&request, None).await.ok_or_else(|| {
            CollectError::Authentication("login returned no result".to_string())
        })?;

        if token.is_empty() {
            return Err(CollectError::Authentication(
                "login returned an empty token".to_string(),
            ));
        }

        let session = Session::new(token);
        info!(token = %session.redacted(), "authenticated");
        Ok(session)
    }
}
