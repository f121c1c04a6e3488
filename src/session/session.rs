//! Session management and authentication.
//!
//! A [`SessionManager`] logs in lazily, at most once per client, and hands
//! out the artifact every later request must carry.

use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::auth::AuthArtifact;
use crate::api::error::decode;
use crate::api::{API_PREFIX, ApiClient};
use crate::config::Credentials;
use crate::error::Result;
use crate::http::Transport;

/// Where a client stands with respect to the remote session.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session id yet.
    Unauthenticated,
    /// A session id is known but has not been confirmed by a login call.
    Pending(String),
    /// Logged in; the id is sent as a cookie.
    Authenticated(String),
}

impl SessionState {
    /// Artifact a request must carry in this state.
    pub fn auth_artifact(&self) -> AuthArtifact {
        match self {
            SessionState::Unauthenticated => AuthArtifact::None,
            SessionState::Pending(id) => AuthArtifact::Basic {
                session_id: id.clone(),
            },
            SessionState::Authenticated(id) => AuthArtifact::Cookie {
                session_id: id.clone(),
            },
        }
    }

    /// Session id, pending or authenticated.
    pub fn session_id(&self) -> Option<&str> {
        match self {
            SessionState::Unauthenticated => None,
            SessionState::Pending(id) | SessionState::Authenticated(id) => Some(id),
        }
    }

    /// Check if a login has succeeded.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Unauthenticated => f.write_str("Unauthenticated"),
            SessionState::Pending(_) => f.write_str("Pending(<redacted>)"),
            SessionState::Authenticated(_) => f.write_str("Authenticated(<redacted>)"),
        }
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    id: SessionId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SessionId {
    Text(String),
    Number(i64),
}

impl SessionId {
    fn into_string(self) -> String {
        match self {
            SessionId::Text(id) => id,
            SessionId::Number(id) => id.to_string(),
        }
    }
}

/// Owner of the credentials and the session state of one client.
///
/// The state sits behind an async mutex held for the whole login exchange,
/// so concurrent callers wait for a single login instead of racing.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Credentials,
    state: Mutex<SessionState>,
}

impl SessionManager {
    /// Create an unauthenticated session.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            state: Mutex::new(SessionState::Unauthenticated),
        }
    }

    /// Start from a session id issued earlier; the next login confirms it
    /// with basic auth.
    pub fn resume(credentials: Credentials, session_id: impl Into<String>) -> Self {
        Self {
            credentials,
            state: Mutex::new(SessionState::Pending(session_id.into())),
        }
    }

    /// Credentials used for login.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Artifact for the next request, derived from the current state.
    pub async fn auth_artifact(&self) -> AuthArtifact {
        self.state.lock().await.auth_artifact()
    }

    /// Log in unless already authenticated, returning the cookie artifact.
    ///
    /// Once authenticated this never talks to the server again. A failed
    /// login leaves the state untouched.
    pub async fn ensure_authenticated<T: Transport>(
        &self,
        api: &ApiClient<T>,
    ) -> Result<AuthArtifact> {
        let mut state = self.state.lock().await;
        if state.is_authenticated() {
            return Ok(state.auth_artifact());
        }

        debug!(username = %self.credentials.username, "logging in");
        let body = json!({
            "username": self.credentials.username,
            "password": self.credentials.password,
        });
        let response = api
            .post(
                &format!("{}/sessions.json", API_PREFIX),
                Some(&body),
                &state.auth_artifact(),
            )
            .await?;
        let login: LoginResponse = decode(response, "login")?;

        *state = SessionState::Authenticated(login.id.into_string());
        info!(username = %self.credentials.username, "session established");

        Ok(state.auth_artifact())
    }
}
