use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::http::HttpRequest;

/// Cookie that carries the session id once logged in.
pub const SESSION_COOKIE: &str = "BrickAPI";

/// Password paired with the session id when authenticating via basic auth.
const PLACEHOLDER_SECRET: &str = "x";

/// Authentication attached to a single request.
///
/// At most one artifact is ever applied; the variants are exclusive.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthArtifact {
    /// Nothing attached.
    None,
    /// `Authorization: Basic base64("{session_id}:x")`, used only on login.
    Basic { session_id: String },
    /// `Cookie: BrickAPI={session_id}`, used after login.
    Cookie { session_id: String },
}

impl AuthArtifact {
    /// Attach this artifact to `request`.
    pub fn apply(&self, request: HttpRequest) -> HttpRequest {
        match self {
            AuthArtifact::None => request,
            AuthArtifact::Basic { session_id } => {
                let token = STANDARD.encode(format!("{}:{}", session_id, PLACEHOLDER_SECRET));
                request.header("Authorization", format!("Basic {}", token))
            }
            AuthArtifact::Cookie { session_id } => {
                request.header("Cookie", format!("{}={}", SESSION_COOKIE, session_id))
            }
        }
    }
}

// Session ids are credentials; keep them out of logs.
impl std::fmt::Debug for AuthArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthArtifact::None => f.write_str("None"),
            AuthArtifact::Basic { .. } => f.write_str("Basic(<redacted>)"),
            AuthArtifact::Cookie { .. } => f.write_str("Cookie(<redacted>)"),
        }
    }
}
