//! Session state and per-request authentication.

mod auth;
mod session;

pub use auth::{AuthArtifact, SESSION_COOKIE};
pub use session::{SessionManager, SessionState};
