//! Credentials and client configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{BrickError, Result};

/// Environment variable holding the account username.
pub const ENV_USER: &str = "BRICK_FTP_USER";
/// Environment variable holding the account password.
pub const ENV_PASS: &str = "BRICK_FTP_PASS";
/// Environment variable holding the account subdomain.
pub const ENV_SUBDOMAIN: &str = "BRICK_FTP_SUBDOMAIN";

/// Largest payload accepted by a single upload transmit (5 MiB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// Account credentials. Fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub subdomain: String,
}

impl Credentials {
    /// Create credentials for `https://{subdomain}.brickftp.com/`.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            subdomain: subdomain.into(),
        }
    }

    /// Read credentials from `BRICK_FTP_USER`, `BRICK_FTP_PASS` and
    /// `BRICK_FTP_SUBDOMAIN`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            require_env(ENV_USER)?,
            require_env(ENV_PASS)?,
            require_env(ENV_SUBDOMAIN)?,
        ))
    }

    /// `https://{subdomain}.brickftp.com/`
    pub fn base_url(&self) -> String {
        format!("https://{}.brickftp.com/", self.subdomain)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("subdomain", &self.subdomain)
            .finish()
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| BrickError::Config(format!("{} is not set", name)))
}

/// Tunables for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Replaces `https://{subdomain}.brickftp.com/` when set.
    pub base_url: Option<String>,
    /// Per-request timeout applied by the HTTP transport.
    pub timeout: Duration,
    /// Single-part upload ceiling in bytes.
    pub max_upload_size: u64,
    /// HTTP or HTTPS proxy URL (e.g. "http://proxy:8080").
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(60),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            proxy: None,
        }
    }
}

impl ClientConfig {
    /// Resolve the API base URL for `credentials`, always ending in `/`.
    pub fn resolve_base_url(&self, credentials: &Credentials) -> Result<String> {
        let base = match &self.base_url {
            Some(url) => url.clone(),
            None => credentials.base_url(),
        };
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(BrickError::Config(format!("Invalid base URL: {}", base)));
        }
        if base.ends_with('/') {
            Ok(base)
        } else {
            Ok(format!("{}/", base))
        }
    }
}
