//! The [`Client`] facade.

use crate::api::ApiClient;
use crate::config::{ClientConfig, Credentials};
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::session::{AuthArtifact, SessionManager};

/// BrickFTP client.
///
/// Logs in lazily on the first operation and reuses that session for the
/// rest of its life. Share it behind an `Arc` if several tasks need it; the
/// login still happens only once.
#[derive(Debug)]
pub struct Client<T = HttpClient> {
    pub(crate) api: ApiClient<T>,
    pub(crate) session: SessionManager,
    pub(crate) config: ClientConfig,
}

impl Client<HttpClient> {
    /// Create a client with default configuration.
    ///
    /// # Example
    /// ```no_run
    /// use brickftp::{Client, Credentials};
    ///
    /// # async fn example() -> brickftp::Result<()> {
    /// let client = Client::new(Credentials::new("user", "password", "mycompany"))?;
    /// for entry in client.dir("/").await? {
    ///     println!("{}", entry.path);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = HttpClient::with_config(&config)?;
        Self::with_transport(credentials, config, transport)
    }

    /// Build from `BRICK_FTP_USER`, `BRICK_FTP_PASS` and `BRICK_FTP_SUBDOMAIN`.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a client around a session id obtained earlier (see
    /// [`Client::session_id`]).
    pub fn resume(credentials: Credentials, session_id: impl Into<String>) -> Result<Self> {
        Ok(Self::new(credentials)?.with_session_id(session_id))
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Result<Self> {
        let base_url = config.resolve_base_url(&credentials)?;
        Ok(Self {
            api: ApiClient::new(transport, base_url),
            session: SessionManager::new(credentials),
            config,
        })
    }

    /// Replace the session with a pending one built from `session_id`.
    pub fn with_session_id(self, session_id: impl Into<String>) -> Self {
        let credentials = self.session.credentials().clone();
        Self {
            session: SessionManager::resume(credentials, session_id),
            ..self
        }
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Credentials used for login.
    pub fn credentials(&self) -> &Credentials {
        self.session.credentials()
    }

    /// Underlying API client.
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Log in now instead of waiting for the first operation.
    ///
    /// No-op if already logged in.
    pub async fn login(&self) -> Result<()> {
        self.ensure_authenticated().await.map(|_| ())
    }

    /// Check if a login has succeeded.
    pub async fn is_authenticated(&self) -> bool {
        self.session.state().await.is_authenticated()
    }

    /// Current session id, if any. Store it to [`resume`](Client::resume) later.
    pub async fn session_id(&self) -> Option<String> {
        self.session.state().await.session_id().map(str::to_string)
    }

    pub(crate) async fn ensure_authenticated(&self) -> Result<AuthArtifact> {
        self.session.ensure_authenticated(&self.api).await
    }
}
