//! Upload operations.
//!
//! An upload is three calls in a fixed order: start (get a ref and an
//! upload URI), transmit (one raw PUT of the whole content), end (confirm the
//! ref). Only a single transmit is ever made, so content is capped at
//! [`ClientConfig::max_upload_size`](crate::ClientConfig::max_upload_size).

use std::path::Path;

use serde_json::{Value, json};
use tracing::{debug, info};

use super::utils::file_endpoint;
use crate::api::error::decode;
use crate::client::Client;
use crate::error::{BrickError, Result};
use crate::fs::transfer::{UploadHandshake, transmit};
use crate::http::Transport;

impl<T: Transport> Client<T> {
    /// Upload a local file to `remote_path`.
    ///
    /// # Example
    /// ```no_run
    /// # use brickftp::{Client, Credentials};
    /// # async fn example() -> brickftp::Result<()> {
    /// let client = Client::new(Credentials::new("user", "password", "mycompany"))?;
    /// client.upload("reports/q1.csv", "q1.csv").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload(&self, remote_path: &str, local_path: impl AsRef<Path>) -> Result<Value> {
        let local_path = local_path.as_ref();
        let size = tokio::fs::metadata(local_path).await?.len();
        self.check_upload_size(size)?;

        let data = tokio::fs::read(local_path).await?;
        self.upload_bytes(remote_path, data).await
    }

    /// Upload in-memory content to `remote_path`.
    ///
    /// Returns the server's answer to the end call.
    pub async fn upload_bytes(&self, remote_path: &str, data: Vec<u8>) -> Result<Value> {
        let size = data.len() as u64;
        self.check_upload_size(size)?;

        let auth = self.ensure_authenticated().await?;
        let endpoint = file_endpoint(remote_path);

        // 1. Start
        let response = self
            .api
            .post(&endpoint, Some(&json!({ "action": "put" })), &auth)
            .await?;
        let handshake: UploadHandshake = decode(response, "upload start")?;
        debug!(path = remote_path, "upload started");

        // 2. Transmit
        transmit(self.api.transport(), &handshake.upload_uri, data).await?;

        // 3. End
        let response = self
            .api
            .post(
                &endpoint,
                Some(&json!({ "action": "end", "ref": handshake.reference })),
                &auth,
            )
            .await?;

        info!(path = remote_path, bytes = size, "upload complete");
        Ok(response)
    }

    fn check_upload_size(&self, size: u64) -> Result<()> {
        let limit = self.config.max_upload_size;
        if size > limit {
            return Err(BrickError::UploadTooLarge { size, limit });
        }
        Ok(())
    }
}
