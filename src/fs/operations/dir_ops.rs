//! Directory creation and deletion.

use serde_json::Value;
use tracing::info;

use super::utils::{file_endpoint, folder_endpoint};
use crate::client::Client;
use crate::error::Result;
use crate::http::Transport;

impl<T: Transport> Client<T> {
    /// Create a remote folder.
    ///
    /// Whether an existing folder is an error is up to the server. The
    /// server's JSON answer is returned unchanged.
    pub async fn mkdir(&self, path: &str) -> Result<Value> {
        let auth = self.ensure_authenticated().await?;
        let response = self.api.post(&folder_endpoint(path), None, &auth).await?;
        info!(path, "created folder");
        Ok(response)
    }

    /// Delete a remote file or folder, recursively.
    ///
    /// A path that does not exist fails with [`BrickError::Api`](crate::BrickError::Api).
    pub async fn delete(&self, path: &str) -> Result<Value> {
        let auth = self.ensure_authenticated().await?;
        let response = self
            .api
            .delete(&file_endpoint(path), &[("Depth", "infinity")], &auth)
            .await?;
        info!(path, "deleted");
        Ok(response)
    }
}
