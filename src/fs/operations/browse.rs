//! Directory listing.

use tracing::debug;

use super::utils::folder_endpoint;
use crate::api::error::decode;
use crate::client::Client;
use crate::error::Result;
use crate::fs::entry::RemoteEntry;
use crate::http::Transport;

impl<T: Transport> Client<T> {
    /// List the entries of a remote folder, in the order the server reports.
    ///
    /// `"/docs"` and `"docs"` name the same folder; `"/"` is the root.
    pub async fn dir(&self, path: &str) -> Result<Vec<RemoteEntry>> {
        let auth = self.ensure_authenticated().await?;
        let response = self.api.get(&folder_endpoint(path), &auth).await?;
        let entries: Vec<RemoteEntry> = decode(response, "folder listing")?;
        debug!(path, count = entries.len(), "listed folder");
        Ok(entries)
    }
}
