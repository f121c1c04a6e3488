//! Download operations.
//!
//! A download is two calls: resolve the file's download URI through the API,
//! then fetch the raw bytes from that URI.

use std::path::{Path, PathBuf};

use tracing::info;

use super::utils::{file_endpoint, write_new_temp, write_replacing};
use crate::api::error::decode;
use crate::client::Client;
use crate::error::Result;
use crate::fs::transfer::{DownloadDescriptor, fetch};
use crate::http::Transport;

impl<T: Transport> Client<T> {
    /// Download a remote file into memory.
    pub async fn download(&self, remote_path: &str) -> Result<Vec<u8>> {
        let auth = self.ensure_authenticated().await?;

        // 1. Resolve
        let response = self.api.get(&file_endpoint(remote_path), &auth).await?;
        let descriptor: DownloadDescriptor = decode(response, "download")?;

        // 2. Fetch
        let data = fetch(self.api.transport(), &descriptor.download_uri).await?;
        info!(path = remote_path, bytes = data.len(), "download complete");
        Ok(data)
    }

    /// Download a remote file to disk and return where it was written.
    ///
    /// A file already at `local_path` is replaced. Without `local_path` the
    /// file lands in a newly created file in the system temp directory whose
    /// name keeps the remote stem and extension.
    ///
    /// # Example
    /// ```no_run
    /// # use brickftp::{Client, Credentials};
    /// # async fn example() -> brickftp::Result<()> {
    /// let client = Client::new(Credentials::new("user", "password", "mycompany"))?;
    /// let path = client.download_file("reports/q1.csv", None).await?;
    /// println!("saved to {}", path.display());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download_file(
        &self,
        remote_path: &str,
        local_path: Option<&Path>,
    ) -> Result<PathBuf> {
        let data = self.download(remote_path).await?;

        match local_path {
            Some(path) => {
                write_replacing(path, &data).await?;
                Ok(path.to_path_buf())
            }
            None => write_new_temp(&std::env::temp_dir(), remote_path, &data).await,
        }
    }
}
