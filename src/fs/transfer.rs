//! Raw payload exchange for uploads and downloads.
//!
//! Upload and download URIs are pre-authorized and may live on another host,
//! so these requests bypass the JSON path and never carry the session.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{BrickError, Result};
use crate::http::{HttpRequest, Method, Transport};

/// Answer to an upload start call. Valid for one upload only.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadHandshake {
    /// Token confirming this upload in the end call.
    #[serde(rename = "ref")]
    pub reference: String,
    pub upload_uri: String,
}

/// Answer to a download resolve call.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadDescriptor {
    pub download_uri: String,
}

/// PUT the whole payload to `uri`.
pub(crate) async fn transmit<T: Transport>(transport: &T, uri: &str, data: Vec<u8>) -> Result<()> {
    let size = data.len();
    let request = HttpRequest::new(Method::Put, uri).body(data);
    let response = transport.execute(request).await?;

    if !response.is_success() {
        warn!(status = response.status, "upload transmit rejected");
        return Err(BrickError::Transfer {
            status: response.status,
            body: response.text(),
        });
    }

    debug!(bytes = size, "upload transmitted");
    Ok(())
}

/// GET the payload behind `uri`.
pub(crate) async fn fetch<T: Transport>(transport: &T, uri: &str) -> Result<Vec<u8>> {
    let response = transport.execute(HttpRequest::new(Method::Get, uri)).await?;

    if !response.is_success() {
        warn!(status = response.status, "download fetch rejected");
        return Err(BrickError::Transfer {
            status: response.status,
            body: response.text(),
        });
    }

    debug!(bytes = response.body.len(), "download fetched");
    Ok(response.body)
}
