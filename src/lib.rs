//! # brickftp
//!
//! Rust client library for the BrickFTP REST API.
//!
//! ## Features
//!
//! - **Authentication**: lazy login with username/password on first use, one
//!   session per client, reused as a cookie for every later call.
//!   - Resume a session id saved from an earlier client.
//! - **Filesystem Operations**:
//!   - List folders (`dir`), create folders (`mkdir`), delete files and
//!     folders recursively (`delete`).
//! - **File Transfers**:
//!   - Single-part upload from a local file or from memory.
//!   - Download into memory, to a chosen path, or to a fresh temp file.
//! - **Errors**: one [`BrickError`] enum separating transport failures,
//!   malformed responses, API-reported errors and failed payload transfers.
//!
//! Uploads are a single PUT, so content is limited to
//! [`ClientConfig::max_upload_size`] (5 MiB by default). Larger files are
//! rejected up front with [`BrickError::UploadTooLarge`].
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use brickftp::{Client, Credentials};
//!
//! # async fn example() -> brickftp::Result<()> {
//! let client = Client::new(Credentials::new("user", "password", "mycompany"))?;
//!
//! // The first call logs in.
//! for entry in client.dir("/").await? {
//!     println!("{} ({:?} bytes)", entry.path, entry.size);
//! }
//!
//! client.mkdir("reports").await?;
//! client.upload("reports/q1.csv", "q1.csv").await?;
//!
//! let saved = client.download_file("reports/q1.csv", None).await?;
//! println!("Downloaded to {}", saved.display());
//!
//! client.delete("reports").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Handling Errors
//!
//! ```no_run
//! use brickftp::{BrickError, Client};
//!
//! # async fn example() -> brickftp::Result<()> {
//! let client = Client::from_env()?;
//! match client.delete("missing.txt").await {
//!     Ok(_) => println!("deleted"),
//!     Err(BrickError::Api { message, .. }) => println!("server said: {}", message),
//!     Err(BrickError::Transport(e)) => println!("network problem: {}", e),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use client::Client;
pub use config::{ClientConfig, Credentials};
pub use error::{BrickError, Result};
pub use fs::{EntryType, RemoteEntry};
pub use http::{HttpClient, Transport};
