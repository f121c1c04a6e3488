//! BrickFTP API client and response normalization.

pub mod client;
pub(crate) mod error;

pub use client::ApiClient;

/// Prefix shared by every REST endpoint.
pub const API_PREFIX: &str = "api/rest/v1";
