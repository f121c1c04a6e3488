//! Directory listing entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry type as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
    /// Anything this crate does not know about, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

/// One item of a directory listing.
///
/// Read-only projection of server state. Fields the server omits or sends
/// as `null` are `None`; unknown fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteEntry {
    #[serde(default)]
    pub id: Option<Value>,
    /// Path relative to the account root, e.g. `"docs/report.csv"`.
    pub path: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub crc32: Option<String>,
    #[serde(default)]
    pub md5: Option<String>,
    #[serde(default)]
    pub mtime: Option<String>,
    #[serde(default)]
    pub provided_mtime: Option<String>,
    #[serde(default)]
    pub permissions: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteEntry {
    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    /// Check if this is a folder.
    pub fn is_folder(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    /// Display name, falling back to the last path component.
    pub fn name(&self) -> &str {
        match &self.display_name {
            Some(name) => name,
            None => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }
}
