//! Remote filesystem types and operations.

pub(crate) mod entry;
mod operations;
pub(crate) mod transfer;

pub use entry::{EntryType, RemoteEntry};
pub use transfer::{DownloadDescriptor, UploadHandshake};
