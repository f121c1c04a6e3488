//! Example: Download a file
//!
//! Without LOCAL_PATH the file is saved under a fresh name in the temp directory.
//!
//! Usage:
//!   cargo run --example download -- --user USER --password PASSWORD --subdomain SUBDOMAIN <REMOTE_PATH> [LOCAL_PATH]

mod cli;

use cli::{init_tracing, parse_options, usage_and_exit};
use std::path::PathBuf;

const USAGE: &str = "Usage: cargo run --example download -- [--user USER --password PASSWORD --subdomain SUBDOMAIN] [--proxy PROXY] <REMOTE_PATH> [LOCAL_PATH]";

#[tokio::main]
async fn main() -> brickftp::Result<()> {
    init_tracing();
    let opts = parse_options(USAGE);
    let (remote_path, local_path) = match opts.positionals.as_slice() {
        [remote] => (remote.clone(), None),
        [remote, local] => (remote.clone(), Some(PathBuf::from(local))),
        _ => usage_and_exit(USAGE),
    };

    let client = opts.client()?;

    println!("Downloading: {}", remote_path);
    let saved = client
        .download_file(&remote_path, local_path.as_deref())
        .await?;
    println!("Saved to: {}", saved.display());

    Ok(())
}
