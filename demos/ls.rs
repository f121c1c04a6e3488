//! Example: List a remote folder
//!
//! Usage:
//!   cargo run --example ls -- --user USER --password PASSWORD --subdomain SUBDOMAIN [PATH]

mod cli;

use cli::{init_tracing, parse_options, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example ls -- [--user USER --password PASSWORD --subdomain SUBDOMAIN] [--proxy PROXY] [PATH]";

#[tokio::main]
async fn main() -> brickftp::Result<()> {
    init_tracing();
    let opts = parse_options(USAGE);
    let path = match opts.positionals.as_slice() {
        [] => "/".to_string(),
        [path] => path.clone(),
        _ => usage_and_exit(USAGE),
    };

    let client = opts.client()?;

    println!("Listing: {}\n", path);
    let entries = client.dir(&path).await?;
    if entries.is_empty() {
        println!("  (empty)");
    }
    for entry in entries {
        let kind = if entry.is_folder() { "d" } else { "-" };
        let size = entry.size.map(format_size).unwrap_or_default();
        println!("  {} {:>10}  {}", kind, size, entry.path);
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1}MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2}GB", bytes as f64 / 1_073_741_824.0)
    }
}
