mod cli;

use cli::{init_tracing, parse_options, usage_and_exit};
use std::process;

const USAGE: &str = "Usage: cargo run --example upload -- [--user USER --password PASSWORD --subdomain SUBDOMAIN] [--proxy PROXY] <LOCAL_FILE> <REMOTE_PATH>";

#[tokio::main]
async fn main() -> brickftp::Result<()> {
    init_tracing();
    let opts = parse_options(USAGE);
    if opts.positionals.len() != 2 {
        usage_and_exit(USAGE);
    }
    let local_file = &opts.positionals[0];
    let remote_path = &opts.positionals[1];

    let client = opts.client()?;

    println!("Uploading {} to {}...", local_file, remote_path);
    match client.upload(remote_path, local_file).await {
        Ok(_) => println!("Upload complete!"),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    Ok(())
}
