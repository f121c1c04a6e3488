mod cli;

use cli::{init_tracing, parse_options, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example mkdir -- [--user USER --password PASSWORD --subdomain SUBDOMAIN] [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> brickftp::Result<()> {
    init_tracing();
    let opts = parse_options(USAGE);
    if opts.positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let path = &opts.positionals[0];

    let client = opts.client()?;

    println!("Creating folder: {}", path);
    client.mkdir(path).await?;
    println!("Done.");

    Ok(())
}
