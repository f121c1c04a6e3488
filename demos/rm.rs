mod cli;

use cli::{init_tracing, parse_options, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example rm -- [--user USER --password PASSWORD --subdomain SUBDOMAIN] [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> brickftp::Result<()> {
    init_tracing();
    let opts = parse_options(USAGE);
    if opts.positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let target = opts.positionals[0].clone();

    let client = opts.client()?;

    println!("Removing: {}", target);
    match client.delete(&target).await {
        Ok(_) => println!("Removed successfully!"),
        Err(e) => eprintln!("Failed to remove: {}", e),
    }

    Ok(())
}
