//! Example: Log in and print the session id
//!
//! The printed id can be passed back with `--session` to skip a fresh login.
//!
//! Usage:
//!   cargo run --example login -- --user USER --password PASSWORD --subdomain SUBDOMAIN [--proxy PROXY]

mod cli;

use cli::{init_tracing, parse_options, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example login -- [--user USER --password PASSWORD --subdomain SUBDOMAIN] [--proxy PROXY] [--session ID]";

#[tokio::main]
async fn main() {
    init_tracing();
    let opts = parse_options(USAGE);
    if !opts.positionals.is_empty() {
        usage_and_exit(USAGE);
    }

    println!("Logging in as: {}", opts.credentials.username);

    let client = match opts.client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    match client.login().await {
        Ok(()) => {
            println!("Login successful!");
            if let Some(id) = client.session_id().await {
                println!("Session ID: {}", id);
            }
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }
}
