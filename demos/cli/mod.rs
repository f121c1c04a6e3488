use std::env;
use std::process;

use brickftp::{Client, ClientConfig, Credentials};
use tracing_subscriber::{EnvFilter, fmt};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("brickftp=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

/// Command line arguments with `--name value` options pulled out one by one.
struct Args {
    rest: Vec<String>,
    usage: &'static str,
}

impl Args {
    fn from_env(usage: &'static str) -> Self {
        let rest: Vec<String> = env::args().skip(1).collect();
        if rest.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }
        Self { rest, usage }
    }

    /// Remove `flag value` from the arguments and return `value`.
    fn option(&mut self, flags: &[&str]) -> Option<String> {
        let pos = self.rest.iter().position(|a| flags.contains(&a.as_str()))?;
        if pos + 1 >= self.rest.len() {
            usage_and_exit(self.usage);
        }
        let value = self.rest.remove(pos + 1);
        self.rest.remove(pos);
        Some(value)
    }
}

/// Connection options shared by every demo.
///
/// `--user`, `--password` and `--subdomain` fall back to the
/// `BRICK_FTP_*` environment variables.
pub struct Options {
    pub credentials: Credentials,
    pub proxy: Option<String>,
    pub session: Option<String>,
    pub positionals: Vec<String>,
}

pub fn parse_options(usage: &'static str) -> Options {
    let mut args = Args::from_env(usage);
    let user = args.option(&["--user", "-u"]);
    let password = args.option(&["--password", "-p"]);
    let subdomain = args.option(&["--subdomain", "-s"]);
    let proxy = args.option(&["--proxy"]);
    let session = args.option(&["--session"]);

    let credentials = match (user, password, subdomain) {
        (Some(u), Some(p), Some(s)) => Credentials::new(u, p, s),
        (None, None, None) => Credentials::from_env().unwrap_or_else(|e| {
            eprintln!("{e}");
            usage_and_exit(usage)
        }),
        _ => usage_and_exit(usage),
    };

    Options {
        credentials,
        proxy,
        session,
        positionals: args.rest,
    }
}

impl Options {
    /// Build a client, resuming `--session` when given.
    pub fn client(&self) -> brickftp::Result<Client> {
        let config = ClientConfig {
            proxy: self.proxy.clone(),
            ..ClientConfig::default()
        };
        let client = Client::with_config(self.credentials.clone(), config)?;
        Ok(match &self.session {
            Some(id) => client.with_session_id(id.clone()),
            None => client,
        })
    }
}
