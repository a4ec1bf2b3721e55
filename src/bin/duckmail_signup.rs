//! duckmail-signup — register a DuckDuckGo Email Protection address from the shell
//!
//! Usage:
//!   duckmail-signup <user> <email> [--dry-run] [--disable-secure-reply]
//!                   [--base-url <url>] [--timeout <secs>]
//!
//! Prints the outcome as JSON. Exit code 0 when accepted, 2 when rejected by
//! the server, 1 on any failure.

use anyhow::{bail, Context};
use duckmail::{ClientConfig, DuckMailClient, SignupOptions, SignupOutcome};

const EXIT_REJECTED: i32 = 2;

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Signup(SignupArgs),
}

#[derive(Debug, PartialEq)]
struct SignupArgs {
    user: String,
    email: String,
    options: SignupOptions,
    base_url: Option<String>,
    timeout: Option<f64>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut positional = Vec::new();
    let mut options = SignupOptions::new();
    let mut base_url = None;
    let mut timeout = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "version" | "--version" | "-V" => return Ok(Command::Version),
            "--dry-run" => options = options.dry_run(true),
            "--disable-secure-reply" => options = options.disable_secure_reply(true),
            "--base-url" => {
                let value = iter.next().context("--base-url needs a value")?;
                base_url = Some(value.clone());
            }
            "--timeout" => {
                let value = iter.next().context("--timeout needs a value")?;
                let secs = value
                    .parse::<f64>()
                    .with_context(|| format!("invalid --timeout value: {value}"))?;
                timeout = Some(secs);
            }
            other if other.starts_with("--") => bail!("unknown option: {other}"),
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(user), Some(email), None) = (positional.next(), positional.next(), positional.next()) else {
        bail!("expected exactly two arguments: <user> <email>");
    };

    Ok(Command::Signup(SignupArgs {
        user,
        email,
        options,
        base_url,
        timeout,
    }))
}

fn print_usage() {
    println!(
        r#"duckmail-signup — DuckDuckGo Email Protection signup

USAGE:
    duckmail-signup <user> <email> [OPTIONS]

OPTIONS:
    --dry-run                   Validate on the server without registering
    --disable-secure-reply      Disable the secure reply feature
    --base-url <url>            API root (default https://quack.duckduckgo.com/api)
    --timeout <secs>            Request timeout in seconds (default 30)
    -h, --help                  Show this help message
    -V, --version               Show version information

ENVIRONMENT:
    DUCKMAIL_BASE_URL           API root
    DUCKMAIL_TIMEOUT_SECS       Request timeout in seconds
    RUST_LOG                    Log filter (default info)"#
    );
}

async fn run(args: SignupArgs) -> anyhow::Result<SignupOutcome> {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs);
    }

    let mut client = DuckMailClient::with_config(config)?;
    let session = client.session()?;
    let outcome = session.signup(&args.user, &args.email, args.options).await?;
    Ok(outcome)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e:#}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => print_usage(),
        Command::Version => println!("duckmail-signup {}", env!("CARGO_PKG_VERSION")),
        Command::Signup(args) => {
            let outcome = run(args).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.is_accepted() {
                std::process::exit(EXIT_REJECTED);
            }
        }
    }
    Ok(())
}
