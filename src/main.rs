//! `deployctx`: resolve the network and signing account for a deployment run.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use zeroize::Zeroizing;

use deploy_context::account::{CredentialSource, LocalResolver};
use deploy_context::config::{load_or_default, ConfigError};
use deploy_context::context::{BindOutcome, ContextBinder, ContextResult, LineConfirmer};
use deploy_context::network::{NetworkRegistry, Networks};
use deploy_context::observability::init_logging;
use deploy_context::terminal::TerminalPrompt;
use deploy_context::{Environment, ProjectConfig, ResolutionInput, ResolvedContext};

#[derive(Parser)]
#[command(name = "deployctx")]
#[command(author, version, about = "Resolve the network and signing account for deployment scripts", long_about = None)]
struct Cli {
    /// Path to the project file
    #[arg(short, long, default_value = "deployctx.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve network and account, then show the bound sender
    Resolve(ResolveArgs),
    /// List configured networks and their defaults
    Networks,
}

#[derive(Args)]
struct ResolveArgs {
    /// Configured network name
    #[arg(long)]
    network: Option<String>,

    /// RPC URL; wins over --network
    #[arg(long)]
    url: Option<String>,

    /// Run against a fork (`--fork`, `--fork true`, `--fork false`)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    fork: Option<bool>,

    /// Keystore name or path
    #[arg(long)]
    account: Option<String>,

    /// Raw private key (intended for testing)
    #[arg(long)]
    private_key: Option<String>,

    /// Keystore password
    #[arg(long)]
    password: Option<String>,

    /// File containing the keystore password
    #[arg(long)]
    password_file_path: Option<PathBuf>,

    /// Confirm before broadcasting to a live network
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    prompt_live: Option<bool>,

    /// Print the resolved context as JSON
    #[arg(long)]
    json: bool,
}

impl ResolveArgs {
    fn into_input(self) -> ResolutionInput {
        ResolutionInput {
            network: self.network,
            url: self.url,
            fork: self.fork,
            account: self.account,
            private_key: self.private_key.map(Zeroizing::new),
            password: self.password.map(Zeroizing::new),
            password_file_path: self.password_file_path,
            prompt_live: self.prompt_live,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e @ ConfigError::Io { .. }) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };

    init_logging(
        cli.log_level
            .as_deref()
            .unwrap_or(&config.observability.log_level),
    );

    match cli.command {
        Commands::Networks => list_networks(&config),
        Commands::Resolve(args) => {
            let json = args.json;
            match resolve(&config, args.into_input()) {
                Ok(Some(context)) => print_context(&context, json)?,
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Resolution failed");
                    std::process::exit(if e.is_user_error() { 2 } else { 1 });
                }
            }
        }
    }

    Ok(())
}

/// Run the binder with terminal prompts. `None` means the user cancelled.
fn resolve(config: &ProjectConfig, input: ResolutionInput) -> ContextResult<Option<ResolvedContext>> {
    let mut networks = Networks::from_config(config);
    let resolver = LocalResolver::new(&config.keystores.path, Box::new(TerminalPrompt));
    let confirmer = LineConfirmer::new(TerminalPrompt);
    let mut env = Environment::new();

    let outcome = ContextBinder::new(&mut networks, &resolver, &confirmer).bind(input, &mut env)?;

    Ok(match outcome {
        BindOutcome::Bound(context) => Some(context),
        BindOutcome::Cancelled => None,
    })
}

fn print_context(context: &ResolvedContext, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(context)?);
        return Ok(());
    }

    let network = &context.network;
    println!(
        "network: {} ({})",
        network.name,
        network.url.as_deref().unwrap_or("no url")
    );
    println!("mode:    {}", if context.fork { "fork" } else { "live" });
    match &context.credential {
        Some(bound) => {
            let source = match &bound.source {
                CredentialSource::Keystore { path } => format!("keystore {}", path.display()),
                CredentialSource::PrivateKey => "private key".to_string(),
            };
            println!("sender:  {} ({})", bound.address, source);
        }
        None => println!("sender:  none"),
    }
    Ok(())
}

fn list_networks(config: &ProjectConfig) {
    let networks = Networks::from_config(config);
    let active = networks.active_network().map(|n| n.name.clone());

    for network in networks.list() {
        let marker = if active.as_deref() == Some(network.name.as_str()) { "*" } else { " " };
        println!(
            "{} {:<16} url={} fork={} account={} prompt_live={}",
            marker,
            network.name,
            network.url.as_deref().unwrap_or("-"),
            network.is_fork,
            network.default_account_name.as_deref().unwrap_or("-"),
            network.prompt_live.unwrap_or(false),
        );
    }
}
