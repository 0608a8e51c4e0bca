use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Args, Parser, Subcommand};
use eyre::{eyre, Result};
use tracing::{error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;
use url::Url;

use config::{CliConfig, Config, EnvConfig, Network};
use deployer::{scripts, signer, DeployEnvBuilder};

const DOTENV_FILE: &str = ".env.development.local";

#[tokio::main]
async fn main() {
    enable_tracer(Path::new("."));

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Deploy(deploy) => deploy.run().await,
        Command::Accounts(accounts) => accounts.run(),
        Command::Networks => {
            print_networks();
            Ok(())
        }
    };

    if let Err(err) = res {
        error!(target: "nftdeploy::runner", "{err:?}");
        exit(1);
    }
}

/// Loads `DOTENV_FILE`, then `.env`, from `dir`. Variables already set win.
fn load_dotenv(dir: &Path) {
    dotenv::from_path(dir.join(DOTENV_FILE)).ok();
    dotenv::from_path(dir.join(".env")).ok();
}

/// The log filter, read after the dotenv files so `RUST_LOG` may live there.
fn env_filter(dir: &Path) -> EnvFilter {
    load_dotenv(dir);

    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

fn enable_tracer(dir: &Path) {
    let env_filter = env_filter(dir);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

#[derive(Parser)]
#[clap(version, about)]
/// Deploys the SVG NFT and the randomized SVG NFT contracts
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the deployment scripts
    #[clap(name = "deploy")]
    Deploy(DeployArgs),
    /// Print the accounts derived from the configured mnemonic
    #[clap(name = "accounts")]
    Accounts(AccountsArgs),
    /// Print the built-in network table
    #[clap(name = "networks")]
    Networks,
}

#[derive(Args)]
struct NetworkArgs {
    #[clap(short, long, env = "NETWORK", default_value = "hardhat")]
    network: String,
    #[clap(short, long, default_value = "nftdeploy.toml")]
    config: PathBuf,
}

#[derive(Args)]
struct DeployArgs {
    #[command(flatten)]
    network: NetworkArgs,
    /// Only run scripts carrying one of these tags (all, mocks, svg, rsvg)
    #[clap(short, long, value_delimiter = ',')]
    tags: Vec<String>,
    #[clap(short, long, value_parser = parse_url)]
    rpc_url: Option<Url>,
    #[clap(short, long)]
    artifacts_dir: Option<PathBuf>,
    #[clap(short, long)]
    deployments_dir: Option<PathBuf>,
    #[clap(short, long)]
    svg_path: Option<PathBuf>,
    #[clap(long)]
    confirmations: Option<u64>,
    /// Seconds to wait for the VRF coordinator on public networks
    #[clap(short = 'w', long)]
    oracle_wait_secs: Option<u64>,
    #[clap(short, long)]
    poll_interval_secs: Option<u64>,
    /// Index of the mnemonic account used as the deployer
    #[clap(long, default_value = "0")]
    account_index: u32,
}

impl DeployArgs {
    async fn run(&self) -> Result<()> {
        let config = load_config(
            &self.network.config,
            &self.network.network,
            &self.as_cli_config(),
        )?;

        let env = DeployEnvBuilder::new()
            .config(config)
            .account_index(self.account_index)
            .build()
            .await?;

        let outcomes = tokio::select! {
            res = scripts::run(&env, &self.tags) => res?,
            _ = tokio::signal::ctrl_c() => return Err(eyre!("deployment interrupted")),
        };

        for outcome in outcomes {
            info!(
                target: "nftdeploy::runner",
                "{} minted token {}",
                outcome.contract,
                outcome.token_id
            );
        }

        Ok(())
    }

    fn as_cli_config(&self) -> CliConfig {
        CliConfig {
            rpc_url: self.rpc_url.clone(),
            artifacts_dir: self.artifacts_dir.clone(),
            deployments_dir: self.deployments_dir.clone(),
            svg_path: self.svg_path.clone(),
            confirmations: self.confirmations,
            oracle_wait_secs: self.oracle_wait_secs,
            poll_interval_secs: self.poll_interval_secs,
        }
    }
}

#[derive(Args)]
struct AccountsArgs {
    #[command(flatten)]
    network: NetworkArgs,
    #[clap(long, default_value = "10")]
    count: u32,
}

impl AccountsArgs {
    fn run(&self) -> Result<()> {
        let config = load_config(
            &self.network.config,
            &self.network.network,
            &CliConfig::default(),
        )?;

        for account in signer::derive_accounts(config.mnemonic()?, self.count)? {
            println!("{account}");
        }

        Ok(())
    }
}

fn load_config(path: &Path, network: &str, cli_config: &CliConfig) -> Result<Config> {
    let env_config = EnvConfig::from_env(network);
    Config::from_file(path, network, &env_config, cli_config)
}

fn print_networks() {
    for network in Network::all() {
        let config = network.to_network_config();
        println!("{} (chain {})", config.name, config.chain_id);
        println!("\tfee: {}", config.fee);
        println!("\tkey hash: {}", config.key_hash);
        println!("\tjob id: {}", config.job_id);
        println!("\tfund amount: {}", config.fund_amount);

        let addresses = [
            ("link token", config.link_token),
            ("eth/usd price feed", config.eth_usd_price_feed),
            ("vrf coordinator", config.vrf_coordinator),
            ("oracle", config.oracle),
        ];
        for (label, address) in addresses {
            if let Some(address) = address {
                println!("\t{label}: {address}");
            }
        }
    }
}

fn parse_url(s: &str) -> Result<Url, url::ParseError> {
    Url::parse(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_dotenv() {
        std::env::remove_var("RUST_LOG");

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DOTENV_FILE), "RUST_LOG=trace\n").unwrap();

        let filter = env_filter(dir.path());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
