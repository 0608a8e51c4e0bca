use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::{Address, B256, U256};
use eyre::{eyre, Report, Result, WrapErr};
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use common::errors::MissingFieldError;

use crate::base::BaseConfig;
use crate::cli::CliConfig;
use crate::env::EnvConfig;
use crate::networks::{is_local_dev, Network, NetworkConfig};

pub const LOCAL_RPC_URL: &str = "http://127.0.0.1:8545";

/// Mnemonic of the prefunded accounts of hardhat and anvil nodes.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub name: String,
    pub chain_id: u64,
    pub fee: U256,
    pub key_hash: B256,
    pub job_id: String,
    pub fund_amount: U256,
    pub link_token: Option<Address>,
    pub eth_usd_price_feed: Option<Address>,
    pub vrf_coordinator: Option<Address>,
    pub oracle: Option<Address>,
    pub rpc_url: Option<String>,
    pub mnemonic: Option<String>,
    pub etherscan_api_key: Option<String>,
    pub artifacts_dir: PathBuf,
    pub deployments_dir: PathBuf,
    pub svg_path: PathBuf,
    pub confirmations: u64,
    pub oracle_wait_secs: u64,
    pub poll_interval_secs: u64,
}

impl Config {
    /// Merges, in increasing priority: the network table entry, the toml file
    /// (one table per network), environment variables and command line flags.
    pub fn from_file(
        config_path: &Path,
        network: &str,
        env_config: &EnvConfig,
        cli_config: &CliConfig,
    ) -> Result<Self> {
        let base_config = match Network::from_str(network) {
            Ok(known) => known.to_base_config(),
            Err(_) => {
                if !defines_chain_id(config_path, network) {
                    warn!(
                        target: "nftdeploy::config",
                        "unknown network {network} with no chain_id in {}, using the {} entry",
                        config_path.display(),
                        Network::Hardhat
                    );
                }

                BaseConfig {
                    name: network.to_string(),
                    ..BaseConfig::default()
                }
            }
        };

        let base_provider = Serialized::from(base_config, network);
        let toml_provider = Toml::file(config_path).nested();
        let env_provider = env_config.as_provider(network);
        let cli_provider = cli_config.as_provider(network);

        let config_res = Figment::new()
            .merge(base_provider)
            .merge(toml_provider)
            .merge(env_provider)
            .merge(cli_provider)
            .select(network)
            .extract::<Config>();

        match config_res {
            Ok(config) => Ok(config),
            Err(err) => match err.kind {
                figment::error::Kind::MissingField(field) => {
                    let missing = MissingFieldError::new(&field);
                    let flag = missing.flag();
                    Err(Report::new(missing).wrap_err(format!(
                        "try supplying the proper command line argument: {flag}, \
                         or add the field to the [{network}] table of {}",
                        config_path.display()
                    )))
                }
                _ => Err(eyre!("cannot parse configuration: {err}")),
            },
        }
    }

    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig {
            name: self.name.clone(),
            chain_id: self.chain_id,
            fee: self.fee,
            key_hash: self.key_hash,
            job_id: self.job_id.clone(),
            fund_amount: self.fund_amount,
            link_token: self.link_token,
            eth_usd_price_feed: self.eth_usd_price_feed,
            vrf_coordinator: self.vrf_coordinator,
            oracle: self.oracle,
        }
    }

    pub fn is_local_dev(&self) -> bool {
        is_local_dev(self.chain_id)
    }

    /// The node endpoint. Local networks default to `LOCAL_RPC_URL`.
    pub fn rpc_url(&self) -> Result<Url> {
        match (&self.rpc_url, self.is_local_dev()) {
            (Some(url), _) => Url::parse(url).wrap_err_with(|| format!("invalid rpc url {url}")),
            (None, true) => Ok(Url::parse(LOCAL_RPC_URL)?),
            (None, false) => Err(MissingFieldError::new("rpc_url").into()),
        }
    }

    /// The deployer mnemonic. Local networks default to `DEV_MNEMONIC`.
    pub fn mnemonic(&self) -> Result<&str> {
        match (&self.mnemonic, self.is_local_dev()) {
            (Some(mnemonic), _) => Ok(mnemonic.as_str()),
            (None, true) => Ok(DEV_MNEMONIC),
            (None, false) => Err(MissingFieldError::new("mnemonic").into()),
        }
    }

    pub fn oracle_wait(&self) -> Duration {
        Duration::from_secs(self.oracle_wait_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

/// Whether the `[network]` table of the toml file sets its own chain id.
fn defines_chain_id(config_path: &Path, network: &str) -> bool {
    Figment::from(Toml::file(config_path).nested())
        .select(network)
        .find_value("chain_id")
        .is_ok()
}

impl From<BaseConfig> for Config {
    fn from(base: BaseConfig) -> Self {
        Config {
            name: base.name,
            chain_id: base.chain_id,
            fee: base.fee,
            key_hash: base.key_hash,
            job_id: base.job_id,
            fund_amount: base.fund_amount,
            link_token: base.link_token,
            eth_usd_price_feed: base.eth_usd_price_feed,
            vrf_coordinator: base.vrf_coordinator,
            oracle: base.oracle,
            rpc_url: None,
            mnemonic: None,
            etherscan_api_key: None,
            artifacts_dir: base.artifacts_dir,
            deployments_dir: base.deployments_dir,
            svg_path: base.svg_path,
            confirmations: base.confirmations,
            oracle_wait_secs: base.oracle_wait_secs,
            poll_interval_secs: base.poll_interval_secs,
        }
    }
}

impl From<Network> for Config {
    fn from(network: Network) -> Self {
        Config::from(network.to_base_config())
    }
}
