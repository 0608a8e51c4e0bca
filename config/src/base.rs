use std::path::PathBuf;

use alloy::primitives::{Address, B256, U256};
use serde::Serialize;

use crate::networks::NetworkConfig;

pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "deployments";
pub const DEFAULT_SVG_PATH: &str = "image/star.svg";

/// The base configuration for a network.
#[derive(Serialize, Debug, Clone)]
pub struct BaseConfig {
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
    pub artifacts_dir: PathBuf,
    pub deployments_dir: PathBuf,
    pub svg_path: PathBuf,
    pub confirmations: u64,
    pub oracle_wait_secs: u64,
    pub poll_interval_secs: u64,
}

impl From<NetworkConfig> for BaseConfig {
    fn from(network: NetworkConfig) -> Self {
        BaseConfig {
            name: network.name,
            chain_id: network.chain_id,
            fee: network.fee,
            key_hash: network.key_hash,
            job_id: network.job_id,
            fund_amount: network.fund_amount,
            link_token: network.link_token,
            eth_usd_price_feed: network.eth_usd_price_feed,
            vrf_coordinator: network.vrf_coordinator,
            oracle: network.oracle,
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            deployments_dir: PathBuf::from(DEFAULT_DEPLOYMENTS_DIR),
            svg_path: PathBuf::from(DEFAULT_SVG_PATH),
            confirmations: 1,
            oracle_wait_secs: 180,
            poll_interval_secs: 10,
        }
    }
}

impl Default for BaseConfig {
    fn default() -> Self {
        BaseConfig::from(NetworkConfig::default())
    }
}
