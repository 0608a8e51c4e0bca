use std::fmt::Display;
use std::str::FromStr;

use alloy::primitives::{address, b256, Address, B256, U256};
use eyre::Result;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::base::BaseConfig;

/// Chain id of the local development node (hardhat, anvil).
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// 0.1 LINK
const DEFAULT_FEE: u64 = 100_000_000_000_000_000;
/// 1 LINK
const DEFAULT_FUND_AMOUNT: u64 = 1_000_000_000_000_000_000;

const LOCAL_KEY_HASH: B256 =
    b256!("6c3699283bda56ad74f6b855546325b68d482e983852a7a82979cc4807b641f4");
const LOCAL_JOB_ID: &str = "29fa9aa13bf1468788b7cc4a500a45b8";

pub fn is_local_dev(chain_id: u64) -> bool {
    chain_id == LOCAL_CHAIN_ID
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, EnumIter, Hash, Eq, PartialEq, PartialOrd, Ord,
)]
pub enum Network {
    /// The fallback entry, used for any chain id without its own entry.
    Hardhat,
    Localhost,
    Rinkeby,
}

impl FromStr for Network {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hardhat" | "default" => Ok(Self::Hardhat),
            "localhost" => Ok(Self::Localhost),
            "rinkeby" => Ok(Self::Rinkeby),
            _ => Err(eyre::eyre!("network not recognized")),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Self::Hardhat => "hardhat",
            Self::Localhost => "localhost",
            Self::Rinkeby => "rinkeby",
        };

        f.write_str(str)
    }
}

impl Network {
    pub fn to_network_config(&self) -> NetworkConfig {
        match self {
            Self::Hardhat => hardhat(),
            Self::Localhost => localhost(),
            Self::Rinkeby => rinkeby(),
        }
    }

    pub fn to_base_config(&self) -> BaseConfig {
        BaseConfig::from(self.to_network_config())
    }

    /// Known chain ids map to their own entry, everything else to the default one.
    pub fn from_chain_id(id: u64) -> Self {
        match id {
            LOCAL_CHAIN_ID => Self::Localhost,
            4 => Self::Rinkeby,
            _ => Self::Hardhat,
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Per-network parameters used by the deployment scripts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    /// VRF request fee, in LINK wei.
    pub fee: U256,
    pub key_hash: B256,
    pub job_id: String,
    /// LINK sent to a freshly deployed VRF consumer.
    pub fund_amount: U256,
    pub link_token: Option<Address>,
    pub eth_usd_price_feed: Option<Address>,
    pub vrf_coordinator: Option<Address>,
    pub oracle: Option<Address>,
}

impl NetworkConfig {
    pub fn is_local_dev(&self) -> bool {
        is_local_dev(self.chain_id)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        hardhat()
    }
}

/// Look up the parameters for `chain_id`, falling back to the default entry.
pub fn network_config(chain_id: u64) -> NetworkConfig {
    Network::from_chain_id(chain_id).to_network_config()
}

pub fn hardhat() -> NetworkConfig {
    NetworkConfig {
        name: "hardhat".to_string(),
        chain_id: LOCAL_CHAIN_ID,
        fee: U256::from(DEFAULT_FEE),
        key_hash: LOCAL_KEY_HASH,
        job_id: LOCAL_JOB_ID.to_string(),
        fund_amount: U256::from(DEFAULT_FUND_AMOUNT),
        link_token: None,
        eth_usd_price_feed: None,
        vrf_coordinator: None,
        oracle: None,
    }
}

pub fn localhost() -> NetworkConfig {
    NetworkConfig {
        name: "localhost".to_string(),
        ..hardhat()
    }
}

pub fn rinkeby() -> NetworkConfig {
    NetworkConfig {
        name: "rinkeby".to_string(),
        chain_id: 4,
        fee: U256::from(DEFAULT_FEE),
        key_hash: b256!("2ed0feb3e7fd2022120aa84fab1945545a9f2ffc9076fd6156fa96eaff4c1311"),
        job_id: "6d1bfe27e7034b1d87b5270556b17277".to_string(),
        fund_amount: U256::from(DEFAULT_FUND_AMOUNT),
        link_token: Some(address!("01be23585060835e02b77ef475b0cc51aa1e0709")),
        eth_usd_price_feed: Some(address!("8A753747A1Fa494EC906cE90E9f37563A8AF630e")),
        vrf_coordinator: Some(address!("b3dCcb4Cf7a26f6cf6B120Cf5A73875B7BBc655B")),
        oracle: Some(address!("7AFe1118Ea78C1eae84ca8feE5C65Bc76CcF879e")),
    }
}
