use std::collections::HashMap;

use figment::{providers::Serialized, value::Value};

pub const MNEMONIC_VAR: &str = "MNEMONIC";
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

/// Name of the variable holding the RPC endpoint of `network`, e.g. `RINKEBY_URL`.
pub fn rpc_url_var(network: &str) -> String {
    format!("{}_URL", network.to_uppercase().replace('-', "_"))
}

/// Settings read from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub rpc_url: Option<String>,
    pub mnemonic: Option<String>,
    pub etherscan_api_key: Option<String>,
}

impl EnvConfig {
    pub fn from_env(network: &str) -> Self {
        Self::from_vars(network, std::env::vars())
    }

    /// Empty values are treated as unset.
    pub fn from_vars<I, K, V>(network: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let url_var = rpc_url_var(network);
        let mut config = EnvConfig::default();

        for (key, value) in vars {
            let value: String = value.into();
            if value.trim().is_empty() {
                continue;
            }

            match key.as_ref() {
                k if k == url_var => config.rpc_url = Some(value),
                MNEMONIC_VAR => config.mnemonic = Some(value),
                ETHERSCAN_API_KEY_VAR => config.etherscan_api_key = Some(value),
                _ => {}
            }
        }

        config
    }

    pub fn as_provider(&self, network: &str) -> Serialized<HashMap<&str, Value>> {
        let mut user_dict = HashMap::new();

        if let Some(rpc) = &self.rpc_url {
            user_dict.insert("rpc_url", Value::from(rpc.clone()));
        }

        if let Some(mnemonic) = &self.mnemonic {
            user_dict.insert("mnemonic", Value::from(mnemonic.clone()));
        }

        if let Some(key) = &self.etherscan_api_key {
            user_dict.insert("etherscan_api_key", Value::from(key.clone()));
        }

        Serialized::from(user_dict, network)
    }
}
