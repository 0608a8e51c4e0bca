use std::{collections::HashMap, path::PathBuf};

use figment::{providers::Serialized, value::Value};
use serde::{Deserialize, Serialize};
use url::Url;

/// Cli Config
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CliConfig {
    pub rpc_url: Option<Url>,
    pub artifacts_dir: Option<PathBuf>,
    pub deployments_dir: Option<PathBuf>,
    pub svg_path: Option<PathBuf>,
    pub confirmations: Option<u64>,
    pub oracle_wait_secs: Option<u64>,
    pub poll_interval_secs: Option<u64>,
}

impl CliConfig {
    pub fn as_provider(&self, network: &str) -> Serialized<HashMap<&str, Value>> {
        let mut user_dict = HashMap::new();

        if let Some(rpc) = &self.rpc_url {
            user_dict.insert("rpc_url", Value::from(rpc.to_string()));
        }

        if let Some(dir) = &self.artifacts_dir {
            user_dict.insert("artifacts_dir", Value::from(dir.to_string_lossy().to_string()));
        }

        if let Some(dir) = &self.deployments_dir {
            user_dict.insert(
                "deployments_dir",
                Value::from(dir.to_string_lossy().to_string()),
            );
        }

        if let Some(path) = &self.svg_path {
            user_dict.insert("svg_path", Value::from(path.to_string_lossy().to_string()));
        }

        if let Some(confirmations) = self.confirmations {
            user_dict.insert("confirmations", Value::from(confirmations));
        }

        if let Some(secs) = self.oracle_wait_secs {
            user_dict.insert("oracle_wait_secs", Value::from(secs));
        }

        if let Some(secs) = self.poll_interval_secs {
            user_dict.insert("poll_interval_secs", Value::from(secs));
        }

        Serialized::from(user_dict, network)
    }
}
