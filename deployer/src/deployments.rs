use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tokio::fs;

use common::types::Deployment;

use crate::errors::DeploymentError;

/// Deployment records of one network, one json file per contract.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    dir: PathBuf,
}

impl DeploymentStore {
    pub fn new(root: impl AsRef<Path>, network: &str) -> Self {
        Self {
            dir: root.as_ref().join(network),
        }
    }

    pub async fn save(&self, name: &str, deployment: &Deployment) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .wrap_err_with(|| format!("cannot create {}", self.dir.display()))?;

        let path = self.path(name);
        let json = serde_json::to_string_pretty(deployment)?;
        fs::write(&path, json)
            .await
            .wrap_err_with(|| format!("cannot write {}", path.display()))?;

        Ok(())
    }

    pub async fn get(&self, name: &str) -> Result<Deployment> {
        let path = self.path(name);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DeploymentError::MissingDeployment(name.to_string()).into());
            }
            Err(err) => {
                return Err(err).wrap_err_with(|| format!("cannot read {}", path.display()));
            }
        };
        let deployment = serde_json::from_str(&contents)
            .wrap_err_with(|| format!("malformed deployment record {}", path.display()))?;

        Ok(deployment)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}
