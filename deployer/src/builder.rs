use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
};
use eyre::{eyre, Result, WrapErr};
use tracing::{info, warn};

use config::Config;

use crate::artifacts::ArtifactStore;
use crate::deployments::DeploymentStore;
use crate::env::DeployEnv;
use crate::signer;

#[derive(Default)]
pub struct DeployEnvBuilder {
    config: Option<Config>,
    account_index: u32,
}

impl DeployEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Mnemonic account used as the deployer, 0 by default.
    pub fn account_index(mut self, index: u32) -> Self {
        self.account_index = index;
        self
    }

    pub async fn build(self) -> Result<DeployEnv> {
        let config = self.config.ok_or_else(|| eyre!("missing config"))?;

        let rpc_url = config.rpc_url()?;
        let signer = signer::from_mnemonic(config.mnemonic()?, self.account_index)?;
        let deployer = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url.clone())
            .erased();

        let chain_id = provider
            .get_chain_id()
            .await
            .wrap_err_with(|| format!("cannot reach node at {rpc_url}"))?;

        if chain_id != config.chain_id {
            warn!(
                target: "nftdeploy::env",
                "network {} is configured for chain {} but the node reports chain {}",
                config.name,
                config.chain_id,
                chain_id
            );
        }

        info!(
            target: "nftdeploy::env",
            "connected to {} (chain {chain_id}) as {deployer}",
            config.name
        );

        Ok(DeployEnv {
            provider,
            deployer,
            chain_id,
            artifacts: ArtifactStore::new(&config.artifacts_dir),
            deployments: DeploymentStore::new(&config.deployments_dir, &config.name),
            config,
        })
    }
}
