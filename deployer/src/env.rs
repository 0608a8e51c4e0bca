use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use eyre::{Result, WrapErr};
use tracing::info;

use common::errors::RevertedError;
use common::types::{ConstructorArgs, Deployment};
use config::{networks::is_local_dev, Config, NetworkConfig};

use crate::artifacts::ArtifactStore;
use crate::deployments::DeploymentStore;
use crate::errors::DeploymentError;

/// Everything a deployment script needs: a signing provider connected to the
/// target node, the network parameters and the artifact and deployment stores.
pub struct DeployEnv {
    pub(crate) provider: DynProvider,
    pub(crate) deployer: Address,
    pub(crate) chain_id: u64,
    pub(crate) config: Config,
    pub(crate) artifacts: ArtifactStore,
    pub(crate) deployments: DeploymentStore,
}

impl DeployEnv {
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Address of the account sending every transaction.
    pub fn deployer(&self) -> Address {
        self.deployer
    }

    /// Chain id reported by the node.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn network_config(&self) -> NetworkConfig {
        self.config.network_config()
    }

    pub fn network_name(&self) -> &str {
        &self.config.name
    }

    pub fn is_local_dev(&self) -> bool {
        is_local_dev(self.chain_id)
    }

    /// Looks up a contract deployed earlier on this network.
    pub async fn get(&self, name: &str) -> Result<Deployment> {
        self.deployments.get(name).await
    }

    /// Deploys the artifact called `name` and records it.
    pub async fn deploy(&self, name: &str, args: ConstructorArgs) -> Result<Deployment> {
        let artifact = self.artifacts.load(name).await?;

        let mut code = artifact.bytecode.to_vec();
        code.extend_from_slice(&args.encoded);

        let tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_deploy_code(code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .wrap_err_with(|| format!("cannot send {name} deployment"))?;

        info!(
            target: "nftdeploy::deploy",
            "deploying \"{name}\" (tx: {})...",
            pending.tx_hash()
        );

        let receipt = self.confirm(pending).await?;
        let address = receipt
            .contract_address
            .ok_or_else(|| DeploymentError::NoContractAddress(name.to_string()))?;

        info!(
            target: "nftdeploy::deploy",
            "deployed \"{name}\" at {address} with {} gas",
            receipt.gas_used
        );

        let deployment = Deployment {
            address,
            transaction_hash: Some(receipt.transaction_hash),
            args: args.display,
        };
        self.deployments.save(name, &deployment).await?;

        Ok(deployment)
    }

    /// Waits for the configured number of confirmations and fails on revert.
    pub async fn confirm(
        &self,
        pending: PendingTransactionBuilder<Ethereum>,
    ) -> Result<TransactionReceipt> {
        let tx_hash = *pending.tx_hash();
        let receipt = pending
            .with_required_confirmations(self.config.confirmations)
            .get_receipt()
            .await
            .wrap_err_with(|| format!("no receipt for {tx_hash}"))?;

        if !receipt.status() {
            return Err(DeploymentError::from(RevertedError::new(tx_hash)).into());
        }

        Ok(receipt)
    }
}
