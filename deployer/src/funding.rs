use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
};
use eyre::Result;
use tracing::info;

use crate::contracts::LinkToken;
use crate::env::DeployEnv;
use crate::errors::DeploymentError;

/// Sends `amount` LINK from the deployer to `recipient`.
pub async fn fund_with_link(
    env: &DeployEnv,
    link_token: Address,
    recipient: Address,
    amount: U256,
) -> Result<TransactionReceipt> {
    let link = LinkToken::new(link_token, env.provider().clone());

    let balance = link.balanceOf(env.deployer()).call().await?;
    if balance < amount {
        return Err(DeploymentError::InsufficientLink {
            account: env.deployer(),
            balance,
            required: amount,
        }
        .into());
    }

    info!(
        target: "nftdeploy::funding",
        "funding {recipient} with {amount} LINK wei from {link_token}"
    );

    let pending = link.transfer(recipient, amount).send().await?;
    env.confirm(pending).await
}
