use alloy::sol_types::SolConstructor;
use eyre::Result;
use tracing::{debug, info};

use common::types::ConstructorArgs;

use crate::contracts::{VRFCoordinatorMock, LINK_TOKEN, VRF_COORDINATOR_MOCK};
use crate::env::DeployEnv;

/// Deploys `LinkToken` and `VRFCoordinatorMock` on the local development chain.
pub async fn deploy_mocks(env: &DeployEnv) -> Result<()> {
    if !env.is_local_dev() {
        debug!(
            target: "nftdeploy::mocks",
            "chain {} is not a local network, skipping mocks",
            env.chain_id()
        );
        return Ok(());
    }

    info!(target: "nftdeploy::mocks", "local network detected, deploying mocks...");

    let link = env.deploy(LINK_TOKEN, ConstructorArgs::none()).await?;

    let constructor = VRFCoordinatorMock::constructorCall {
        linkToken: link.address,
    };
    let args = ConstructorArgs::new(constructor.abi_encode(), vec![link.address.to_string()]);
    env.deploy(VRF_COORDINATOR_MOCK, args).await?;

    info!(target: "nftdeploy::mocks", "mocks deployed");

    Ok(())
}
