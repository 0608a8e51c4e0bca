use alloy::{
    primitives::{Address, U256},
    sol_types::SolConstructor,
};
use eyre::Result;
use tracing::info;

use common::errors::MissingFieldError;
use common::types::{ConstructorArgs, MintOutcome};

use crate::contracts::{
    RandomSVGNFT, VRFCoordinatorMock, LINK_TOKEN, RANDOM_SVG_NFT, VRF_COORDINATOR_MOCK,
};
use crate::env::DeployEnv;
use crate::errors::DeploymentError;
use crate::events::find_event;
use crate::funding::fund_with_link;
use crate::oracle::{poll_until_nonzero, MOCK_RANDOMNESS};
use crate::scripts::SEPARATOR;
use crate::verify::VerifyCommand;

const CREATE_GAS_LIMIT: u64 = 300_000;
const FINISH_MINT_GAS_LIMIT: u64 = 2_000_000;

/// LINK token and VRF coordinator: the mocks on local networks, the configured
/// addresses elsewhere.
async fn vrf_addresses(env: &DeployEnv) -> Result<(Address, Address)> {
    if env.is_local_dev() {
        let link_token = env.get(LINK_TOKEN).await?.address;
        let vrf_coordinator = env.get(VRF_COORDINATOR_MOCK).await?.address;
        return Ok((link_token, vrf_coordinator));
    }

    let network = env.network_config();
    let link_token = network
        .link_token
        .ok_or_else(|| MissingFieldError::new("link_token"))?;
    let vrf_coordinator = network
        .vrf_coordinator
        .ok_or_else(|| MissingFieldError::new("vrf_coordinator"))?;

    Ok((link_token, vrf_coordinator))
}

/// Deploys `RandomSVGNFT`, funds it with LINK and mints one token once the
/// VRF coordinator has delivered randomness.
pub async fn deploy_random_svg_nft(env: &DeployEnv) -> Result<MintOutcome> {
    let network = env.network_config();
    let (link_token, vrf_coordinator) = vrf_addresses(env).await?;

    let constructor = RandomSVGNFT::constructorCall {
        vrfCoordinator: vrf_coordinator,
        linkToken: link_token,
        keyHash: network.key_hash,
        fee: network.fee,
    };
    let args = ConstructorArgs::new(
        constructor.abi_encode(),
        vec![
            vrf_coordinator.to_string(),
            link_token.to_string(),
            network.key_hash.to_string(),
            network.fee.to_string(),
        ],
    );

    info!(target: "nftdeploy::rsvg", "{SEPARATOR}");

    let deployment = env.deploy(RANDOM_SVG_NFT, args).await?;
    let address = deployment.address;
    info!(target: "nftdeploy::rsvg", "you have deployed a RandomSVGNFT contract to {address}");

    let verify = VerifyCommand::new(env.network_name(), address, &deployment.args);
    info!(target: "nftdeploy::rsvg", "verify with:\n\t{verify}");

    fund_with_link(env, link_token, address, network.fund_amount).await?;

    let rsvg = RandomSVGNFT::new(address, env.provider().clone());
    let pending = rsvg.create().gas(CREATE_GAS_LIMIT).send().await?;
    let receipt = env.confirm(pending).await?;

    let requested = find_event::<RandomSVGNFT::requestedRandomSVG>(&receipt)?;
    let token_id = requested.tokenId;
    info!(
        target: "nftdeploy::rsvg",
        "requested randomness for token {token_id} (request {})",
        requested.requestId
    );

    if env.is_local_dev() {
        let vrf = VRFCoordinatorMock::new(vrf_coordinator, env.provider().clone());
        let pending = vrf
            .callBackWithRandomness(requested.requestId, U256::from(MOCK_RANDOMNESS), address)
            .send()
            .await?;
        env.confirm(pending).await?;
    } else {
        let wait = env.config().oracle_wait();
        info!(
            target: "nftdeploy::rsvg",
            "waiting up to {}s for the VRF coordinator to respond...",
            wait.as_secs()
        );

        let randomness = poll_until_nonzero(
            || {
                let call = rsvg.tokenIdToRandomNumber(token_id);
                async move { Ok::<_, eyre::Report>(call.call().await?) }
            },
            wait,
            env.config().poll_interval(),
        )
        .await?
        .ok_or(DeploymentError::OracleTimeout {
            token_id,
            waited: wait,
        })?;

        info!(target: "nftdeploy::rsvg", "received random number {randomness}");
    }

    let pending = rsvg
        .finishMint(token_id)
        .gas(FINISH_MINT_GAS_LIMIT)
        .send()
        .await?;
    env.confirm(pending).await?;

    let token_uri = rsvg.tokenURI(token_id).call().await?;
    info!(target: "nftdeploy::rsvg", "minted token {token_id}");
    info!(target: "nftdeploy::rsvg", "tokenURI: {token_uri}");

    Ok(MintOutcome {
        contract: address,
        token_id,
        token_uri,
    })
}
