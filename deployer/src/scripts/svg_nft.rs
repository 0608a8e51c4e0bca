use eyre::{Result, WrapErr};
use tracing::info;

use common::types::{ConstructorArgs, MintOutcome};

use crate::contracts::{SVGNFT, SVG_NFT};
use crate::env::DeployEnv;
use crate::events::find_event;
use crate::scripts::SEPARATOR;
use crate::verify::VerifyCommand;

/// Deploys `SVGNFT` and mints one token from the configured SVG file.
pub async fn deploy_svg_nft(env: &DeployEnv) -> Result<MintOutcome> {
    info!(target: "nftdeploy::svg", "{SEPARATOR}");

    let deployment = env.deploy(SVG_NFT, ConstructorArgs::none()).await?;
    let address = deployment.address;
    info!(target: "nftdeploy::svg", "you have deployed an NFT contract to {address}");

    let verify = VerifyCommand::new(env.network_name(), address, &deployment.args);
    info!(target: "nftdeploy::svg", "verify with:\n\t{verify}");

    let svg_path = &env.config().svg_path;
    let svg = tokio::fs::read_to_string(svg_path)
        .await
        .wrap_err_with(|| format!("cannot read svg {}", svg_path.display()))?;
    info!(
        target: "nftdeploy::svg",
        "using {} as the SVG, it will turn into a tokenURI",
        svg_path.display()
    );

    let nft = SVGNFT::new(address, env.provider().clone());
    let pending = nft.create(svg).send().await?;
    let receipt = env.confirm(pending).await?;

    let created = find_event::<SVGNFT::CreatedSVGNFT>(&receipt)?;
    let token_id = created.tokenId;
    let token_uri = nft.tokenURI(token_id).call().await?;

    info!(target: "nftdeploy::svg", "minted token {token_id}");
    info!(target: "nftdeploy::svg", "tokenURI: {token_uri}");

    Ok(MintOutcome {
        contract: address,
        token_id,
        token_uri,
    })
}
