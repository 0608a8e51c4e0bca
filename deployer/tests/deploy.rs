use alloy::{
    network::TransactionBuilder,
    primitives::{address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};

use common::types::ConstructorArgs;
use deployer::contracts::{LINK_TOKEN, SVG_NFT};
use deployer::errors::{ArtifactError, DeploymentError};
use deployer::funding::fund_with_link;

mod setup;

use crate::setup::{setup_local, REVERT_CODE, STOP_CODE, ZERO_TOKEN_CODE};

#[tokio::test]
async fn test_deploy_records_contract() {
    let test = setup_local().await.unwrap();
    test.write_artifact(SVG_NFT, STOP_CODE);

    let deployment = test
        .env
        .deploy(SVG_NFT, ConstructorArgs::none())
        .await
        .unwrap();

    assert!(deployment.transaction_hash.is_some());
    assert!(test
        .deployments
        .path()
        .join("localhost/SVGNFT.json")
        .is_file());
    assert_eq!(test.env.get(SVG_NFT).await.unwrap(), deployment);

    let code = test
        .env
        .provider()
        .get_code_at(deployment.address)
        .await
        .unwrap();
    assert_eq!(code.to_vec(), vec![0x00]);
}

#[tokio::test]
async fn test_deploy_without_artifact() {
    let test = setup_local().await.unwrap();

    let err = test
        .env
        .deploy(SVG_NFT, ConstructorArgs::none())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ArtifactError>(),
        Some(ArtifactError::NotFound { .. })
    ));
    assert!(test.env.get(SVG_NFT).await.is_err());
}

#[tokio::test]
async fn test_confirm_rejects_reverted_receipt() {
    let test = setup_local().await.unwrap();

    let tx = TransactionRequest::default()
        .with_from(test.env.deployer())
        .with_deploy_code(alloy::hex::decode(REVERT_CODE).unwrap())
        .with_gas_limit(100_000);
    let pending = test.env.provider().send_transaction(tx).await.unwrap();

    let err = test.env.confirm(pending).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DeploymentError>(),
        Some(DeploymentError::Reverted(_))
    ));
}

#[tokio::test]
async fn test_funding_needs_link_balance() {
    let test = setup_local().await.unwrap();
    test.write_artifact(LINK_TOKEN, ZERO_TOKEN_CODE);
    let link = test
        .env
        .deploy(LINK_TOKEN, ConstructorArgs::none())
        .await
        .unwrap();

    let recipient = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
    let err = fund_with_link(&test.env, link.address, recipient, U256::from(1))
        .await
        .unwrap_err();

    match err.downcast_ref::<DeploymentError>() {
        Some(DeploymentError::InsufficientLink {
            account,
            balance,
            required,
        }) => {
            assert_eq!(*account, test.env.deployer());
            assert_eq!(*balance, U256::ZERO);
            assert_eq!(*required, U256::from(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_funding_within_balance() {
    let test = setup_local().await.unwrap();
    test.write_artifact(LINK_TOKEN, ZERO_TOKEN_CODE);
    let link = test
        .env
        .deploy(LINK_TOKEN, ConstructorArgs::none())
        .await
        .unwrap();

    let recipient = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
    let receipt = fund_with_link(&test.env, link.address, recipient, U256::ZERO)
        .await
        .unwrap();

    assert_eq!(receipt.to, Some(link.address));
}
