#![allow(dead_code)]

use std::fs;
use std::path::Path;

use alloy::node_bindings::{Anvil, AnvilInstance};
use config::{Config, Network, DEV_MNEMONIC};
use deployer::{DeployEnv, DeployEnvBuilder};
use tempfile::TempDir;

/// Creation code returning a one byte `STOP` runtime.
pub const STOP_CODE: &str = "0x6001600c60003960016000f300";

/// Creation code of a contract answering every call with a zero word, so
/// `balanceOf` reads 0 and `transfer` succeeds without moving anything.
pub const ZERO_TOKEN_CODE: &str = "0x600a600c600039600a6000f3600060005260206000f3";

/// Creation code that reverts.
pub const REVERT_CODE: &str = "0x60006000fd";

pub struct TestEnv {
    pub env: DeployEnv,
    pub artifacts: TempDir,
    pub deployments: TempDir,
    _anvil: AnvilInstance,
}

impl TestEnv {
    /// Writes a hardhat-style artifact holding `bytecode`.
    pub fn write_artifact(&self, name: &str, bytecode: &str) {
        write_artifact(self.artifacts.path(), name, bytecode);
    }
}

pub fn write_artifact(root: &Path, name: &str, bytecode: &str) {
    let dir = root.join("contracts").join(format!("{name}.sol"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{name}.json")),
        format!(r#"{{ "contractName": "{name}", "abi": [], "bytecode": "{bytecode}" }}"#),
    )
    .unwrap();
}

/// Spawns an anvil node on `chain_id` and connects a deploy environment for
/// `network` to it. `customize` runs on the config before connecting.
pub async fn setup_with(
    network: Network,
    chain_id: u64,
    customize: impl FnOnce(&mut Config),
) -> eyre::Result<TestEnv> {
    let anvil = Anvil::new().chain_id(chain_id).try_spawn()?;
    let artifacts = tempfile::tempdir()?;
    let deployments = tempfile::tempdir()?;

    let mut config = Config::from(network);
    config.rpc_url = Some(anvil.endpoint());
    config.mnemonic = Some(DEV_MNEMONIC.to_string());
    config.artifacts_dir = artifacts.path().to_path_buf();
    config.deployments_dir = deployments.path().to_path_buf();
    config.confirmations = 1;
    customize(&mut config);

    let env = DeployEnvBuilder::new().config(config).build().await?;

    Ok(TestEnv {
        env,
        artifacts,
        deployments,
        _anvil: anvil,
    })
}

pub async fn setup_local() -> eyre::Result<TestEnv> {
    setup_with(Network::Localhost, 31337, |_| {}).await
}

pub async fn setup_rinkeby() -> eyre::Result<TestEnv> {
    setup_with(Network::Rinkeby, 4, |_| {}).await
}
