use std::fmt::Display;

use alloy::primitives::Address;

/// Block explorer verification command for a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCommand {
    pub network: String,
    pub address: Address,
    pub args: Vec<String>,
}

impl VerifyCommand {
    pub fn new(network: &str, address: Address, args: &[String]) -> Self {
        Self {
            network: network.to_string(),
            address,
            args: args.to_vec(),
        }
    }
}

impl Display for VerifyCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "npx hardhat verify --network {} {}",
            self.network, self.address
        )?;

        for arg in &self.args {
            write!(f, " {arg}")?;
        }

        Ok(())
    }
}
