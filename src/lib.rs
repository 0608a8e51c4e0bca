//! # NFT deployment tooling
//!
//! Deploys an on-chain SVG NFT and a Chainlink VRF randomized SVG NFT from compiled
//! artifacts, funds the VRF consumer with LINK, mints a token and reads back its URI.
//!
//! ## Breakdown of exported modules
//!
//! ### `deployer`
//!
//! `DeployEnvBuilder` connects a signing provider to the target node and produces a
//! `DeployEnv`. The `scripts` module runs the tagged deployment scripts against it.
//!
//! ### `config`
//!
//! The per-chain network table and the layered `Config` (network table, toml file,
//! environment, command line).
//!
//! ### `types`
//!
//! Deployment records and script outcomes.
//!
//! ### `errors`
//!
//! Errors shared across crates.

pub mod deployer {
    pub use deployer::*;
}

pub mod config {
    pub use config::{networks, CliConfig, Config, EnvConfig, Network, NetworkConfig};
}

pub mod types {
    pub use common::types::*;
}

pub mod errors {
    pub use common::errors::*;
    pub use deployer::errors::*;
}

pub mod prelude {
    pub use crate::config::*;
    pub use crate::deployer::{scripts::Script, DeployEnv, DeployEnvBuilder};
    pub use crate::types::*;
}
