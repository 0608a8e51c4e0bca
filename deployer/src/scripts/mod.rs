use eyre::{eyre, Result};
use strum::{EnumIter, IntoEnumIterator};
use tracing::info;

use common::types::MintOutcome;

use crate::env::DeployEnv;

pub mod mocks;
pub mod random_svg_nft;
pub mod svg_nft;

pub const SEPARATOR: &str = "----------------------------------------------------";

/// The deployment scripts, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Script {
    Mocks,
    SvgNft,
    RandomSvgNft,
}

impl Script {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mocks => "00_deploy_mocks",
            Self::SvgNft => "01_deploy_svg_nft",
            Self::RandomSvgNft => "02_deploy_random_svg_nft",
        }
    }

    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Self::Mocks => &["all", "mocks", "svg", "rsvg"],
            Self::SvgNft => &["all", "svg"],
            Self::RandomSvgNft => &["all", "rsvg"],
        }
    }

    /// An empty tag list selects every script.
    pub fn matches(&self, tags: &[String]) -> bool {
        tags.is_empty() || tags.iter().any(|tag| self.tags().contains(&tag.as_str()))
    }

    pub async fn run(&self, env: &DeployEnv) -> Result<Option<MintOutcome>> {
        match self {
            Self::Mocks => mocks::deploy_mocks(env).await.map(|_| None),
            Self::SvgNft => svg_nft::deploy_svg_nft(env).await.map(Some),
            Self::RandomSvgNft => random_svg_nft::deploy_random_svg_nft(env).await.map(Some),
        }
    }
}

pub fn select(tags: &[String]) -> Result<Vec<Script>> {
    let scripts: Vec<Script> = Script::iter().filter(|s| s.matches(tags)).collect();
    if scripts.is_empty() {
        return Err(eyre!("no deployment script matches tags {tags:?}"));
    }

    Ok(scripts)
}

/// Runs the scripts selected by `tags` one after the other, stopping at the first failure.
pub async fn run(env: &DeployEnv, tags: &[String]) -> Result<Vec<MintOutcome>> {
    let mut outcomes = Vec::new();

    for script in select(tags)? {
        info!(target: "nftdeploy::scripts", "running {}", script.name());
        if let Some(outcome) = script.run(env).await? {
            outcomes.push(outcome);
        }
    }

    Ok(outcomes)
}
