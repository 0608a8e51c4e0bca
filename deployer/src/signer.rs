use alloy::primitives::Address;
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use eyre::{Result, WrapErr};

/// Derives the signer at `index` of the default derivation path `m/44'/60'/0'/0/{index}`.
pub fn from_mnemonic(phrase: &str, index: u32) -> Result<PrivateKeySigner> {
    MnemonicBuilder::<English>::default()
        .phrase(phrase.trim())
        .index(index)
        .wrap_err("invalid derivation index")?
        .build()
        .wrap_err("cannot derive signer from mnemonic")
}

pub fn derive_accounts(phrase: &str, count: u32) -> Result<Vec<Address>> {
    (0..count)
        .map(|index| from_mnemonic(phrase, index).map(|signer| signer.address()))
        .collect()
}
