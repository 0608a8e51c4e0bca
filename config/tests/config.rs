use std::io::Write;
use std::path::PathBuf;

use alloy::primitives::{address, U256};
use config::{CliConfig, Config, EnvConfig};

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_base_config_without_file() {
    let path = PathBuf::from("does-not-exist.toml");
    let config = Config::from_file(
        &path,
        "rinkeby",
        &EnvConfig::default(),
        &CliConfig::default(),
    )
    .unwrap();

    assert_eq!(config.name, "rinkeby");
    assert_eq!(config.chain_id, 4);
    assert_eq!(
        config.vrf_coordinator,
        Some(address!("b3dCcb4Cf7a26f6cf6B120Cf5A73875B7BBc655B"))
    );
    assert_eq!(config.confirmations, 1);
    assert_eq!(config.oracle_wait_secs, 180);
}

#[test]
fn test_layer_priority() {
    let file = write_toml(
        r#"
        [rinkeby]
        rpc_url = "https://from-file.example"
        fund_amount = "2000000000000000000"
        oracle_wait_secs = 60

        [localhost]
        rpc_url = "http://ignored.example"
        "#,
    );

    let env = EnvConfig::from_vars(
        "rinkeby",
        [
            ("RINKEBY_URL", "https://from-env.example"),
            ("MNEMONIC", "test test test test test test test test test test test junk"),
        ],
    );
    let cli = CliConfig {
        oracle_wait_secs: Some(30),
        ..Default::default()
    };

    let config = Config::from_file(file.path(), "rinkeby", &env, &cli).unwrap();

    assert_eq!(config.rpc_url.as_deref(), Some("https://from-env.example"));
    assert_eq!(config.fund_amount, U256::from(2_000_000_000_000_000_000u64));
    assert_eq!(config.oracle_wait_secs, 30);
    assert!(config.mnemonic().is_ok());
}

#[test]
fn test_unknown_network_uses_default_entry() {
    let file = write_toml(
        r#"
        [sepolia]
        chain_id = 11155111
        rpc_url = "https://sepolia.example"
        link_token = "0x779877A7B0D9E8603169DdbD7836e478b4624789"
        "#,
    );

    let config = Config::from_file(
        file.path(),
        "sepolia",
        &EnvConfig::default(),
        &CliConfig::default(),
    )
    .unwrap();

    assert_eq!(config.name, "sepolia");
    assert_eq!(config.chain_id, 11155111);
    assert!(!config.is_local_dev());
    assert!(config.link_token.is_some());
    assert_eq!(config.vrf_coordinator, None);
    assert_eq!(config.job_id, "29fa9aa13bf1468788b7cc4a500a45b8");
}

#[test]
fn test_invalid_field_is_reported() {
    let file = write_toml(
        r#"
        [localhost]
        confirmations = "many"
        "#,
    );

    let err = Config::from_file(
        file.path(),
        "localhost",
        &EnvConfig::default(),
        &CliConfig::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("cannot parse configuration"));
}
