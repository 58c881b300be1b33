use std::fs;

use resolver_chain::producers::{from_env, from_toml_file};
use resolver_chain::{chain, Chain, ProducerFailure};

fn load_endpoint_from_database() -> Result<String, ProducerFailure> {
    Ok("some-endpoint".to_string())
}

#[test]
fn falls_through_to_database() {
    let dir = tempfile::tempdir().unwrap();

    let chain: Chain = chain![
        from_toml_file(dir.path().join("endpoint.toml"), "endpoint.hostname"),
        from_env("RESOLVER_CHAIN_IT_UNSET_ENDPOINT"),
        load_endpoint_from_database,
    ];

    assert_eq!(chain.resolve(), Ok("some-endpoint".to_string()));
}

#[test]
fn config_file_takes_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("endpoint.toml");
    fs::write(&path, "[endpoint]\nhostname = \"file-endpoint\"\nport = 9090\n").unwrap();

    let chain: Chain = chain![
        from_toml_file(&path, "endpoint.hostname"),
        from_env("RESOLVER_CHAIN_IT_UNSET_ENDPOINT"),
        load_endpoint_from_database,
    ];

    assert_eq!(chain.resolve(), Ok("file-endpoint".to_string()));
}

#[test]
fn broken_config_file_stops_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("endpoint.toml");
    fs::write(&path, "[endpoint\n").unwrap();

    let chain: Chain = chain![
        from_toml_file(&path, "endpoint.hostname"),
        load_endpoint_from_database,
    ];

    let failure = chain.resolve().unwrap_err();
    assert!(failure.message().starts_with("failed to parse"));
    assert!(std::error::Error::source(&failure).is_some());
}
