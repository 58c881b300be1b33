//! Pattern 2: Producer Adapters
//! Example: What each ready-made producer returns on its own
//!
//! Run with: cargo run --example p2_producer_adapters

use std::fs;

use anyhow::Context;
use colored::Colorize;
use resolver_chain::{producers, ProducerFailure};

fn show(label: &str, result: Result<String, ProducerFailure>) {
    let line = match result {
        Ok(value) if value.is_empty() => "Ok(\"\")  -> chain moves on".yellow(),
        Ok(value) => format!("Ok({value:?})").green(),
        Err(failure) => format!("Err({failure})").red(),
    };
    println!("{label:<32} {line}");
}

fn main() -> anyhow::Result<()> {
    println!("=== Stand-ins ===\n");
    show("fixed(\"some-endpoint\")", producers::fixed("some-endpoint")());
    show("empty()", producers::empty()());
    show("failing(\"boom\")", producers::failing("boom")());

    println!("\n=== Environment ===\n");
    show(
        "from_env(\"PATH\")",
        producers::from_env("PATH")().map(|p| format!("{} chars", p.len())),
    );
    show("from_env(\"NO_SUCH_VAR_HERE\")", producers::from_env("NO_SUCH_VAR_HERE")());

    println!("\n=== TOML File ===\n");
    let dir = std::env::temp_dir().join("resolver-chain-p2");
    fs::create_dir_all(&dir).context("creating demo directory")?;
    let path = dir.join("endpoint.toml");
    fs::write(
        &path,
        "[endpoint]\nhostname = \"file-endpoint\"\nport = 9090\nweight = 1.0\nports = [80, 443]\n",
    )
    .context("writing demo config")?;

    // Usage: a dotted key walks nested tables.
    let keys = [
        "endpoint.hostname",
        "endpoint.port",
        "endpoint.weight",
        "endpoint.missing",
        "endpoint.ports",
    ];
    for key in keys {
        show(key, producers::from_toml_file(&path, key)());
    }
    show(
        "absent file",
        producers::from_toml_file(dir.join("absent.toml"), "endpoint.hostname")(),
    );

    let _ = fs::remove_dir_all(&dir);

    println!("\n=== Key Points ===");
    println!("- Missing sources answer Ok(\"\"), so the chain falls through");
    println!("- Broken sources answer Err, so the chain stops");
    println!("- Scalars become strings; tables and arrays are errors");

    Ok(())
}
