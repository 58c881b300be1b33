//! Pattern 1: Resolver Chain
//! Example: Resolving an endpoint from file, environment, then a fallback
//!
//! Run with: cargo run --example p1_endpoint_chain [settings.toml]

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use resolver_chain::logging::init_logging;
use resolver_chain::settings::DemoSettings;
use resolver_chain::{producers, Chain, Outcome};

// Stands in for a database lookup.
fn load_endpoint_from_database(fallback: &str) -> Result<String, resolver_chain::ProducerFailure> {
    tracing::info!("querying endpoint table");
    Ok(fallback.to_string())
}

fn main() -> anyhow::Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => DemoSettings::load(Path::new(&path))
            .with_context(|| format!("loading demo settings from {path}"))?,
        None => DemoSettings::default(),
    };

    init_logging(&settings.log_level);

    println!("=== Endpoint Resolution Chain ===\n");
    println!("1. {} key {}", settings.config_file.display(), settings.config_key);
    println!("2. ${}", settings.env_var);
    println!("3. database\n");

    // Usage: each source is tried in order; the first non-empty answer wins.
    let chain = Chain::new()
        .link(producers::from_toml_file(
            settings.config_file.clone(),
            settings.config_key.clone(),
        ))
        .link(producers::from_env(settings.env_var.clone()))
        .link(|| load_endpoint_from_database(&settings.fallback));

    match chain.resolve_outcome() {
        Outcome::Resolved(endpoint) => println!("{} {}", "Endpoint:".green().bold(), endpoint),
        Outcome::Exhausted => println!("{}", "No source provided an endpoint".yellow()),
        Outcome::Failed(failure) => {
            return Err(failure).context("resolving endpoint");
        }
    }

    println!("\n=== Key Points ===");
    println!("- Sources are tried in order; later ones run only if earlier ones are empty");
    println!("- A failing source stops the chain and its error reaches the caller untouched");
    println!("- Building the chain calls nothing; resolve() does the work");

    Ok(())
}
