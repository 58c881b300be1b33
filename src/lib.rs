//! # Chain of Responsibility for Value Resolution
//!
//! This crate demonstrates resolving a single value from several sources,
//! trying each in turn.
//!
//! ## Pattern 1: Resolver Chain
//! - Producers as boxed closures (`Box<dyn Fn() -> Result<String, E>>`)
//! - Short-circuit on the first failure
//! - Short-circuit on the first non-empty value
//! - Terminal node for an exhausted chain
//! - Iterative construction over a node vector instead of recursion
//!
//! ## Pattern 2: Producer Adapters
//! - Fixed, empty and failing stand-ins for tests
//! - Environment variables and TOML file keys as sources
//!
//! ## Pattern 3: Strategy with First-Class Functions
//! - Passing behavior as `impl Fn` instead of a one-method trait
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_endpoint_chain
//! cargo run --example p1_short_circuit
//! cargo run --example p2_producer_adapters
//! cargo run --example p3_greeting_strategy
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the error types
//! - `tracing` - Events emitted while walking a chain
//! - `toml` / `serde` - TOML file producer and demo settings

pub mod chain;
pub mod error;
pub mod logging;
pub mod producers;
pub mod settings;
pub mod strategy;

pub use chain::{build, Chain, Outcome, Producer};
pub use error::ProducerFailure;
