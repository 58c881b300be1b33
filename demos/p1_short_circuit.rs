//! Pattern 1: Resolver Chain
//! Example: Short-circuit on value vs. short-circuit on failure
//!
//! Run with: cargo run --example p1_short_circuit

use std::cell::Cell;

use colored::Colorize;
use resolver_chain::{build, chain, producers, Chain, Outcome, Producer};

fn report(label: &str, chain: &Chain) {
    let line = match chain.resolve_outcome() {
        Outcome::Resolved(value) => format!("resolved to {value:?}").green(),
        Outcome::Exhausted => "exhausted, empty value".yellow(),
        Outcome::Failed(failure) => format!("failed: {failure}").red(),
    };
    println!("{label:<28} {line}");
}

fn main() {
    println!("=== Short-Circuit Rules ===\n");

    let first_wins: Chain = chain![producers::fixed("FIRST"), producers::fixed("SECOND")];
    report("first non-empty wins:", &first_wins);

    let mut skipping: Vec<Producer> = (0..5)
        .map(|_| Box::new(producers::empty()) as Producer)
        .collect();
    skipping.push(Box::new(producers::fixed("NTH")));
    report("empties are skipped:", &build(skipping));

    let all_empty: Chain = chain![producers::empty(), producers::empty()];
    report("all empty:", &all_empty);

    report("no producers at all:", &Chain::new());

    println!("\n=== Failure Stops the Walk ===\n");

    let called = Cell::new(false);
    let failing: Chain = chain![
        producers::empty(),
        producers::failing("OPS...something wrong"),
        || {
            called.set(true);
            Ok("never seen".to_string())
        },
    ];
    report("failure in the middle:", &failing);
    println!("{:<28} {}", "trailing producer called:", called.get());

    println!("\n=== Key Points ===");
    println!("- Err(_) stops the chain, even if a later producer would succeed");
    println!("- Ok(non-empty) stops the chain");
    println!("- Ok(\"\") is the only result that moves on");
}
