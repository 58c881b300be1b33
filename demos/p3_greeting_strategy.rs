//! Pattern 3: Strategy with First-Class Functions
//! Example: Swapping greeting behavior by passing a function
//!
//! Run with: cargo run --example p3_greeting_strategy

use resolver_chain::strategy::{greeting_service, hello, Greeting, Request};

fn main() {
    println!("=== Strategy as a Function Value ===\n");

    let request = Request::new("Mickey");

    // Usage: any closure or fn item with the right signature is a strategy.
    println!("{}", greeting_service(&request, |name| format!("Hola {name}!")));
    println!("{}", greeting_service(&request, hello));

    println!("\n=== Picking a Strategy at Runtime ===");
    let strategies: Vec<(&str, Box<Greeting>)> = vec![
        ("es", Box::new(|name: &str| format!("Hola {name}!"))),
        ("en", Box::new(hello)),
        ("it", Box::new(|name: &str| format!("Ciao {name}!"))),
    ];

    for (lang, greeting) in &strategies {
        println!("{lang}: {}", greeting_service(&request, greeting));
    }

    println!("\n=== Key Points ===");
    println!("- No trait needed for a single-method strategy");
    println!("- impl Fn for static dispatch, Box<dyn Fn> when chosen at runtime");
}
