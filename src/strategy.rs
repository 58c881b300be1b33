//! Strategy pattern with plain functions.
//!
//! Closures and `fn` items are values, so a one-method strategy needs no
//! trait: the caller hands the behavior in directly.

/// A greeting strategy: takes a name, returns the greeting.
pub type Greeting = dyn Fn(&str) -> String;

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    user: String,
}

impl Request {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Greets the request's user with whichever strategy the caller picked.
pub fn greeting_service(request: &Request, greeting: impl Fn(&str) -> String) -> String {
    format!("Service says: {}", greeting(request.user()))
}

/// The default greeting.
pub fn hello(name: &str) -> String {
    format!("Hello {name}!")
}
