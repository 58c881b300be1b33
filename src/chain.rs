//! Chain of Responsibility: first non-empty value wins, first failure stops.
//!
//! A [`Chain`] wraps an ordered list of producers. Resolving walks them in
//! order and stops as soon as one of them either fails or returns a non-empty
//! string. Only an empty success moves the walk forward. When every producer
//! comes up empty, the terminal node answers with an empty string.
//!
//! ```
//! use resolver_chain::{chain, ProducerFailure};
//!
//! let endpoint = chain![
//!     || Ok::<_, ProducerFailure>(String::new()),
//!     || Ok("some-endpoint".to_string()),
//! ]
//! .resolve();
//!
//! assert_eq!(endpoint.unwrap(), "some-endpoint");
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::ProducerFailure;

/// A zero-argument operation yielding a value or a failure.
pub type Producer<'a, E = ProducerFailure> = Box<dyn Fn() -> Result<String, E> + 'a>;

// `next` always points further towards the terminal node, so a walk over N
// links performs at most N producer calls.
enum Node<'a, E> {
    Terminal,
    Link { producer: Producer<'a, E>, next: usize },
}

/// An immutable, ordered chain of producers ending in a terminal node.
pub struct Chain<'a, E = ProducerFailure> {
    nodes: Vec<Node<'a, E>>,
}

/// The three ways a resolution can end.
#[derive(Debug, PartialEq)]
pub enum Outcome<E = ProducerFailure> {
    /// A producer returned a non-empty value.
    Resolved(String),
    /// Every producer returned an empty value.
    Exhausted,
    /// A producer failed; later producers were not called.
    Failed(E),
}

/// Builds a chain from producers, preserving their order.
///
/// Producers are only stored here. None of them runs until
/// [`Chain::resolve`] is called.
pub fn build<'a, E, I>(producers: I) -> Chain<'a, E>
where
    I: IntoIterator<Item = Producer<'a, E>>,
{
    producers.into_iter().collect()
}

impl<'a, E> Chain<'a, E> {
    /// A chain with no producers. Resolves to an empty string.
    pub fn new() -> Self {
        Chain {
            nodes: vec![Node::Terminal],
        }
    }

    /// Appends a producer just before the terminal node.
    pub fn link<F>(self, producer: F) -> Self
    where
        F: Fn() -> Result<String, E> + 'a,
    {
        self.push(Box::new(producer))
    }

    fn push(mut self, producer: Producer<'a, E>) -> Self {
        let position = self.nodes.len() - 1;
        self.nodes[position] = Node::Link {
            producer,
            next: position + 1,
        };
        self.nodes.push(Node::Terminal);
        self
    }

    /// Number of producers in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True when the chain holds only the terminal node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks the chain and returns the first non-empty value.
    ///
    /// A failing producer ends the walk and its error is returned as is.
    /// An exhausted chain yields `Ok(String::new())`.
    pub fn resolve(&self) -> Result<String, E> {
        let mut cursor = 0;

        loop {
            match self.nodes.get(cursor) {
                None | Some(Node::Terminal) => {
                    debug!(producers = self.len(), "chain exhausted without a value");
                    return Ok(String::new());
                }
                Some(Node::Link { producer, next }) => match producer() {
                    Err(failure) => {
                        debug!(position = cursor, "producer failed, stopping chain");
                        return Err(failure);
                    }
                    Ok(value) if !value.is_empty() => {
                        debug!(position = cursor, "producer resolved a value");
                        return Ok(value);
                    }
                    Ok(_) => {
                        trace!(position = cursor, "producer returned empty, advancing");
                        cursor = *next;
                    }
                },
            }
        }
    }

    /// Same walk as [`Chain::resolve`], reported as an [`Outcome`].
    pub fn resolve_outcome(&self) -> Outcome<E> {
        match self.resolve() {
            Ok(value) if value.is_empty() => Outcome::Exhausted,
            Ok(value) => Outcome::Resolved(value),
            Err(failure) => Outcome::Failed(failure),
        }
    }
}

impl<'a, E> Default for Chain<'a, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> FromIterator<Producer<'a, E>> for Chain<'a, E> {
    fn from_iter<I: IntoIterator<Item = Producer<'a, E>>>(iter: I) -> Self {
        iter.into_iter().fold(Chain::new(), Chain::push)
    }
}

impl<'a, E> fmt::Debug for Chain<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("producers", &self.len()).finish()
    }
}

/// Builds a [`Chain`] from a list of closures, in order.
///
/// `chain![]` gives an empty chain.
#[macro_export]
macro_rules! chain {
    () => {
        $crate::Chain::new()
    };
    ($($producer:expr),+ $(,)?) => {
        $crate::Chain::new()$(.link($producer))+
    };
}
