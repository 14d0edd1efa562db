//! Error types for the puzzle slider crate.

use thiserror::Error;

/// Main error type for the puzzle slider crate.
///
/// The search engine reports every failure through this type; it never
/// retries and never recovers partially.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A board violated the state invariant (labels 1..=8 and one blank,
    /// each exactly once).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The start state already equals the goal state, so no search was run.
    #[error("start state already equals the goal state; randomize and initialize a new start state")]
    NoOpRequested,

    /// The frontier emptied before the goal was popped.
    #[error("search exhausted after generating {nodes_generated} nodes without reaching the goal")]
    Exhausted { nodes_generated: u64 },

    #[error("could not parse board '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an I/O error with a short description of what was attempted.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
