//! Error types for timetabling

use thiserror::Error;

/// Main error type for timetabling operations
#[derive(Debug, Error)]
pub enum TimetableError {
    /// Malformed problem definition, detected at load time
    #[error("Configuration error: {0}")]
    Config(String),

    /// A schedule mutation was rejected by its occupancy preconditions
    #[error("Invalid mutation: {0}")]
    InvalidMutation(String),

    /// No feasible move exists in the named neighborhood
    #[error("Empty neighborhood: {neighborhood}")]
    EmptyNeighborhood { neighborhood: &'static str },

    /// Redundant schedule indexes disagree with each other
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for timetabling operations
pub type Result<T> = std::result::Result<T, TimetableError>;
