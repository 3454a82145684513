//! Error types for the toolkit.

use thiserror::Error;

/// Toolkit-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A throwable entity is missing one of its required components
    #[error("Throwable entity is missing component: {0}")]
    MissingComponent(&'static str),

    /// Rigid body mass must be strictly positive
    #[error("Invalid rigid body mass: {0}")]
    InvalidMass(f32),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
