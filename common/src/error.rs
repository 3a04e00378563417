//! Error types

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid match threshold: {0} (expected a value between 0.0 and 1.0)")]
    InvalidThreshold(f64),

    #[error("Unknown containment policy: {0}. Use first, best, or off")]
    UnknownPolicy(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
