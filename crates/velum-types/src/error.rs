//! Error types for the Velum engine.
//!
//! All crates return `VelumResult<T>` from fallible operations.
//! No error here is fatal to the process: the simulation drops a body
//! or skips a constraint family rather than halting.

use thiserror::Error;

/// Unified error type for the Velum engine.
#[derive(Debug, Error)]
pub enum VelumError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A body references a resource that does not exist or failed validation.
    #[error("Invalid body '{name}': {reason}")]
    InvalidBody { name: String, reason: String },

    /// Constraint topology and evaluator arrays disagree in size.
    #[error("Constraint mismatch: {0}")]
    ConstraintMismatch(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config or mesh deserialization failure.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience alias for `Result<T, VelumError>`.
pub type VelumResult<T> = Result<T, VelumError>;
