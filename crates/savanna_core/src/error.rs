//! Error types for the simulation core.

use thiserror::Error;

/// Main error type for savanna_core operations.
///
/// No interaction rule ever returns an error: per-entity anomalies are
/// handled by skipping the interaction. These variants surface only from
/// world construction and spawn placement.
#[derive(Error, Debug)]
pub enum SimError {
    /// Rejection sampling ran out of retries looking for a spawn position.
    #[error("no valid spawn position found after {attempts} attempts")]
    Placement { attempts: u32 },

    /// Construction parameters violated an engine precondition.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for savanna_core operations.
pub type Result<T> = std::result::Result<T, SimError>;
