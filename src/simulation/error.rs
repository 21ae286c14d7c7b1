//! Error types for the simulation engine.
//!
//! Only geometry/configuration problems surface as errors. The purely
//! numerical edge cases (coincident bodies hitting the subdivision depth
//! limit, near-zero separations in the force law) are absorbed locally by
//! the depth-cap merge policy and the softening floor.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A body was supplied with non-positive mass. Rejected at the call
    /// site, simulation state unaffected.
    #[error("body mass must be positive, got {mass}")]
    InvalidBody { mass: f64 },

    /// A body's position lies outside the root bounding square at rebuild
    /// time. Fatal for the current tick; the body collection is left
    /// unmodified so the caller can resize, clamp or terminate.
    #[error("body {index} at ({x}, {y}) lies outside the root square")]
    DomainOverflow { index: usize, x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
