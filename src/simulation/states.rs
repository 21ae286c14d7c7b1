//! Core state types for the N-body simulation.
//!
//! Defines the 2D point-mass `Body` using `NVec2` and the opaque
//! `BodyHandle` returned by the engine when a body is added.

use nalgebra::Vector2;

use crate::simulation::error::EngineError;

pub type NVec2 = Vector2<f64>;

/// A point mass with position, velocity and mass.
///
/// Bodies are created through [`Engine::add_body`](crate::Engine::add_body)
/// and mutated only by the integrator at the end of a tick. The per-tick net
/// force lives in an engine-owned buffer, not on the body.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, always > 0
    pub fixed: bool, // immovable anchor, skipped by the integrator
}

impl Body {
    /// Construct a body, rejecting non-positive (or NaN) mass.
    pub fn new(x: NVec2, v: NVec2, m: f64, fixed: bool) -> Result<Self, EngineError> {
        if !(m > 0.0) {
            return Err(EngineError::InvalidBody { mass: m });
        }
        Ok(Self { x, v, m, fixed })
    }
}

/// Index of a body in the engine's canonical collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}
