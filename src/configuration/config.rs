//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (domain size, MAC threshold)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   size: 1000.0            # root square side length, origin (0, 0)
//!   theta: 0.5              # MAC threshold, omit for default
//!   max_depth: 32           # subdivision depth limit, omit for default
//!
//! parameters:
//!   t_end: 100.0            # total simulation time
//!   h0: 1.0                 # fixed step size
//!   eps2: 1.0e-4            # softening epsilon^2
//!   g: 1.0                  # gravitational constant
//!
//! bodies:
//!   - x: [ 500.0, 300.0 ]
//!     v: [ 10.0, 0.0 ]
//!     m: 1.0
//!   - x: [ 500.0, 500.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1000000.0
//!     fixed: true
//! ```

use serde::Deserialize;

/// Engine-level options fixed at construction.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub size: f64, // root square side length
    pub theta: Option<f64>, // MAC threshold, defaults to 0.5
    pub max_depth: Option<u32>, // depth limit, defaults to 32
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulation time
    pub h0: f64, // fixed step size
    pub eps2: f64, // softening
    pub g: f64, // gravitational constant
}

/// Initial state for a single body.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
    pub m: f64, // mass
    #[serde(default)]
    pub fixed: bool, // immovable anchor
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}
