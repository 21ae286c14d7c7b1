//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds the engine-level configuration fixed at construction:
//! domain size, MAC threshold, step size, softening and the gravitational
//! constant.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub size: f64, // side length of the root square, origin at (0, 0)
    pub theta: f64, // MAC threshold
    pub h0: f64, // fixed step size
    pub t_end: f64, // total simulation time for the headless runner
    pub eps2: f64, // softening, prevents singular forces at small separations
    pub g: f64, // gravitational constant, 1 in natural units
    pub max_depth: u32, // subdivision depth limit for coincident bodies
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            size: 1000.0,
            theta: 0.5,
            h0: 1.0,
            t_end: 100.0,
            eps2: 1e-4,
            g: 1.0,
            max_depth: 32,
        }
    }
}
