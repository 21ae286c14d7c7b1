pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyHandle, NVec2};
pub use simulation::quadtree::{QuadTree, QuadNode, Nodes};
pub use simulation::forces::{BarnesHut, DirectSum};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::error::EngineError;
pub use simulation::scenario::build_engine;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_tick};
