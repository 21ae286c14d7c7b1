//! Build a fully-initialized engine from a scenario configuration.
//!
//! Takes a [`ScenarioConfig`] (YAML-facing) and produces a runtime
//! [`Engine`] with all bodies added at t = 0.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::Result;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Map a scenario config to a runtime engine. Fails with `InvalidBody` if
/// any configured body has non-positive mass.
pub fn build_engine(cfg: ScenarioConfig) -> Result<Engine> {
    let defaults = Parameters::default();
    let params = Parameters {
        size: cfg.engine.size,
        theta: cfg.engine.theta.unwrap_or(defaults.theta),
        max_depth: cfg.engine.max_depth.unwrap_or(defaults.max_depth),
        h0: cfg.parameters.h0,
        t_end: cfg.parameters.t_end,
        eps2: cfg.parameters.eps2,
        g: cfg.parameters.g,
    };

    let mut engine = Engine::new(params);
    for bc in &cfg.bodies {
        engine.add_body(
            NVec2::new(bc.x[0], bc.x[1]),
            NVec2::new(bc.v[0], bc.v[1]),
            bc.m,
            bc.fixed,
        )?;
    }
    Ok(engine)
}
