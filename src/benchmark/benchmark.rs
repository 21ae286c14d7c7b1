//! Hand-rolled timing runs comparing the direct O(n²) sum against the
//! Barnes-Hut evaluator, plus a whole-tick timing curve. Results go to the
//! log at info level.

use std::time::Instant;

use crate::simulation::forces::{BarnesHut, DirectSum};
use crate::simulation::params::Parameters;
use crate::simulation::quadtree::QuadTree;
use crate::simulation::states::{Body, NVec2};
use crate::simulation::engine::Engine;

/// Deterministic body cloud well inside the `[0, size)²` domain, no rand
/// needed.
fn body_cloud(n: usize, size: f64) -> Vec<Body> {
    let center = size * 0.5;
    let spread = size * 0.4;
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new(
                center + (i_f * 0.37).sin() * spread,
                center + (i_f * 0.13).cos() * spread,
            );
            Body {
                x,
                v: NVec2::zeros(),
                m: 1.0,
                fixed: false,
            }
        })
        .collect()
}

/// Time one full force evaluation for each method over growing body counts,
/// and report the average visited-node count for the tree method.
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let params = Parameters::default();

    for n in ns {
        let bodies = body_cloud(n, params.size);
        let mut out = vec![NVec2::zeros(); n];

        let direct = DirectSum {
            g: params.g,
            eps2: params.eps2,
        };
        let start = Instant::now();
        direct.accumulate(&bodies, &mut out);
        let t_direct = start.elapsed();

        let tree = QuadTree::build(NVec2::zeros(), params.size, &bodies, params.max_depth)
            .expect("bench bodies are inside the domain");
        let bh = BarnesHut {
            g: params.g,
            eps2: params.eps2,
            theta: params.theta,
        };
        let start = Instant::now();
        bh.accumulate(&tree, &bodies, &mut out);
        let t_tree = start.elapsed();

        let visited: usize = (0..n)
            .map(|i| bh.force_on_body_counted(&tree, &bodies, i).1)
            .sum();

        log::info!(
            "n = {:5}: direct {:>10.2?}, tree {:>10.2?} (theta {}, avg {} nodes/body)",
            n,
            t_direct,
            t_tree,
            params.theta,
            visited / n
        );
    }
}

/// Time full ticks (rebuild + evaluate + integrate) over growing body
/// counts.
pub fn bench_tick() {
    let ns = [500, 1000, 2000, 4000];
    let steps = 10;

    for n in ns {
        let params = Parameters {
            h0: 1e-3,
            ..Parameters::default()
        };
        let mut engine = Engine::new(params.clone());
        for b in body_cloud(n, params.size) {
            engine
                .add_body(b.x, b.v, b.m, b.fixed)
                .expect("bench bodies have positive mass");
        }

        let start = Instant::now();
        for _ in 0..steps {
            engine.tick().expect("bench bodies stay inside the domain");
        }
        let per_tick = start.elapsed() / steps;

        log::info!("n = {:5}: {:>10.2?} per tick", n, per_tick);
    }
}
