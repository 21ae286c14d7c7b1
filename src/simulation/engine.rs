//! The simulation engine: owns the canonical body collection and the
//! per-tick quadtree, and drives the build -> evaluate -> integrate cycle.
//!
//! The tree is a derived, recomputable view over the bodies and is rebuilt
//! from scratch every tick, since the preceding integration moved everything.
//! A tick either completes fully or fails atomically before any body is
//! mutated.

use crate::simulation::error::Result;
use crate::simulation::forces::BarnesHut;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::quadtree::{Nodes, QuadTree};
use crate::simulation::states::{Body, BodyHandle, NVec2};

pub struct Engine {
    params: Parameters,
    bodies: Vec<Body>,
    tree: QuadTree,
    t: f64,
    force_buf: Vec<NVec2>, // tick-scoped net forces, reset each evaluation
}

impl Engine {
    /// Construct an engine over the root square `[0, size)²` described by
    /// `params`. The initial tree is the empty root node.
    pub fn new(params: Parameters) -> Self {
        let tree = QuadTree::build(NVec2::zeros(), params.size, &[], params.max_depth)
            .expect("empty tree build cannot overflow the domain");
        Self {
            params,
            bodies: Vec::new(),
            tree,
            t: 0.0,
            force_buf: Vec::new(),
        }
    }

    /// Add a body. Valid at any time, including mid-simulation; the body
    /// participates from the next rebuild. Fails with `InvalidBody` when
    /// the mass is not positive. The position is only checked against the
    /// domain at the next tick.
    pub fn add_body(&mut self, x: NVec2, v: NVec2, m: f64, fixed: bool) -> Result<BodyHandle> {
        let body = Body::new(x, v, m, fixed)?;
        self.bodies.push(body);
        Ok(BodyHandle(self.bodies.len() - 1))
    }

    /// Advance the simulation by one fixed step.
    ///
    /// Three strictly separated phases:
    /// 1. rebuild the tree from the current body set (fails with
    ///    `DomainOverflow` if any body left the root square, in which case
    ///    no body state is touched),
    /// 2. evaluate the net force for every body against the frozen tree,
    /// 3. integrate every body.
    ///
    /// Forces are never interleaved with integration, so every evaluation
    /// observes the same pre-step positions.
    pub fn tick(&mut self) -> Result<()> {
        let tree = QuadTree::build(
            NVec2::zeros(),
            self.params.size,
            &self.bodies,
            self.params.max_depth,
        )?;

        let evaluator = BarnesHut {
            g: self.params.g,
            eps2: self.params.eps2,
            theta: self.params.theta,
        };
        self.force_buf.resize(self.bodies.len(), NVec2::zeros());
        evaluator.accumulate(&tree, &self.bodies, &mut self.force_buf);

        semi_implicit_euler(&mut self.bodies, &self.force_buf, self.params.h0);

        self.t += self.params.h0;
        self.tree = tree;
        Ok(())
    }

    /// Read-only snapshot of the body collection, as of the last completed
    /// tick (or construction).
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Depth-first enumeration of the current tree's nodes. Valid until the
    /// next tick rebuilds the tree; restartable per call. Consumed by a
    /// renderer drawing quadrant boundaries.
    pub fn traverse_nodes(&self) -> Nodes<'_> {
        self.tree.iter()
    }

    /// Current simulation time.
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Total momentum (sum of m * v), a cheap conservation diagnostic.
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.v * b.m)
    }
}
