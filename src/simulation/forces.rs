//! Force evaluators for the n-body engine.
//!
//! [`BarnesHut`] is the tree-based evaluator: per body it traverses the
//! quadtree and either takes a whole node as one aggregate mass (when the
//! multipole acceptance criterion allows) or descends into its children.
//! [`DirectSum`] is the exact O(n²) pairwise baseline used by tests and
//! benchmarks.
//!
//! Both use the same softened Newtonian force law
//! `F = G * m1 * m2 * r / d^3` with `d^2 = |r|^2 + eps2`, so a Barnes-Hut
//! evaluation with theta = 0 matches the direct sum to rounding error.

use crate::simulation::quadtree::{QuadNode, QuadTree};
use crate::simulation::states::{Body, NVec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Barnes-Hut force evaluator.
///
/// `theta` is the MAC threshold: a node of side `s` at distance `d` from the
/// query body is taken as a single aggregate mass when `s / d < theta`.
/// `theta` of 0 degenerates to exact pairwise summation; larger values prune
/// more aggressively.
pub struct BarnesHut {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening, floors the squared separation
    pub theta: f64, // MAC threshold
}

impl BarnesHut {
    /// Fill `out[i]` with the net force on body `i` from the whole tree.
    ///
    /// The buffer is reset first; the tree is only read, so with the
    /// `parallel` feature the per-body traversals run as a rayon map.
    pub fn accumulate(&self, tree: &QuadTree, bodies: &[Body], out: &mut [NVec2]) {
        #[cfg(feature = "parallel")]
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, f)| *f = self.force_on_body(tree, bodies, i));

        #[cfg(not(feature = "parallel"))]
        for (i, f) in out.iter_mut().enumerate() {
            *f = self.force_on_body(tree, bodies, i);
        }
    }

    /// Net force on body `i` from the whole tree.
    pub fn force_on_body(&self, tree: &QuadTree, bodies: &[Body], i: usize) -> NVec2 {
        self.force_on_body_counted(tree, bodies, i).0
    }

    /// Same traversal, also reporting how many nodes were visited. Used to
    /// observe the accuracy/cost trade-off theta controls.
    pub fn force_on_body_counted(
        &self,
        tree: &QuadTree,
        bodies: &[Body],
        i: usize,
    ) -> (NVec2, usize) {
        let mut force = NVec2::zeros();
        let mut visited = 0;
        self.visit(tree, bodies, 0, i, &mut force, &mut visited);
        (force, visited)
    }

    fn visit(
        &self,
        tree: &QuadTree,
        bodies: &[Body],
        node_idx: usize,
        i: usize,
        force: &mut NVec2,
        visited: &mut usize,
    ) {
        let node = &tree.nodes[node_idx];
        *visited += 1;

        // Empty subtree contributes nothing
        if node.mass == 0.0 {
            return;
        }

        let kids = match node.children {
            None => {
                if node.is_single_leaf() {
                    let j = node.bodies[0];
                    if j != i {
                        *force += self.pairwise(&bodies[i], &bodies[j]);
                    }
                } else {
                    // Depth-capped merge leaf: several (near-)coincident
                    // bodies taken as one aggregate. If the query body is
                    // among them the separation is near zero and the
                    // softening floor keeps the contribution finite.
                    *force += self.aggregate(&bodies[i], node);
                }
                return;
            }
            Some(kids) => kids,
        };

        // MAC: far enough relative to its size -> one aggregate contribution
        let r = node.cog - bodies[i].x;
        let dist = r.norm();
        let ratio = if dist > 0.0 {
            node.size / dist
        } else {
            f64::INFINITY
        };

        if ratio < self.theta {
            *force += self.aggregate(&bodies[i], node);
        } else {
            for &child in &kids {
                self.visit(tree, bodies, child, i, force, visited);
            }
        }
    }

    /// Softened pairwise force on `bi` from `bj`, directed toward `bj`.
    fn pairwise(&self, bi: &Body, bj: &Body) -> NVec2 {
        let r = bj.x - bi.x;
        let d2 = r.norm_squared() + self.eps2;
        let inv_r = d2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;
        self.g * bi.m * bj.m * inv_r3 * r
    }

    /// Softened force on `bi` from a node taken as one mass at its cog.
    fn aggregate(&self, bi: &Body, node: &QuadNode) -> NVec2 {
        let r = node.cog - bi.x;
        let d2 = r.norm_squared() + self.eps2;
        let inv_r = d2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;
        self.g * bi.m * node.mass * inv_r3 * r
    }
}

/// Exact O(n²) pairwise gravity with the same softened force law.
pub struct DirectSum {
    pub g: f64,
    pub eps2: f64,
}

impl DirectSum {
    /// Fill `out[i]` with the net force on body `i`, iterating each
    /// unordered pair once and applying equal and opposite forces.
    pub fn accumulate(&self, bodies: &[Body], out: &mut [NVec2]) {
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }

        let n = bodies.len();
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];

                let r = bj.x - bi.x;
                let d2 = r.norm_squared() + self.eps2;
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                let f = self.g * bi.m * bj.m * inv_r3 * r;
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
