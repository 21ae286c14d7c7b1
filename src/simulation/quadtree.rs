//! # Barnes-Hut quadtree (2D)
//!
//! Arena-based quadtree over a fixed root square `[origin, origin+size)`.
//! The tree is rebuilt from scratch every tick; nodes hold indices into the
//! engine's canonical body collection and never own bodies.
//!
//! Build procedure per node:
//! 1. Aggregate (mass, center-of-mass) over the bodies assigned to the node,
//!    *before* any subdivision, so the pair summarizes the whole subtree.
//!    Zero aggregate mass leaves the center-of-mass at the geometric center.
//! 2. With ≤1 body the node is a leaf. At the recursion depth limit the node
//!    stays a leaf holding all remaining (coincident or near-coincident)
//!    bodies as one aggregate.
//! 3. Otherwise split into four equal quadrants (NW, NE, SE, SW, sharing the
//!    node center) and redistribute. Quadrant membership is half-open on both
//!    axes: `pos >= origin && pos < origin + size`, so the four quadrants
//!    tile the parent exactly and a midpoint body lands in exactly one child.
//!
//! A body that fits no quadrant is a hard [`EngineError::DomainOverflow`],
//! never silently dropped.

use crate::simulation::error::{EngineError, Result};
use crate::simulation::states::{Body, NVec2};

/// A single quadtree node: an axis-aligned square region of the domain.
///
/// `children` is `None` for a leaf or `Some` of exactly four arena indices,
/// in NW, NE, SE, SW order.
#[derive(Debug, Clone)]
pub struct QuadNode {
    pub origin: NVec2, // lower-left corner of the square
    pub size: f64, // side length
    pub bodies: Vec<usize>, // indices into the engine's body collection
    pub mass: f64, // aggregate mass of the subtree
    pub cog: NVec2, // center-of-mass of the subtree
    pub children: Option<[usize; 4]>, // indices into QuadTree::nodes
}

impl QuadNode {
    fn new(origin: NVec2, size: f64) -> Self {
        Self {
            origin,
            size,
            bodies: Vec::new(),
            mass: 0.0,
            // geometric center until calc_cog sees actual mass
            cog: origin + NVec2::new(size * 0.5, size * 0.5),
            children: None,
        }
    }

    /// Half-open containment test: `pos >= origin && pos < origin + size`
    /// on both axes.
    pub fn contains(&self, pos: &NVec2) -> bool {
        let match_x = pos.x >= self.origin.x && pos.x < self.origin.x + self.size;
        let match_y = pos.y >= self.origin.y && pos.y < self.origin.y + self.size;
        match_x && match_y
    }

    /// Leaf holding exactly one body.
    pub fn is_single_leaf(&self) -> bool {
        self.children.is_none() && self.bodies.len() == 1
    }
}

/// A complete quadtree built over a snapshot of the body collection.
///
/// Owns a flat arena of nodes; the root is always index 0.
#[derive(Debug, Clone)]
pub struct QuadTree {
    pub nodes: Vec<QuadNode>,
}

impl QuadTree {
    /// Build the full tree for `bodies` against the root square
    /// `[origin, origin+size)`.
    ///
    /// Every body is containment-checked against the root square first; a
    /// miss fails the whole build with `DomainOverflow` and the caller's
    /// state is untouched.
    pub fn build(origin: NVec2, size: f64, bodies: &[Body], max_depth: u32) -> Result<Self> {
        let mut root = QuadNode::new(origin, size);
        root.bodies = (0..bodies.len()).collect();

        for (i, b) in bodies.iter().enumerate() {
            if !root.contains(&b.x) {
                return Err(EngineError::DomainOverflow {
                    index: i,
                    x: b.x.x,
                    y: b.x.y,
                });
            }
        }

        let mut tree = QuadTree { nodes: vec![root] };
        tree.build_node(0, bodies, 0, max_depth)?;
        Ok(tree)
    }

    pub fn root(&self) -> &QuadNode {
        &self.nodes[0]
    }

    /// Depth-first enumeration of all nodes, NW-child first. Restartable;
    /// each call yields a fresh iterator over the current tree.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            nodes: &self.nodes,
            stack: vec![0],
        }
    }

    /// Recursive build step: aggregate, then subdivide and redistribute.
    fn build_node(
        &mut self,
        idx: usize,
        bodies: &[Body],
        depth: u32,
        max_depth: u32,
    ) -> Result<()> {
        self.calc_cog(idx, bodies);

        let count = self.nodes[idx].bodies.len();
        if count <= 1 {
            return Ok(());
        }
        if depth >= max_depth {
            // Coincident or near-coincident bodies would subdivide forever.
            // Terminate here and keep them as one aggregate leaf.
            log::debug!(
                "subdivision depth limit {} reached with {} bodies, merging into aggregate leaf",
                max_depth,
                count
            );
            return Ok(());
        }

        let origin = self.nodes[idx].origin;
        let half = self.nodes[idx].size * 0.5;

        // NW, NE, SE, SW, all sharing the node center as a common corner
        let child_origins = [
            NVec2::new(origin.x, origin.y + half),
            NVec2::new(origin.x + half, origin.y + half),
            NVec2::new(origin.x + half, origin.y),
            NVec2::new(origin.x, origin.y),
        ];

        let first = self.nodes.len();
        for child_origin in child_origins {
            self.nodes.push(QuadNode::new(child_origin, half));
        }
        let kids = [first, first + 1, first + 2, first + 3];
        self.nodes[idx].children = Some(kids);

        // Redistribute; the node keeps its own list so its aggregate keeps
        // describing the whole subtree.
        let assigned = std::mem::take(&mut self.nodes[idx].bodies);
        for &bi in &assigned {
            let pos = bodies[bi].x;
            let mut placed = false;
            for &child in &kids {
                if self.nodes[child].contains(&pos) {
                    self.nodes[child].bodies.push(bi);
                    placed = true;
                    break;
                }
            }
            if !placed {
                // Half-open quadrants tile the parent, so a contained body
                // always matches one of them. Still a hard error, never a
                // silent drop.
                return Err(EngineError::DomainOverflow {
                    index: bi,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }
        self.nodes[idx].bodies = assigned;

        for &child in &kids {
            self.build_node(child, bodies, depth + 1, max_depth)?;
        }
        Ok(())
    }

    /// Mass-weighted center-of-mass over the bodies assigned to the node.
    /// Zero mass keeps the geometric center, avoiding division by zero.
    fn calc_cog(&mut self, idx: usize, bodies: &[Body]) {
        let node = &mut self.nodes[idx];
        let mut mass = 0.0;
        let mut weighted = NVec2::zeros();
        for &bi in &node.bodies {
            let b = &bodies[bi];
            mass += b.m;
            weighted += b.x * b.m;
        }
        node.mass = mass;
        if mass > 0.0 {
            node.cog = weighted / mass;
        }
    }
}

/// Depth-first node iterator, see [`QuadTree::iter`].
pub struct Nodes<'a> {
    nodes: &'a [QuadNode],
    stack: Vec<usize>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a QuadNode;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = &self.nodes[idx];
        if let Some(kids) = node.children {
            // push reversed so the NW child is visited first
            for &child in kids.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(node)
    }
}
