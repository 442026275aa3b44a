//! Spatial indexing for neighbor candidate queries.
//!
//! The index only narrows the candidate set; behaviors still apply their exact
//! distance tests, so results match a scan over the whole flock.

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;

use super::boid::Boid;
use super::error::{Result, SimError};

/// Type alias for 2D spatial KD-tree used for efficient neighbor queries.
pub type Tree2D = KdTree<f64, usize, [f64; 2]>;

/// Extra reach added to query radii so float rounding never drops a boundary neighbor.
const QUERY_SLACK: f64 = 1.0;

/// Neighbor lookup over a snapshot of boid positions.
pub enum NeighborIndex {
    /// Every boid is a candidate for every other boid.
    Scan {
        /// Number of boids in the snapshot.
        len: usize,
    },
    /// Candidates come from a k-d tree radius query.
    Tree {
        /// Tree over snapshot positions, keyed by snapshot index.
        tree: Tree2D,
        /// Squared query radius including slack.
        radius_sq: f64,
    },
}

impl NeighborIndex {
    /// Builds a k-d tree over `boids` answering queries up to `radius`.
    ///
    /// # Returns
    ///
    /// The index, or an error if a position is not finite.
    pub fn build(boids: &[Boid], radius: f64) -> Result<Self> {
        let mut tree: Tree2D = KdTree::new(2);
        for (i, boid) in boids.iter().enumerate() {
            tree.add([boid.position.x, boid.position.y], i)
                .map_err(|e| SimError::Index(format!("{e:?}")))?;
        }

        let reach = radius + QUERY_SLACK;
        Ok(Self::Tree {
            tree,
            radius_sq: reach * reach,
        })
    }

    /// An index that returns every boid as a candidate.
    pub fn scan(boids: &[Boid]) -> Self {
        Self::Scan { len: boids.len() }
    }

    /// Builds the k-d tree when enabled, falling back to a full scan on failure.
    pub fn for_snapshot(boids: &[Boid], radius: f64, use_tree: bool) -> Self {
        if !use_tree {
            return Self::scan(boids);
        }
        match Self::build(boids, radius) {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("{e}; falling back to full neighbor scan");
                Self::scan(boids)
            }
        }
    }

    /// Snapshot indices of candidate neighbors of `boid`, in snapshot order.
    ///
    /// The result includes `boid` itself when it is part of the snapshot.
    pub fn candidates(&self, boid: &Boid) -> Vec<usize> {
        match self {
            Self::Scan { len } => (0..*len).collect(),
            Self::Tree { tree, radius_sq } => {
                let mut found: Vec<usize> = tree
                    .within(
                        &[boid.position.x, boid.position.y],
                        *radius_sq,
                        &squared_euclidean,
                    )
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(_, &idx)| idx)
                    .collect();
                found.sort_unstable();
                found
            }
        }
    }
}
