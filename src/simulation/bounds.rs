use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::Vector2;

/// Canvas dimensions supplied by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Canvas width in world units.
    pub width: f64,
    /// Canvas height in world units.
    pub height: f64,
}

impl CanvasBounds {
    /// Creates bounds of the given size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Picks a random whole-unit position inside the canvas.
    pub fn random_position(&self, rng: &mut impl Rng) -> Vector2 {
        Vector2::new(
            (rng.random::<f64>() * self.width).floor(),
            (rng.random::<f64>() * self.height).floor(),
        )
    }

    /// Returns `true` if `pos` lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, pos: Vector2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
