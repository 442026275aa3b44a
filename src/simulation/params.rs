use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{Result, SimError};

/// What the flock does when boids die of old age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeathPolicy {
    /// Dead boids are removed and not replaced.
    #[default]
    None,
    /// Each dead boid is replaced by a new one at a random canvas position.
    Replace,
}

/// Simulation parameters that control flock behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Boids closer than this push each other apart.
    pub separation_distance: f64,
    /// Radius for alignment, cohesion and color consensus.
    pub neighbor_distance: f64,
    /// Radius used to decide whether a boid is crowded or isolated when aging.
    pub crowd_distance: f64,
    /// Weight of the separation force.
    pub separation_weight: f64,
    /// Weight of the alignment force.
    pub alignment_weight: f64,
    /// Weight of the cohesion force.
    pub cohesion_weight: f64,
    /// Maximum steering force applied per behavior.
    pub max_force: f64,
    /// Smallest maximum speed a new boid can roll (inclusive).
    pub min_speed: u32,
    /// Largest maximum speed a new boid can roll (inclusive).
    pub max_speed: u32,
    /// Lower bound of the boid radius (inclusive).
    pub min_radius: f64,
    /// Upper bound of the boid radius (exclusive).
    pub max_radius: f64,
    /// Life span every boid starts with, in ticks.
    pub original_life_span: i64,
    /// Isolated boids lose a random amount in `[0, isolated_decay)` per tick.
    pub isolated_decay: i64,
    /// Crowded boids gain a random amount in `[0, crowded_gain)` per tick.
    pub crowded_gain: i64,
    /// Boids must be older than this many ticks before they can change team.
    pub color_lock_age: u64,
    /// Population cap enforced by pointer spawning.
    pub max_boids: usize,
    /// Number of oldest boids evicted when spawning at the cap.
    pub max_erase_at_once: usize,
    /// Number of boids added per pointer spawn.
    pub max_spawn_at_once: usize,
    /// Scatter diameter for pointer spawning.
    pub spawn_scatter: f64,
    /// Replacement policy for boids that die of old age.
    pub on_death: DeathPolicy,
    /// Seed for the random stream; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Use the k-d tree for neighbor candidates instead of scanning every boid.
    pub use_spatial_index: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            separation_distance: 25.0,
            neighbor_distance: 50.0,
            crowd_distance: 80.0,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            max_force: 0.05,
            min_speed: 1,
            max_speed: 4,
            min_radius: 3.0,
            max_radius: 4.0,
            original_life_span: 10_000,
            isolated_decay: 10,
            crowded_gain: 10 / 5,
            color_lock_age: 50,
            max_boids: 250,
            max_erase_at_once: 10,
            max_spawn_at_once: 10,
            spawn_scatter: 300.0,
            on_death: DeathPolicy::None,
            seed: None,
            use_spatial_index: true,
        }
    }
}

impl Params {
    /// Parses parameters from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Largest radius any behavior looks at.
    pub fn interaction_radius(&self) -> f64 {
        self.separation_distance
            .max(self.neighbor_distance)
            .max(self.crowd_distance)
    }

    /// Checks that the parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("separation_distance", self.separation_distance),
            ("neighbor_distance", self.neighbor_distance),
            ("crowd_distance", self.crowd_distance),
            ("max_force", self.max_force),
            ("spawn_scatter", self.spawn_scatter),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParams(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.min_speed > self.max_speed {
            return Err(SimError::InvalidParams(format!(
                "speed range {}..={} is empty",
                self.min_speed, self.max_speed
            )));
        }
        if !(self.min_radius.is_finite() && self.max_radius.is_finite())
            || self.min_radius <= 0.0
            || self.min_radius >= self.max_radius
        {
            return Err(SimError::InvalidParams(format!(
                "radius range {}..{} is empty or non-positive",
                self.min_radius, self.max_radius
            )));
        }
        if self.original_life_span <= 0 {
            return Err(SimError::InvalidParams(
                "original_life_span must be positive".to_string(),
            ));
        }
        if self.isolated_decay < 0 || self.crowded_gain < 0 {
            return Err(SimError::InvalidParams(
                "isolated_decay and crowded_gain must be non-negative".to_string(),
            ));
        }
        if self.max_boids == 0 {
            return Err(SimError::InvalidParams(
                "max_boids must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
