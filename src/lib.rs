//! # Flocksim - Interactive Flocking Simulation
//!
//! A population of boids moving under Reynolds' flocking rules (separation,
//! alignment, cohesion). Boids age, die when isolated for too long, and adopt
//! the team color most common among their neighbors.
//!
//! ## Features
//!
//! - Reynolds steering with bounded forces and speed
//! - Crowding-dependent life span (isolated boids decay, clustered boids persist)
//! - Neighbor-based team color consensus
//! - Spawn, erase and select operations driven by edit modes
//! - Optional k-d tree neighbor index with results identical to the naive scan
//! - Seedable random stream for deterministic runs
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::vector`] - 2D vector math
//! - [`simulation::boid`] - Boid state and steering behaviors
//! - [`simulation::flock`] - Population and per-tick update
//! - [`simulation::controller`] - Spawn/erase/select/pause surface used by the input layer
//! - [`simulation::params`] - Simulation parameters

/// Core simulation logic and data structures.
pub mod simulation {
    /// Boid state, steering behaviors, aging and color consensus.
    pub mod boid;
    /// Canvas dimensions used for wraparound and random placement.
    pub mod bounds;
    /// Simulation controller holding pause, tick and edit mode state.
    pub mod controller;
    /// Pointer edit modes and their cursor overlays.
    pub mod edit_mode;
    /// Error type for configuration and indexing failures.
    pub mod error;
    /// Recent simulation events for display in the UI.
    pub mod event_log;
    /// The flock: owns all boids and drives the per-tick update.
    pub mod flock;
    /// Simulation parameters.
    pub mod params;
    /// Spatial indexing for neighbor candidate queries.
    pub mod spatial;
    /// Aggregate statistics for the stats display.
    pub mod stats;
    /// Fixed team color palette.
    pub mod team;
    /// 2D vector math.
    pub mod vector;
}
