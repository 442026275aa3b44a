//! Boid state, steering behaviors, aging and color consensus.
//!
//! Every behavior scans the neighbor slice it is given and applies its own
//! `0 < d < radius` test, so the slice may be the whole flock or any superset
//! of the boids within the largest interaction radius.

use rand::Rng;
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

use super::bounds::CanvasBounds;
use super::params::Params;
use super::team::{Team, TeamColor};
use super::vector::Vector2;

/// A single flocking agent.
///
/// Boids can:
/// - Steer by separation, alignment and cohesion with their neighbors
/// - Age, losing life span when isolated and regaining it when crowded
/// - Switch team when most of their neighbors belong to another one
/// - Be selected by the input layer for highlighting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boid {
    /// Position in world coordinates; wraps around the canvas edges.
    pub position: Vector2,
    /// Current velocity, at most `max_speed` long after each update.
    pub velocity: Vector2,
    /// Force accumulator, cleared after every integration.
    pub acceleration: Vector2,
    /// Visual and wraparound size.
    pub radius: f64,
    /// Speed cap.
    pub max_speed: f64,
    /// Steering force cap per behavior.
    pub max_force: f64,
    /// Team the boid currently shows.
    pub team: Team,
    /// Team the boid was spawned with.
    pub original_team: Team,
    /// Remaining ticks before death.
    pub life_span: i64,
    /// Ticks survived so far.
    pub time_alive: u64,
    /// Selection flag, only changed by the input layer.
    pub selected: bool,
}

/// Read-only view of a boid for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoidView {
    /// Position in world coordinates.
    pub position: Vector2,
    /// Drawing rotation in radians (velocity heading plus a quarter turn).
    pub heading: f64,
    /// Current team color.
    pub color: TeamColor,
    /// Drawing size.
    pub radius: f64,
    /// Whether the boid is highlighted.
    pub selected: bool,
}

impl Boid {
    /// Creates a boid at `position` with a random velocity, size and speed cap.
    ///
    /// # Arguments
    ///
    /// * `position` - Spawn position
    /// * `team` - Forced team, or `None` to pick one at random
    /// * `params` - Simulation parameters
    /// * `rng` - Random stream
    pub fn new(
        position: Vector2,
        team: Option<Team>,
        params: &Params,
        rng: &mut impl Rng,
    ) -> Self {
        let velocity = Vector2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        let radius = rng.random_range(params.min_radius..params.max_radius);
        let max_speed = f64::from(rng.random_range(params.min_speed..=params.max_speed));
        let team = team.unwrap_or_else(|| Team::random(rng));

        Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
            radius,
            max_speed,
            max_force: params.max_force,
            team,
            original_team: team,
            life_span: params.original_life_span,
            time_alive: 0,
            selected: false,
        }
    }

    /// Checks if the boid is alive.
    ///
    /// # Returns
    ///
    /// `true` if `life_span > 0`, `false` otherwise.
    pub fn is_alive(&self) -> bool {
        self.life_span > 0
    }

    /// Palette entry for the current team.
    pub fn color(&self) -> TeamColor {
        self.team.color()
    }

    /// Drawing rotation: the velocity heading turned a quarter so the nose points forward.
    pub fn heading(&self) -> f64 {
        self.velocity.heading() + FRAC_PI_2
    }

    /// Snapshot of the fields the renderer draws.
    pub fn view(&self) -> BoidView {
        BoidView {
            position: self.position,
            heading: self.heading(),
            color: self.color(),
            radius: self.radius,
            selected: self.selected,
        }
    }

    /// Advances the boid by one tick: flock, update, then wrap around the canvas.
    ///
    /// `neighbors` may contain the boid itself; it sits at distance 0 and is
    /// skipped by every behavior.
    pub fn step(
        &mut self,
        neighbors: &[&Boid],
        bounds: &CanvasBounds,
        params: &Params,
        rng: &mut impl Rng,
    ) {
        self.flock(neighbors, params);
        self.update(neighbors, params, rng);
        self.borders(bounds);
    }

    /// Adds a force to the acceleration accumulator.
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration += force;
    }

    /// Accumulates the weighted separation, alignment and cohesion forces.
    pub fn flock(&mut self, neighbors: &[&Boid], params: &Params) {
        let sep = self.separate(neighbors, params) * params.separation_weight;
        let ali = self.align(neighbors, params) * params.alignment_weight;
        let coh = self.cohesion(neighbors, params) * params.cohesion_weight;

        self.apply_force(sep);
        self.apply_force(ali);
        self.apply_force(coh);
    }

    /// Steering force away from boids closer than `separation_distance`.
    ///
    /// Each neighbor contributes a unit vector pointing away from it, weighted
    /// by the inverse of its distance.
    pub fn separate(&self, neighbors: &[&Boid], params: &Params) -> Vector2 {
        let mut steer = Vector2::ZERO;
        let mut count = 0usize;

        for (other, d) in self.neighbors_within(neighbors, params.separation_distance) {
            steer += (self.position - other.position).normalize() / d;
            count += 1;
        }

        if count > 0 {
            steer = steer / count as f64;
        }

        if steer.magnitude() > 0.0 {
            steer = (steer.normalize() * self.max_speed - self.velocity).limit(self.max_force);
        }

        steer
    }

    /// Steering force toward the average velocity of boids within `neighbor_distance`.
    pub fn align(&self, neighbors: &[&Boid], params: &Params) -> Vector2 {
        let mut sum = Vector2::ZERO;
        let mut count = 0usize;

        for (other, _) in self.neighbors_within(neighbors, params.neighbor_distance) {
            sum += other.velocity;
            count += 1;
        }

        if count == 0 {
            return Vector2::ZERO;
        }

        let desired = (sum / count as f64).normalize() * self.max_speed;
        (desired - self.velocity).limit(self.max_force)
    }

    /// Steering force toward the center of boids within `neighbor_distance`.
    pub fn cohesion(&self, neighbors: &[&Boid], params: &Params) -> Vector2 {
        let mut sum = Vector2::ZERO;
        let mut count = 0usize;

        for (other, _) in self.neighbors_within(neighbors, params.neighbor_distance) {
            sum += other.position;
            count += 1;
        }

        if count == 0 {
            return Vector2::ZERO;
        }

        self.seek(sum / count as f64)
    }

    /// Steering force toward `target`: desired velocity minus current velocity.
    pub fn seek(&self, target: Vector2) -> Vector2 {
        let desired = (target - self.position).normalize() * self.max_speed;
        (desired - self.velocity).limit(self.max_force)
    }

    /// Ages the boid, runs color consensus and integrates the accumulated force.
    pub fn update(&mut self, neighbors: &[&Boid], params: &Params, rng: &mut impl Rng) {
        self.age(neighbors, params, rng);
        self.align_color(neighbors, params);

        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vector2::ZERO;
    }

    /// Increments `time_alive` and adjusts `life_span` by local crowding.
    ///
    /// Without any boid inside `crowd_distance` the life span drops by a random
    /// amount in `[0, isolated_decay)`; otherwise it grows by one in `[0, crowded_gain)`.
    pub fn age(&mut self, neighbors: &[&Boid], params: &Params, rng: &mut impl Rng) {
        self.time_alive += 1;

        let crowd = self
            .neighbors_within(neighbors, params.crowd_distance)
            .count();

        if crowd == 0 {
            self.life_span -= random_below(rng, params.isolated_decay);
        } else {
            self.life_span += random_below(rng, params.crowded_gain);
        }
    }

    /// Adopts the most common team among boids within `neighbor_distance`.
    ///
    /// Ties go to the team encountered first. Boids no older than
    /// `color_lock_age` keep their team.
    pub fn align_color(&mut self, neighbors: &[&Boid], params: &Params) {
        let mut tally: Vec<(Team, usize)> = Vec::with_capacity(Team::ALL.len());

        for (other, _) in self.neighbors_within(neighbors, params.neighbor_distance) {
            match tally.iter_mut().find(|(team, _)| *team == other.team) {
                Some((_, count)) => *count += 1,
                None => tally.push((other.team, 1)),
            }
        }

        let mut plurality: Option<(Team, usize)> = None;
        for &(team, count) in &tally {
            if plurality.is_none_or(|(_, best)| count > best) {
                plurality = Some((team, count));
            }
        }

        if let Some((team, _)) = plurality {
            if team != self.team && self.time_alive > params.color_lock_age {
                self.team = team;
            }
        }
    }

    /// Wraps the boid to the opposite edge once it is fully off the canvas.
    pub fn borders(&mut self, bounds: &CanvasBounds) {
        let r = self.radius;
        if self.position.x < -r {
            self.position.x = bounds.width + r;
        }
        if self.position.y < -r {
            self.position.y = bounds.height + r;
        }
        if self.position.x > bounds.width + r {
            self.position.x = -r;
        }
        if self.position.y > bounds.height + r {
            self.position.y = -r;
        }
    }

    /// Marks the boid as selected.
    pub fn select(&mut self) {
        self.selected = true;
    }

    /// Clears the selection flag.
    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Neighbors strictly inside `radius`, excluding anything at distance 0.
    fn neighbors_within<'a>(
        &'a self,
        neighbors: &'a [&'a Boid],
        radius: f64,
    ) -> impl Iterator<Item = (&'a Boid, f64)> + 'a {
        neighbors.iter().filter_map(move |&other| {
            let d = Vector2::distance(self.position, other.position);
            (d > 0.0 && d < radius).then_some((other, d))
        })
    }
}

/// Uniform integer in `[0, bound)`, or 0 when the range is empty.
fn random_below(rng: &mut impl Rng, bound: i64) -> i64 {
    if bound > 0 {
        rng.random_range(0..bound)
    } else {
        0
    }
}
