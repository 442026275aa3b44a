//! The flock: owner of every boid and driver of the per-tick update.
//!
//! Each tick works on a snapshot taken after dead boids are pruned, so every
//! boid steers against the same pre-motion state regardless of update order.

use rand::Rng;
use serde::Serialize;

use super::boid::Boid;
use super::bounds::CanvasBounds;
use super::params::{DeathPolicy, Params};
use super::spatial::NeighborIndex;
use super::team::Team;
use super::vector::Vector2;

/// Outcome of a single [`Flock::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Boids pruned at the start of the tick.
    pub died: usize,
    /// Boids added by the replacement policy.
    pub replaced: usize,
}

/// An ordered collection of boids.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Flock {
    /// All boids, in insertion order.
    pub boids: Vec<Boid>,
}

impl Flock {
    /// Creates an empty flock.
    pub fn new() -> Self {
        Self { boids: Vec::new() }
    }

    /// Appends a boid.
    pub fn add(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    /// Number of boids, including any that died during the last tick.
    pub fn len(&self) -> usize {
        self.boids.len()
    }

    /// Returns `true` if the flock has no boids.
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Removes every boid whose life span ran out.
    ///
    /// # Returns
    ///
    /// The number of boids removed.
    pub fn prune(&mut self) -> usize {
        let before = self.boids.len();
        self.boids.retain(Boid::is_alive);
        before - self.boids.len()
    }

    /// Advances the flock by one tick.
    ///
    /// Dead boids are pruned first; each survivor then steps against a
    /// snapshot of all survivors, itself included. With
    /// [`DeathPolicy::Replace`] the pruned boids are replaced at random
    /// positions after the survivors have moved.
    pub fn step(&mut self, bounds: &CanvasBounds, params: &Params, rng: &mut impl Rng) -> StepReport {
        let died = self.prune();

        let snapshot = self.boids.clone();
        let index =
            NeighborIndex::for_snapshot(&snapshot, params.interaction_radius(), params.use_spatial_index);

        for boid in &mut self.boids {
            let neighbors: Vec<&Boid> = index
                .candidates(boid)
                .into_iter()
                .map(|i| &snapshot[i])
                .collect();
            boid.step(&neighbors, bounds, params, rng);
        }

        let replaced = match params.on_death {
            DeathPolicy::Replace => self.spawn_random(died, None, bounds, params, rng),
            DeathPolicy::None => 0,
        };

        if died > 0 {
            tracing::trace!(died, replaced, remaining = self.boids.len(), "pruned dead boids");
        }

        StepReport { died, replaced }
    }

    /// Adds `amount` boids, each at its own random canvas position.
    ///
    /// # Returns
    ///
    /// The number of boids added.
    pub fn spawn_random(
        &mut self,
        amount: usize,
        team: Option<Team>,
        bounds: &CanvasBounds,
        params: &Params,
        rng: &mut impl Rng,
    ) -> usize {
        for _ in 0..amount {
            let pos = bounds.random_position(rng);
            self.add(Boid::new(pos, team, params, rng));
        }
        amount
    }

    /// Removes every boid within `radius` of `center` (inclusive).
    ///
    /// # Returns
    ///
    /// The number of boids removed.
    pub fn remove_within(&mut self, center: Vector2, radius: f64) -> usize {
        let before = self.boids.len();
        self.boids
            .retain(|boid| Vector2::distance(boid.position, center) > radius);
        before - self.boids.len()
    }

    /// Removes up to `count` boids with the largest `time_alive`.
    ///
    /// Among boids of equal age the earlier-inserted one goes first. The
    /// relative order of the remaining boids is preserved.
    ///
    /// # Returns
    ///
    /// The number of boids removed.
    pub fn evict_oldest(&mut self, count: usize) -> usize {
        let mut order: Vec<usize> = (0..self.boids.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(self.boids[i].time_alive));

        let mut evict = vec![false; self.boids.len()];
        for &i in order.iter().take(count) {
            evict[i] = true;
        }

        let mut flags = evict.iter();
        self.boids.retain(|_| !flags.next().copied().unwrap_or(false));
        count.min(order.len())
    }

    /// Boid with the largest `time_alive`; the earliest inserted wins ties.
    pub fn oldest(&self) -> Option<&Boid> {
        self.boids
            .iter()
            .reduce(|best, boid| if boid.time_alive > best.time_alive { boid } else { best })
    }

    /// Boid with the smallest `time_alive`; the earliest inserted wins ties.
    pub fn youngest(&self) -> Option<&Boid> {
        self.boids
            .iter()
            .reduce(|best, boid| if boid.time_alive < best.time_alive { boid } else { best })
    }

    /// Number of boids currently on each team, largest first.
    ///
    /// Teams without boids are omitted; equal counts keep palette order.
    pub fn team_counts(&self) -> Vec<(Team, usize)> {
        let mut counts = [0usize; Team::ALL.len()];
        for boid in &self.boids {
            counts[boid.team.index()] += 1;
        }

        let mut result: Vec<(Team, usize)> = Team::ALL
            .into_iter()
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            .collect();
        result.sort_by(|a, b| b.1.cmp(&a.1));
        result
    }

    /// Number of selected boids.
    pub fn selected_count(&self) -> usize {
        self.boids.iter().filter(|b| b.selected).count()
    }
}
