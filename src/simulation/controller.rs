//! Simulation controller: the surface the input layer drives.
//!
//! Holds the flock together with the state the frame loop and input handlers
//! share: pause flag, tick counter, edit mode, spawn color and the random
//! stream. Every operation is synchronous and degrades to a no-op on
//! degenerate input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::boid::{Boid, BoidView};
use super::bounds::CanvasBounds;
use super::edit_mode::EditMode;
use super::error::Result;
use super::event_log::{EventKind, EventLog};
use super::flock::{Flock, StepReport};
use super::params::Params;
use super::stats::FlockStats;
use super::team::Team;
use super::vector::Vector2;

/// The simulation core plus its interaction state.
#[derive(Debug, Clone)]
pub struct Simulation {
    flock: Flock,
    params: Params,
    bounds: CanvasBounds,
    rng: StdRng,
    paused: bool,
    show_stats: bool,
    ticks: u64,
    edit_mode: EditMode,
    spawn_team: Option<Team>,
    event_log: EventLog,
}

impl Simulation {
    /// Creates an empty simulation.
    ///
    /// The random stream is seeded from `params.seed`, or from the OS when unset.
    ///
    /// # Returns
    ///
    /// The simulation, or
    /// [`SimError::InvalidParams`](super::error::SimError::InvalidParams)
    /// if `params` fail validation.
    pub fn new(params: Params, bounds: CanvasBounds) -> Result<Self> {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(params, bounds, rng)
    }

    /// Creates an empty simulation drawing from the given random stream.
    ///
    /// # Returns
    ///
    /// The simulation, or
    /// [`SimError::InvalidParams`](super::error::SimError::InvalidParams)
    /// if `params` fail validation.
    pub fn with_rng(params: Params, bounds: CanvasBounds, rng: StdRng) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            flock: Flock::new(),
            params,
            bounds,
            rng,
            paused: false,
            show_stats: true,
            ticks: 0,
            edit_mode: EditMode::Default,
            spawn_team: None,
            event_log: EventLog::default(),
        })
    }

    /// Fills the canvas with `amount` boids, each at its own random position.
    pub fn populate(&mut self, amount: usize) {
        let added = self.flock.spawn_random(
            amount,
            self.spawn_team,
            &self.bounds,
            &self.params,
            &mut self.rng,
        );
        tracing::debug!(added, "populated flock");
        self.log(format!("populated with {added} boids"), EventKind::Spawn);
    }

    /// Advances the simulation by one frame.
    ///
    /// While paused the whole step is skipped: no boid is pruned or moved and
    /// the tick counter stays put, so `ticks` counts simulated frames only.
    pub fn tick(&mut self) -> StepReport {
        if self.paused {
            return StepReport::default();
        }

        let report = self.flock.step(&self.bounds, &self.params, &mut self.rng);
        self.ticks += 1;

        if report.died > 0 {
            self.log(format!("{} boids died", report.died), EventKind::Death);
        }
        if report.replaced > 0 {
            self.log(format!("replaced {} boids", report.replaced), EventKind::Spawn);
        }
        report
    }

    /// Spawns `amount` boids around `(x, y)`.
    ///
    /// With a finite `scatter_radius > 0` each boid is offset by an independent
    /// uniform amount in `[-scatter_radius / 2, scatter_radius / 2]` per axis.
    /// Any other scatter places every boid at `(x, y)`. The team
    /// is the configured spawn team, or random when none is set.
    ///
    /// # Returns
    ///
    /// The number of boids added.
    pub fn spawn(&mut self, amount: usize, x: f64, y: f64, scatter_radius: f64) -> usize {
        if amount == 0 {
            return 0;
        }

        self.place(amount, x, y, scatter_radius);
        tracing::debug!(amount, x, y, scatter_radius, "spawned boids");
        self.log(format!("spawned {amount} boids"), EventKind::Spawn);
        amount
    }

    /// Removes every boid within `radius / 2` of `(x, y)`.
    ///
    /// # Returns
    ///
    /// The number of boids removed.
    pub fn erase_near(&mut self, x: f64, y: f64, radius: f64) -> usize {
        let removed = self.flock.remove_within(Vector2::new(x, y), radius / 2.0);
        if removed > 0 {
            tracing::debug!(removed, x, y, radius, "erased boids");
            self.log(format!("erased {removed} boids"), EventKind::Erase);
        }
        removed
    }

    /// Selects every boid within `radius / 2` of `(x, y)`.
    ///
    /// When `additive` is false every boid outside the radius is deselected.
    ///
    /// # Returns
    ///
    /// The number of boids inside the radius.
    pub fn select_near(&mut self, x: f64, y: f64, radius: f64, additive: bool) -> usize {
        let center = Vector2::new(x, y);
        let reach = radius / 2.0;
        let mut hit = 0;

        for boid in &mut self.flock.boids {
            if Vector2::distance(boid.position, center) <= reach {
                boid.select();
                hit += 1;
            } else if !additive {
                boid.deselect();
            }
        }

        tracing::debug!(hit, additive, "selected boids");
        if hit > 0 {
            self.log(format!("selected {hit} boids"), EventKind::Select);
        }
        hit
    }

    /// Spawns near `(x, y)` while respecting the population cap.
    ///
    /// At or over `max_population`, up to `max_erase` of the oldest boids are
    /// evicted first. Then up to `min(max_population - len, max_spawn)` boids
    /// are added, each scattered independently within the configured spread.
    ///
    /// # Returns
    ///
    /// `(evicted, spawned)` counts.
    pub fn cap_and_spawn(
        &mut self,
        x: f64,
        y: f64,
        max_population: usize,
        max_erase: usize,
        max_spawn: usize,
    ) -> (usize, usize) {
        let mut evicted = 0;
        if self.flock.len() >= max_population {
            evicted = self.flock.evict_oldest(max_erase);
            if evicted > 0 {
                self.log(format!("evicted {evicted} oldest boids"), EventKind::Erase);
            }
        }

        let room = max_population.saturating_sub(self.flock.len());
        let spawned = room.min(max_spawn);
        let scatter = self.params.spawn_scatter;
        self.place(spawned, x, y, scatter);
        if spawned > 0 {
            self.log(format!("spawned {spawned} boids"), EventKind::Spawn);
        }

        tracing::debug!(evicted, spawned, population = self.flock.len(), "capped spawn");
        (evicted, spawned)
    }

    /// Handles a click or drag at `(x, y)` according to the edit mode.
    ///
    /// Ignored while paused. `modifier_held` turns selection into
    /// select-and-deselect-the-rest.
    pub fn pointer(&mut self, x: f64, y: f64, modifier_held: bool) {
        if self.paused {
            return;
        }

        match self.edit_mode {
            EditMode::Default => {}
            EditMode::Select => {
                self.select_near(x, y, EditMode::Select.radius(), !modifier_held);
            }
            EditMode::Erase => {
                self.erase_near(x, y, EditMode::Erase.radius());
            }
            EditMode::Spawn => {
                let (max, erase, spawn) = (
                    self.params.max_boids,
                    self.params.max_erase_at_once,
                    self.params.max_spawn_at_once,
                );
                self.cap_and_spawn(x, y, max, erase, spawn);
            }
        }
    }

    /// Switches the edit mode.
    ///
    /// # Returns
    ///
    /// `true` if the mode changed, `false` if it was already active.
    pub fn set_edit_mode(&mut self, mode: EditMode) -> bool {
        if mode == self.edit_mode {
            return false;
        }
        tracing::info!(from = %self.edit_mode, to = %mode, "edit mode changed");
        self.edit_mode = mode;
        self.log(format!("mode: {mode}"), EventKind::Control);
        true
    }

    /// Flips the pause flag and returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        tracing::info!(paused = self.paused, "pause toggled");
        let state = if self.paused { "paused" } else { "resumed" };
        self.log(state.to_string(), EventKind::Control);
        self.paused
    }

    /// Flips the stats display flag and returns the new value.
    pub fn toggle_stats_display(&mut self) -> bool {
        self.show_stats = !self.show_stats;
        tracing::info!(show_stats = self.show_stats, "stats display toggled");
        self.show_stats
    }

    /// Sets the spawn team by palette index; `-1` or any out-of-range index means random.
    pub fn set_spawn_color_index(&mut self, index: i32) {
        let team = Team::from_index(index);
        if team == self.spawn_team {
            return;
        }
        self.spawn_team = team;
        let name = team.map_or("random", Team::name);
        tracing::info!(spawn_color = name, "spawn color changed");
        self.log(format!("spawn color: {name}"), EventKind::Control);
    }

    /// Updates the canvas size used for wraparound and random placement.
    pub fn resize(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    /// The flock.
    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Mutable access to the flock for callers that place boids directly.
    pub fn flock_mut(&mut self) -> &mut Flock {
        &mut self.flock
    }

    /// Render snapshot of every boid.
    pub fn views(&self) -> Vec<BoidView> {
        self.flock.boids.iter().map(Boid::view).collect()
    }

    /// Number of boids.
    pub fn population(&self) -> usize {
        self.flock.len()
    }

    /// Ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether stepping is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the stats display is shown.
    pub fn shows_stats(&self) -> bool {
        self.show_stats
    }

    /// Active edit mode.
    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    /// Forced spawn team, `None` for random.
    pub fn spawn_team(&self) -> Option<Team> {
        self.spawn_team
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Canvas bounds.
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Recent events, newest first.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Aggregate stats for display.
    pub fn stats(&self) -> FlockStats {
        FlockStats::collect(self)
    }

    fn place(&mut self, amount: usize, x: f64, y: f64, scatter_radius: f64) {
        let half = scatter_radius / 2.0;
        for _ in 0..amount {
            let mut pos = Vector2::new(x, y);
            if scatter_radius.is_finite() && scatter_radius > 0.0 {
                pos += Vector2::new(
                    self.rng.random_range(-half..=half),
                    self.rng.random_range(-half..=half),
                );
            }
            let boid = Boid::new(pos, self.spawn_team, &self.params, &mut self.rng);
            self.flock.add(boid);
        }
    }

    fn log(&mut self, description: String, kind: EventKind) {
        self.event_log.log(self.ticks, description, kind);
    }
}
