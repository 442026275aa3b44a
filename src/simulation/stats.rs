use serde::Serialize;

use super::controller::Simulation;
use super::edit_mode::EditMode;
use super::team::Team;

/// Summary of the oldest boid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OldestBoid {
    /// Team the boid currently shows.
    pub team: Team,
    /// Ticks it has survived.
    pub time_alive: u64,
}

/// Snapshot of everything the stats display shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlockStats {
    /// Ticks simulated so far.
    pub ticks: u64,
    /// Number of boids.
    pub population: usize,
    /// Whether the simulation is paused.
    pub paused: bool,
    /// Active edit mode.
    pub edit_mode: EditMode,
    /// Forced spawn team, `None` for random.
    pub spawn_team: Option<Team>,
    /// Number of selected boids.
    pub selected: usize,
    /// Boids per team, largest first.
    pub team_counts: Vec<(Team, usize)>,
    /// Boid with the largest `time_alive`.
    pub oldest: Option<OldestBoid>,
    /// Boids showing a different team from the one they spawned with.
    pub converted: usize,
}

impl FlockStats {
    /// Collects stats from the current simulation state.
    pub fn collect(sim: &Simulation) -> Self {
        let flock = sim.flock();

        Self {
            ticks: sim.ticks(),
            population: flock.len(),
            paused: sim.is_paused(),
            edit_mode: sim.edit_mode(),
            spawn_team: sim.spawn_team(),
            selected: flock.selected_count(),
            team_counts: flock.team_counts(),
            oldest: flock.oldest().map(|boid| OldestBoid {
                team: boid.team,
                time_alive: boid.time_alive,
            }),
            converted: flock
                .boids
                .iter()
                .filter(|b| b.team != b.original_team)
                .count(),
        }
    }

    /// Text lines in the order the stats overlay prints them.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("ticks: {}", self.ticks),
            format!("boids: {}", self.population),
            format!("paused: {}", if self.paused { "yes" } else { "no" }),
            format!("mode: {}", self.edit_mode),
        ];

        if self.edit_mode == EditMode::Spawn {
            let color = self.spawn_team.map_or("random", Team::name);
            lines.push(format!("spawn color: {color}"));
        }
        if self.edit_mode == EditMode::Select {
            lines.push(format!("selected boids: {}", self.selected));
        }

        lines.push(String::new());
        for (team, count) in &self.team_counts {
            lines.push(format!("{team}: {count}"));
        }
        lines.push(format!("converted: {}", self.converted));

        match self.oldest {
            Some(oldest) => lines.push(format!("oldest boid: {} {}", oldest.team, oldest.time_alive)),
            None => lines.push("oldest boid: none".to_string()),
        }

        lines
    }
}
