use egui_macroquad::egui;
use flocksim::simulation::controller::Simulation;
use flocksim::simulation::team::Team;
use std::collections::VecDeque;

use super::events::draw_events_panel;
use super::stats::draw_stats_panel;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub stats_panel_width: f32,
    pub population_history: VecDeque<(f64, f64)>,
    /// One history per team, in palette order.
    pub team_histories: Vec<VecDeque<(f64, f64)>>,
    pub pointer_over_ui: bool,
    last_update_tick: u64,
    update_interval: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 260.0,
            population_history: VecDeque::new(),
            team_histories: vec![VecDeque::new(); Team::ALL.len()],
            pointer_over_ui: false,
            last_update_tick: 0,
            update_interval: 30, // Sample every 30 ticks
        }
    }

    pub fn update_history(&mut self, sim: &Simulation) {
        let ticks = sim.ticks();
        if !self.population_history.is_empty()
            && ticks < self.last_update_tick + self.update_interval
        {
            return;
        }
        self.last_update_tick = ticks;

        let t = ticks as f64;
        push_bounded(
            &mut self.population_history,
            (t, sim.population() as f64),
        );

        let counts = sim.flock().team_counts();
        for team in Team::ALL {
            let count = counts
                .iter()
                .find(|(t, _)| *t == team)
                .map_or(0, |&(_, c)| c);
            push_bounded(&mut self.team_histories[team.index()], (t, count as f64));
        }
    }
}

fn push_bounded(history: &mut VecDeque<(f64, f64)>, point: (f64, f64)) {
    history.push_back(point);
    if history.len() > MAX_HISTORY_POINTS {
        history.pop_front();
    }
}

pub fn draw_ui(state: &mut UIState, sim: &Simulation) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        if sim.shows_stats() {
            draw_stats_panel(egui_ctx, state, sim);
            draw_events_panel(egui_ctx, sim);
        }

        state.pointer_over_ui = egui_ctx.wants_pointer_input() || egui_ctx.is_pointer_over_area();
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
