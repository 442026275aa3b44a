use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use flocksim::simulation::controller::Simulation;
use flocksim::simulation::edit_mode::EditMode;
use flocksim::simulation::team::Team;
use macroquad::time::get_fps;

use super::ui::UIState;

fn team_color(team: Team) -> egui::Color32 {
    let c = team.color();
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &UIState, sim: &Simulation) {
    let stats = sim.stats();

    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Flock Stats");
            ui.separator();

            ui.label(format!("fps: {}", get_fps()));
            for line in stats.lines() {
                if !line.is_empty() {
                    ui.label(line);
                }
            }

            ui.separator();
            ui.heading("Teams");
            for (team, count) in &stats.team_counts {
                ui.colored_label(team_color(*team), format!("{team}: {count}"));
            }

            ui.separator();
            ui.heading("Population");
            draw_population_plot(ui, state);

            ui.separator();
            ui.collapsing("Key Bindings", |ui| {
                ui.label("pause = p / esc");
                ui.label("stats = h");
                for mode in EditMode::ALL {
                    ui.label(format!("{} = {}", mode, mode.key_bind()));
                }
                for hint in sim.edit_mode().hints() {
                    ui.label(*hint);
                }
            });
        });
}

fn draw_population_plot(ui: &mut egui::Ui, state: &UIState) {
    if state.population_history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(180.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTick: {:.0}\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let total: PlotPoints = state
                .population_history
                .iter()
                .map(|&(x, y)| [x, y])
                .collect();
            plot_ui.line(
                Line::new(total)
                    .color(egui::Color32::from_rgb(180, 180, 180))
                    .name("All"),
            );

            for team in Team::ALL {
                let history = &state.team_histories[team.index()];
                if history.iter().all(|&(_, y)| y == 0.0) {
                    continue;
                }
                let points: PlotPoints = history.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(Line::new(points).color(team_color(team)).name(team.name()));
            }
        });
}
