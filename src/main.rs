use anyhow::Context;
use flocksim::simulation::bounds::CanvasBounds;
use flocksim::simulation::controller::Simulation;
use flocksim::simulation::params::Params;
use macroquad::prelude::*;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

mod graphics;
mod input;
mod ui;

/// Reads params from the JSON file named by the first argument, if any.
fn load_params() -> anyhow::Result<Params> {
    match std::env::args().nth(1) {
        Some(path) => {
            Params::from_json_file(&path).with_context(|| format!("loading params from {path}"))
        }
        None => Ok(Params::default()),
    }
}

fn canvas_bounds() -> CanvasBounds {
    CanvasBounds::new(f64::from(screen_width()), f64::from(screen_height()))
}

/// Builds the simulation, falling back to default params if `params` are rejected,
/// and fills the canvas with `max_boids` boids.
fn start_simulation(params: Params) -> anyhow::Result<Simulation> {
    let mut sim = Simulation::new(params, canvas_bounds())
        .or_else(|e| {
            error!("{e}; using default params");
            Simulation::new(Params::default(), canvas_bounds())
        })
        .context("creating simulation")?;
    sim.populate(sim.params().max_boids);
    Ok(sim)
}

#[macroquad::main("Flocking Simulation")]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }

    let params = load_params().unwrap_or_else(|e| {
        error!("{e:#}; using default params");
        Params::default()
    });

    let mut sim = match start_simulation(params) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e:#}");
            return;
        }
    };
    info!(boids = sim.population(), "starting flocking simulation");

    let mut ui_state = ui::UIState::new();
    let mut input_state = input::InputState::default();

    loop {
        clear_background(Color::from_rgba(51, 51, 51, 255));

        let bounds = canvas_bounds();
        if bounds != sim.bounds() {
            sim.resize(bounds);
        }

        input::handle_keys(&mut sim);
        input::handle_pointer(&mut sim, &mut input_state, ui_state.pointer_over_ui);

        sim.tick();

        graphics::draw_boids(&sim.views());
        graphics::draw_cursor(sim.edit_mode(), mouse_position());

        ui_state.update_history(&sim);
        ui::draw_ui(&mut ui_state, &sim);
        ui::process_egui();

        next_frame().await
    }
}
