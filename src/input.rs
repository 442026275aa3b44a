use flocksim::simulation::controller::Simulation;
use flocksim::simulation::edit_mode::EditMode;
use macroquad::prelude::*;

/// Pointer state carried between frames to detect drags.
#[derive(Default)]
pub struct InputState {
    last_mouse: Option<(f32, f32)>,
}

/// Applies one typed key to the simulation.
pub fn handle_char(sim: &mut Simulation, key: char) {
    if let Some(mode) = EditMode::from_key(key) {
        sim.set_edit_mode(mode);
        return;
    }

    match key {
        'p' => {
            sim.toggle_pause();
        }
        'h' => {
            sim.toggle_stats_display();
        }
        '0' => sim.set_spawn_color_index(-1),
        '1'..='7' => {
            if let Some(digit) = key.to_digit(10) {
                sim.set_spawn_color_index(digit as i32 - 1);
            }
        }
        _ => {}
    }
}

/// Drains this frame's key presses into the simulation.
pub fn handle_keys(sim: &mut Simulation) {
    if is_key_pressed(KeyCode::Escape) {
        sim.toggle_pause();
    }
    while let Some(key) = get_char_pressed() {
        handle_char(sim, key.to_ascii_lowercase());
    }
}

/// Forwards clicks and drags to the simulation unless the UI owns the pointer.
pub fn handle_pointer(sim: &mut Simulation, state: &mut InputState, pointer_over_ui: bool) {
    let mouse = mouse_position();
    let moved = state.last_mouse.is_some_and(|last| last != mouse);
    state.last_mouse = Some(mouse);

    if pointer_over_ui {
        return;
    }

    let clicked = is_mouse_button_pressed(MouseButton::Left);
    let dragged = is_mouse_button_down(MouseButton::Left) && moved;
    if clicked || dragged {
        let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
        sim.pointer(f64::from(mouse.0), f64::from(mouse.1), shift);
    }
}
