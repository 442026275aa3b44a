// UI module - stats and event panels drawn over the flock

mod events;
mod stats;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
