use egui_macroquad::egui;
use flocksim::simulation::controller::Simulation;
use flocksim::simulation::event_log::LoggedEvent;

const PANEL_SIZE: egui::Vec2 = egui::vec2(300.0, 260.0);
const MARGIN: f32 = 10.0;

fn event_row(ui: &mut egui::Ui, event: &LoggedEvent) {
    let (r, g, b) = event.kind.rgb();
    ui.horizontal(|ui| {
        ui.monospace(
            egui::RichText::new(format!("{:>6}", event.tick))
                .color(egui::Color32::from_rgb(180, 180, 200))
                .size(11.0),
        );
        ui.label(
            egui::RichText::new(&event.description)
                .color(egui::Color32::from_rgb(r, g, b))
                .size(11.0),
        );
    });
}

/// Recent events, anchored to the bottom-left corner.
pub fn draw_events_panel(egui_ctx: &egui::Context, sim: &Simulation) {
    let frame = egui::Frame::window(&egui_ctx.style())
        .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 200));

    egui::Window::new("Recent Events")
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(MARGIN, -MARGIN))
        .fixed_size(PANEL_SIZE)
        .collapsible(true)
        .frame(frame)
        .show(egui_ctx, |ui| {
            let log = sim.event_log();
            if log.is_empty() {
                ui.weak("Nothing has happened yet");
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for event in log.events() {
                    event_row(ui, event);
                }
            });
        });
}
