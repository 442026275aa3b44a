use flocksim::simulation::boid::BoidView;
use flocksim::simulation::edit_mode::EditMode;
use macroquad::prelude::*;

const SELECTED_SCALE: f32 = 2.0;
const OUTLINE_THICKNESS: f32 = 3.0;

/// Rotates a local-space vertex by `theta` and moves it to `origin`.
fn place(origin: Vec2, local: Vec2, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    origin + vec2(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
}

pub fn draw_boids(boids: &[BoidView]) {
    boids.iter().for_each(|boid| {
        let origin = vec2(boid.position.x as f32, boid.position.y as f32);
        let theta = boid.heading as f32;
        let scale = if boid.selected { SELECTED_SCALE } else { 1.0 };
        let r = boid.radius as f32 * scale;

        // triangle pointing along the heading
        let nose = place(origin, vec2(0.0, -r * 2.0), theta);
        let left = place(origin, vec2(-r, r * 2.0), theta);
        let right = place(origin, vec2(r, r * 2.0), theta);

        let fill = Color::from_rgba(boid.color.r, boid.color.g, boid.color.b, 255);
        let outline = if boid.selected {
            Color::from_rgba(255, 255, 255, 100)
        } else {
            fill
        };

        draw_triangle(nose, left, right, fill);
        draw_triangle_lines(nose, left, right, OUTLINE_THICKNESS, outline);
    });
}

/// Draws the edit mode's cursor circle around the pointer.
pub fn draw_cursor(mode: EditMode, (x, y): (f32, f32)) {
    let tint = mode.tint();
    let radius = mode.radius() as f32 / 2.0;
    let stroke_alpha = tint.a.saturating_mul(2).max(100);

    draw_circle(x, y, radius, Color::from_rgba(tint.r, tint.g, tint.b, tint.a));
    draw_circle_lines(
        x,
        y,
        radius,
        1.0,
        Color::from_rgba(tint.r, tint.g, tint.b, stroke_alpha),
    );
}
