//! Canvas drawing for the particle field.
//!
//! Each frame is a blend rather than a clear: a faint overlay in the trail
//! color is painted first so earlier frames fade out gradually, then the
//! field is stepped and every particle drawn on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::theme::FieldStyle;

/// Advances the field by one frame and draws it.
pub fn render_frame(field: &mut ParticleField, ctx: &CanvasRenderingContext2d, style: &FieldStyle) {
	draw_trail(field, ctx, style);
	field.step();
	draw_particles(field, ctx);
}

fn draw_trail(field: &ParticleField, ctx: &CanvasRenderingContext2d, style: &FieldStyle) {
	ctx.set_fill_style_str(&style.trail.to_css());
	ctx.fill_rect(0.0, 0.0, field.width(), field.height());
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	for p in &field.particles {
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.set_global_alpha(p.opacity);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}
