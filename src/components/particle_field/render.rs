//! Canvas rendering for the particle backdrop.
//!
//! Each frame draws in three passes: clear the surface, fill every particle,
//! then stroke the proximity connections. Connection strokes use the live
//! accent color, so they track a theme change immediately, while particle
//! fills keep the color they were created with until the next reseed.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::state::BackdropState;
use super::theme::{Color, ConnectionStyle};

/// Opacity of the line linking two particles `distance` apart: 1.0 when they
/// coincide, fading linearly to zero at the link distance. `None` means the
/// pair is too far apart to link at all.
pub fn connection_alpha(distance: f64, style: &ConnectionStyle) -> Option<f64> {
	if distance < style.distance {
		Some(1.0 - distance / style.distance)
	} else {
		None
	}
}

/// Renders one frame of the backdrop.
pub fn render(
	state: &BackdropState,
	ctx: &CanvasRenderingContext2d,
	style: &ConnectionStyle,
	accent: Color,
) {
	ctx.clear_rect(0.0, 0.0, state.viewport.width, state.viewport.height);

	for particle in state.field.particles() {
		draw_particle(particle, ctx);
	}

	draw_connections(state, ctx, style, accent);
}

fn draw_particle(particle: &Particle, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&particle.color.to_css());
	ctx.begin_path();
	let _ = ctx.arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0);
	ctx.fill();
}

/// Stroke a translucent segment between every unordered pair of particles
/// closer than the link distance. O(n²) over the field; each pair is visited
/// exactly once. Global alpha is restored to fully opaque before returning.
fn draw_connections(
	state: &BackdropState,
	ctx: &CanvasRenderingContext2d,
	style: &ConnectionStyle,
	accent: Color,
) {
	let particles = state.field.particles();
	ctx.set_stroke_style_str(&accent.to_css());
	ctx.set_line_width(style.line_width);

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let Some(alpha) = connection_alpha(dx.hypot(dy), style) else {
				continue;
			};
			ctx.set_global_alpha(alpha);
			ctx.begin_path();
			ctx.move_to(a.x, a.y);
			ctx.line_to(b.x, b.y);
			ctx.stroke();
		}
	}

	ctx.set_global_alpha(1.0);
}
