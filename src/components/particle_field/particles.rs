//! The simulated particle field.
//!
//! Particles move in straight lines, reflect off the viewport edges, and are
//! pushed away from the pointer. The field is only ever mutated by ticking
//! particles in place or by replacing the whole collection.

use log::debug;
use rand::Rng;

use super::state::{PointerState, Viewport};
use super::theme::{Color, FieldStyle};

/// Displacement strength applied inside the pointer's repulsion radius.
const REPULSION_GAIN: f64 = 0.05;

/// A single simulated point.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	/// Visual radius, also used for edge reflection.
	pub size: f64,
	/// Fill color, bound once at creation from the accent that was active
	/// at the time. Only a full reseed changes it.
	pub color: Color,
}

impl Particle {
	/// Create a particle at a uniformly random position inside the viewport,
	/// with randomized size and velocity per the field style.
	pub fn new(rng: &mut impl Rng, viewport: Viewport, style: &FieldStyle, accent: Color) -> Self {
		Self {
			x: rng.gen_range(0.0..viewport.width),
			y: rng.gen_range(0.0..viewport.height),
			speed_x: rng.gen_range(-style.max_speed..style.max_speed),
			speed_y: rng.gen_range(-style.max_speed..style.max_speed),
			size: rng.gen_range(style.size_min..style.size_max),
			color: accent,
		}
	}

	/// Advance one frame: integrate velocity, reflect at the viewport edges,
	/// then apply pointer repulsion.
	pub fn tick(&mut self, viewport: Viewport, pointer: &PointerState) {
		self.x += self.speed_x;
		self.y += self.speed_y;

		// Reflection flips the velocity only; the position may overshoot the
		// edge for a frame before the reversed motion brings it back.
		if self.x + self.size > viewport.width || self.x - self.size < 0.0 {
			self.speed_x = -self.speed_x;
		}
		if self.y + self.size > viewport.height || self.y - self.size < 0.0 {
			self.speed_y = -self.speed_y;
		}

		if let Some((px, py)) = pointer.position {
			let (dx, dy) = (px - self.x, py - self.y);
			let distance = (dx * dx + dy * dy).sqrt();
			// A particle exactly under the pointer has no direction to be
			// pushed in; it stays put for this frame and ordinary motion
			// separates the pair on the next one.
			if distance > 0.0 && distance < pointer.radius {
				let force = pointer.radius / distance;
				self.x -= dx * force * REPULSION_GAIN;
				self.y -= dy * force * REPULSION_GAIN;
			}
		}
	}
}

/// Owns the particle collection.
///
/// There are no incremental add/remove operations: the only structural
/// mutation is wholesale replacement via [`ParticleField::reinitialize`], so
/// observers see either the old full set or the new one, never a mix.
#[derive(Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// Number of particles the density rule yields for a viewport.
	pub fn target_count(viewport: Viewport, style: &FieldStyle) -> usize {
		((viewport.width * viewport.height) / style.density_divisor).floor() as usize
	}

	/// Discard the current collection and seed a fresh one sized to the
	/// viewport, with fills bound to `accent`.
	pub fn reinitialize(
		&mut self,
		rng: &mut impl Rng,
		viewport: Viewport,
		style: &FieldStyle,
		accent: Color,
	) {
		let count = Self::target_count(viewport, style);
		let mut particles = Vec::with_capacity(count);
		for _ in 0..count {
			particles.push(Particle::new(rng, viewport, style, accent));
		}
		self.particles = particles;
		debug!(
			"particle-backdrop: seeded {} particles for {}x{}",
			count, viewport.width, viewport.height
		);
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
		self.particles.iter_mut()
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::theme::Theme;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(0x5eed)
	}

	fn viewport(width: f64, height: f64) -> Viewport {
		Viewport { width, height }
	}

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			speed_x: 0.0,
			speed_y: 0.0,
			size: 2.0,
			color: Theme::dark().accent,
		}
	}

	#[test]
	fn density_rule_floors_the_area_ratio() {
		let style = FieldStyle::default();
		assert_eq!(ParticleField::target_count(viewport(900.0, 900.0), &style), 90);
		assert_eq!(ParticleField::target_count(viewport(800.0, 600.0), &style), 53);
		assert_eq!(
			ParticleField::target_count(viewport(1600.0, 1200.0), &style),
			213
		);
		assert_eq!(ParticleField::target_count(viewport(0.0, 600.0), &style), 0);
	}

	#[test]
	fn reinitialize_seeds_particles_inside_the_viewport() {
		let theme = Theme::dark();
		let vp = viewport(800.0, 600.0);
		let mut field = ParticleField::default();
		field.reinitialize(&mut rng(), vp, &theme.field, theme.accent);

		assert_eq!(field.len(), 53);
		for p in field.particles() {
			assert!((0.0..vp.width).contains(&p.x));
			assert!((0.0..vp.height).contains(&p.y));
			assert!((theme.field.size_min..theme.field.size_max).contains(&p.size));
			assert!((-theme.field.max_speed..theme.field.max_speed).contains(&p.speed_x));
			assert!((-theme.field.max_speed..theme.field.max_speed).contains(&p.speed_y));
			assert_eq!(p.color, theme.accent);
		}
	}

	#[test]
	fn repeated_reinitialize_yields_the_same_count() {
		let theme = Theme::dark();
		let vp = viewport(1024.0, 768.0);
		let mut field = ParticleField::default();
		for _ in 0..3 {
			field.reinitialize(&mut rng(), vp, &theme.field, theme.accent);
			assert_eq!(field.len(), 87);
		}
	}

	#[test]
	fn reflects_at_the_right_edge() {
		let vp = viewport(100.0, 100.0);
		let mut p = still_particle(99.0, 50.0);
		p.speed_x = 1.0;

		p.tick(vp, &PointerState::default());

		assert_eq!(p.x, 100.0);
		assert_eq!(p.speed_x, -1.0);
		assert_eq!(p.speed_y, 0.0);
	}

	#[test]
	fn reflects_at_the_top_edge() {
		let vp = viewport(100.0, 100.0);
		let mut p = still_particle(50.0, 1.5);
		p.speed_y = -0.75;

		p.tick(vp, &PointerState::default());

		// y - size = 0.75 - 2.0 < 0 after the move, so speed_y flips.
		assert_eq!(p.y, 0.75);
		assert_eq!(p.speed_y, 0.75);
	}

	#[test]
	fn pointer_repulsion_pushes_directly_away() {
		let vp = viewport(1000.0, 1000.0);
		let mut pointer = PointerState::default();
		pointer.set_position(150.0, 100.0);

		let mut p = still_particle(100.0, 100.0);
		p.tick(vp, &pointer);

		// distance 50 < 150 => force 3, displacement 50 * 3 * 0.05 = 7.5
		// along -x, away from the pointer.
		assert!((p.x - 92.5).abs() < 1e-9);
		assert!((p.y - 100.0).abs() < 1e-9);
	}

	#[test]
	fn pointer_outside_the_radius_has_no_effect() {
		let vp = viewport(1000.0, 1000.0);
		let mut pointer = PointerState::default();
		pointer.set_position(500.0, 100.0);

		let mut p = still_particle(100.0, 100.0);
		p.tick(vp, &pointer);

		assert_eq!((p.x, p.y), (100.0, 100.0));
	}

	#[test]
	fn pointer_exactly_on_the_particle_is_a_no_op() {
		let vp = viewport(1000.0, 1000.0);
		let mut pointer = PointerState::default();
		pointer.set_position(100.0, 100.0);

		let mut p = still_particle(100.0, 100.0);
		p.tick(vp, &pointer);

		assert!(p.x.is_finite() && p.y.is_finite());
		assert_eq!((p.x, p.y), (100.0, 100.0));
	}

	#[test]
	fn cleared_pointer_applies_no_repulsion() {
		let vp = viewport(1000.0, 1000.0);
		let mut pointer = PointerState::default();
		pointer.set_position(110.0, 100.0);
		pointer.clear();

		let mut p = still_particle(100.0, 100.0);
		p.speed_x = 0.5;
		p.tick(vp, &pointer);

		assert_eq!((p.x, p.y), (100.5, 100.0));
	}
}
