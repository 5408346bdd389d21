//! Shared simulation state written by input events and read by the frame loop.
//!
//! Execution is single-threaded and event-driven, so the structs here carry no
//! locking: every event callback and every animation frame runs to completion
//! before the next one starts.

use rand::Rng;

use super::particles::ParticleField;
use super::theme::{Color, Theme};

/// Distance within which the pointer repels particles.
pub const POINTER_RADIUS: f64 = 150.0;

/// Drawing-surface dimensions as of the last resize event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Last-known pointer position plus the interaction radius.
///
/// `position` is `None` while no pointer is over the page; both coordinates
/// always appear and disappear together.
#[derive(Clone, Debug)]
pub struct PointerState {
	pub position: Option<(f64, f64)>,
	/// Repulsion radius (constant).
	pub radius: f64,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			position: None,
			radius: POINTER_RADIUS,
		}
	}
}

impl PointerState {
	/// Record a pointer move.
	pub fn set_position(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	/// Forget the pointer after it leaves the page.
	pub fn clear(&mut self) {
		self.position = None;
	}
}

/// Core backdrop state combining the viewport, the pointer, and the field.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop. `tick` advances every particle; `resize` and `reseed`
/// replace the whole field.
pub struct BackdropState {
	pub viewport: Viewport,
	pub pointer: PointerState,
	pub field: ParticleField,
}

impl BackdropState {
	pub fn new(rng: &mut impl Rng, width: f64, height: f64, theme: &Theme, accent: Color) -> Self {
		let viewport = Viewport { width, height };
		let mut field = ParticleField::default();
		field.reinitialize(rng, viewport, &theme.field, accent);
		Self {
			viewport,
			pointer: PointerState::default(),
			field,
		}
	}

	/// Advance every particle one frame against the current pointer.
	/// Iteration order is insertion order, stable for the frame.
	pub fn tick(&mut self) {
		let viewport = self.viewport;
		for particle in self.field.iter_mut() {
			particle.tick(viewport, &self.pointer);
		}
	}

	/// Adopt new surface dimensions and reseed the field for the new area.
	pub fn resize(
		&mut self,
		rng: &mut impl Rng,
		width: f64,
		height: f64,
		theme: &Theme,
		accent: Color,
	) {
		self.viewport = Viewport { width, height };
		self.field.reinitialize(rng, self.viewport, &theme.field, accent);
	}

	/// Replace every particle so fills pick up a new accent color.
	pub fn reseed(&mut self, rng: &mut impl Rng, theme: &Theme, accent: Color) {
		self.field.reinitialize(rng, self.viewport, &theme.field, accent);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(0x0b5e)
	}

	#[test]
	fn pointer_coordinates_live_and_die_together() {
		let mut pointer = PointerState::default();
		assert!(pointer.position.is_none());
		assert_eq!(pointer.radius, POINTER_RADIUS);

		pointer.set_position(12.0, 34.0);
		assert_eq!(pointer.position, Some((12.0, 34.0)));

		pointer.clear();
		assert!(pointer.position.is_none());
	}

	#[test]
	fn new_state_seeds_the_density_count() {
		let theme = Theme::dark();
		let state = BackdropState::new(&mut rng(), 900.0, 900.0, &theme, theme.accent);
		assert_eq!(state.field.len(), 90);
	}

	#[test]
	fn tick_moves_each_particle_by_its_velocity() {
		let theme = Theme::dark();
		let mut state = BackdropState::new(&mut rng(), 300.0, 300.0, &theme, theme.accent);
		let before: Vec<(f64, f64, f64, f64)> = state
			.field
			.particles()
			.iter()
			.map(|p| (p.x, p.y, p.speed_x, p.speed_y))
			.collect();

		state.tick();

		// Position integrates the pre-tick velocity even when the particle
		// reflects: reflection flips velocity, never clamps position.
		for (particle, (x, y, sx, sy)) in state.field.particles().iter().zip(before) {
			assert!((particle.x - (x + sx)).abs() < 1e-12);
			assert!((particle.y - (y + sy)).abs() < 1e-12);
		}
	}

	#[test]
	fn resize_replaces_the_field_for_the_new_area() {
		let theme = Theme::dark();
		let mut state = BackdropState::new(&mut rng(), 800.0, 600.0, &theme, theme.accent);
		assert_eq!(state.field.len(), 53);

		state.resize(&mut rng(), 1600.0, 1200.0, &theme, theme.accent);
		assert_eq!(state.field.len(), 213);
	}

	#[test]
	fn reseed_keeps_the_count_for_the_same_viewport() {
		let dark = Theme::dark();
		let mut state = BackdropState::new(&mut rng(), 900.0, 600.0, &dark, dark.accent);
		let count = state.field.len();

		let light = Theme::light();
		state.reseed(&mut rng(), &light, light.accent);
		assert_eq!(state.field.len(), count);
		for particle in state.field.particles() {
			assert_eq!(particle.color, light.accent);
		}
	}
}
