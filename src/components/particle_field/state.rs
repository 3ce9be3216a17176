//! Simulation state and the per-frame loop.
//!
//! [`Simulation`] owns everything the animation mutates: viewport size,
//! pointer position, theme color and the live particle collection. The
//! component holds it behind an `Rc<RefCell<_>>` and feeds it browser events;
//! all browser callbacks run on the same thread and never overlap, so each
//! one borrows the simulation for the duration of a single step.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::ParticleConfig;
use super::particles::Particle;
use super::population::{populate, sync_to_target, target_count};
use super::render::Surface;
use super::theme::{ThemeColor, ThemeSource};

/// Size of the drawable area, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Last known pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Default for Pointer {
	/// Far outside any real viewport, so nothing is repelled before the first move.
	fn default() -> Self {
		Self {
			x: -9999.0,
			y: -9999.0,
		}
	}
}

/// Host input the particles react to.
#[derive(Clone, Debug, Default)]
pub struct Input {
	pub viewport: Viewport,
	pub pointer: Pointer,
}

/// Lifecycle of the animation loop. There is no stopped state; the loop
/// ends with the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
	/// Created, no frame drawn yet.
	#[default]
	Idle,
	/// At least one frame has been drawn.
	Running,
}

/// The complete particle field simulation.
pub struct Simulation {
	config: ParticleConfig,
	input: Input,
	particles: Vec<Particle>,
	theme: ThemeColor,
	state: LoopState,
	last_frame_time: f64,
	rng: SmallRng,
}

impl Simulation {
	/// Create a simulation fully populated for `viewport`.
	///
	/// `now` is the timestamp (milliseconds) the first frame's delta is
	/// measured from. `seed` drives all particle randomness.
	pub fn new(config: ParticleConfig, viewport: Viewport, now: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let mut particles = Vec::new();
		let target = target_count(viewport.width, viewport.height, &config.population);
		populate(&mut particles, target, viewport, &config.spawn, &mut rng);
		info!(
			"ambient-particles: {}x{} viewport, {} particles",
			viewport.width, viewport.height, target
		);

		Self {
			theme: ThemeColor::new(&config.appearance),
			config,
			input: Input {
				viewport,
				pointer: Pointer::default(),
			},
			particles,
			state: LoopState::Idle,
			last_frame_time: now,
			rng,
		}
	}

	/// Advance and draw one frame at timestamp `now` (milliseconds).
	///
	/// Returns the normalized delta the frame was stepped with.
	pub fn tick(&mut self, now: f64, surface: &mut impl Surface) -> f64 {
		// rAF timestamps may precede the clock reading taken at creation.
		let delta = ((now - self.last_frame_time) / self.config.frame_ms()).max(0.0);
		self.last_frame_time = now;
		if self.state == LoopState::Idle {
			debug!("ambient-particles: first frame");
			self.state = LoopState::Running;
		}

		self.sync_population();

		let Viewport { width, height } = self.input.viewport;
		surface.clear(width, height);

		for i in 0..self.particles.len() {
			let (before, rest) = self.particles.split_at_mut(i);
			let Some((current, after)) = rest.split_first_mut() else {
				break;
			};
			current.update(
				delta,
				&self.input,
				before.iter().chain(after.iter()),
				&self.config.motion,
			);
			current.draw(surface, self.theme.color(), &self.config.appearance);
		}

		delta
	}

	/// Record a new viewport size and adjust the population right away.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.input.viewport = Viewport { width, height };
		self.sync_population();
	}

	/// Record a pointer move, in viewport coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.input.pointer = Pointer { x, y };
	}

	/// Re-read the particle color from the host theme.
	pub fn refresh_color(&mut self, source: &impl ThemeSource) {
		if self.theme.refresh(source) {
			debug!("ambient-particles: particle color {}", self.theme.color());
		}
	}

	/// Current particle draw color.
	pub fn color(&self) -> &str {
		self.theme.color()
	}

	/// Live particles, in update order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Current viewport and pointer.
	pub fn input(&self) -> &Input {
		&self.input
	}

	/// Whether a frame has been drawn yet.
	pub fn state(&self) -> LoopState {
		self.state
	}

	/// Population the current viewport calls for.
	pub fn target(&self) -> usize {
		let Viewport { width, height } = self.input.viewport;
		target_count(width, height, &self.config.population)
	}

	fn sync_population(&mut self) {
		let target = self.target();
		let change = sync_to_target(
			&mut self.particles,
			target,
			self.input.viewport,
			&self.config.population,
			&self.config.spawn,
			&mut self.rng,
		);
		if change != 0 {
			debug!(
				"ambient-particles: population {:+} -> {} (target {})",
				change,
				self.particles.len(),
				target
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::testing::{Op, Recorder};
	use super::*;

	struct FixedTheme(Option<&'static str>);

	impl ThemeSource for FixedTheme {
		fn foreground_color(&self, _variable: &str) -> Option<String> {
			self.0.map(str::to_string)
		}
	}

	fn simulation(width: f64, height: f64) -> Simulation {
		Simulation::new(
			ParticleConfig::default(),
			Viewport { width, height },
			0.0,
			42,
		)
	}

	#[test]
	fn starts_idle_and_fully_populated() {
		let sim = simulation(500.0, 200.0);
		assert_eq!(sim.state(), LoopState::Idle);
		assert_eq!(sim.particles().len(), 40);
		assert_eq!(sim.input().pointer, Pointer { x: -9999.0, y: -9999.0 });
		assert_eq!(sim.color(), "#111111");
	}

	#[test]
	fn large_initial_viewport_is_not_capped() {
		let sim = simulation(1920.0, 1080.0);
		assert_eq!(sim.particles().len(), 829);
	}

	#[test]
	fn resize_growth_is_capped() {
		let mut sim = simulation(500.0, 200.0);
		sim.resize(500.0, 1000.0);
		assert_eq!(sim.target(), 200);
		assert_eq!(sim.particles().len(), 104);

		let mut surface = Recorder::default();
		sim.tick(16.0, &mut surface);
		assert_eq!(sim.particles().len(), 168);
		sim.tick(32.0, &mut surface);
		assert_eq!(sim.particles().len(), 200);
	}

	#[test]
	fn resize_shrink_is_capped() {
		let mut sim = simulation(1000.0, 1000.0);
		sim.resize(100.0, 100.0);
		assert_eq!(sim.particles().len(), 336);
		for p in sim.particles() {
			assert!(p.x.is_finite() && p.y.is_finite());
		}
	}

	#[test]
	fn tick_normalizes_delta_to_sixty_fps() {
		let mut sim = simulation(500.0, 200.0);
		let mut surface = Recorder::default();
		let frame = 1000.0 / 60.0;

		assert!((sim.tick(frame, &mut surface) - 1.0).abs() < 1e-9);
		assert_eq!(sim.state(), LoopState::Running);
		// 120 Hz display
		assert!((sim.tick(frame * 1.5, &mut surface) - 0.5).abs() < 1e-9);
		// dropped frame
		assert!((sim.tick(frame * 3.5, &mut surface) - 2.0).abs() < 1e-9);
	}

	#[test]
	fn tick_before_creation_time_does_not_step_backwards() {
		let mut sim = Simulation::new(
			ParticleConfig::default(),
			Viewport {
				width: 500.0,
				height: 200.0,
			},
			100.0,
			1,
		);
		let mut surface = Recorder::default();
		assert_eq!(sim.tick(95.0, &mut surface), 0.0);
	}

	#[test]
	fn tick_clears_then_draws_every_particle() {
		let mut sim = simulation(500.0, 200.0);
		sim.refresh_color(&FixedTheme(Some("  #fafafa ")));
		let mut surface = Recorder::default();
		sim.tick(16.0, &mut surface);

		assert_eq!(surface.ops.first(), Some(&Op::Clear(500.0, 200.0)));
		let circles = surface.circles();
		assert_eq!(circles.len(), 40);
		for ((x, y, r), p) in circles.iter().zip(sim.particles()) {
			assert_eq!((*x, *y, *r), (p.x, p.y, 1.5));
			assert!((0.0..500.0).contains(x) && (0.0..200.0).contains(y));
		}
		assert!(
			surface
				.ops
				.iter()
				.filter(|op| matches!(op, Op::Fill(_)))
				.all(|op| *op == Op::Fill("#fafafa".to_string()))
		);
	}

	#[test]
	fn theme_change_reaches_next_frame() {
		let mut sim = simulation(300.0, 300.0);
		let mut surface = Recorder::default();
		sim.refresh_color(&FixedTheme(Some("#e6e6e6")));
		sim.tick(16.0, &mut surface);
		sim.refresh_color(&FixedTheme(None));
		surface.ops.clear();
		sim.tick(32.0, &mut surface);
		assert!(surface.ops.contains(&Op::Fill("#111111".to_string())));
		assert!(!surface.ops.contains(&Op::Fill("#e6e6e6".to_string())));
	}

	#[test]
	fn pointer_pushes_nearest_particle_away() {
		let mut calm = simulation(400.0, 400.0);
		let mut pushed = simulation(400.0, 400.0);
		let first = calm.particles()[0].clone();
		pushed.pointer_moved(first.x - 50.0, first.y);

		let mut surface = Recorder::default();
		calm.tick(16.0, &mut surface);
		pushed.tick(16.0, &mut surface);

		// The first particle sees identical peers in both runs.
		let (a, b) = (&calm.particles()[0], &pushed.particles()[0]);
		assert!(b.vx > a.vx);
		assert!((b.vy - a.vy).abs() < 1e-12);
	}

	#[test]
	fn zero_viewport_has_no_particles() {
		let mut sim = simulation(0.0, 0.0);
		let mut surface = Recorder::default();
		sim.tick(16.0, &mut surface);
		assert!(sim.particles().is_empty());
		assert_eq!(surface.ops, vec![Op::Clear(0.0, 0.0)]);
	}
}
