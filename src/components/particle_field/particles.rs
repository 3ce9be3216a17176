//! A single drifting particle.
//!
//! Each particle wanders on its own (a slowly rotating hover force), gets
//! pushed away from the pointer and from close neighbours, and wraps around
//! the viewport edges.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::{AppearanceConfig, MotionConfig, SpawnConfig};
use super::render::Surface;
use super::state::{Input, Viewport};

/// A single floating particle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Phase of the hover drift, advanced every update.
	pub hover_angle: f64,
	/// Phase advance per unit of delta. Fixed for the particle's lifetime.
	pub hover_speed: f64,
}

impl Particle {
	/// Create a particle at a random position inside `viewport`.
	pub fn new(rng: &mut impl Rng, viewport: Viewport, spawn: &SpawnConfig) -> Self {
		let mut particle = Self::default();
		particle.reset(rng, viewport, spawn);
		particle
	}

	/// Re-randomize position, drift and hover parameters.
	pub fn reset(&mut self, rng: &mut impl Rng, viewport: Viewport, spawn: &SpawnConfig) {
		self.x = wrap_axis(rng.r#gen::<f64>() * viewport.width, viewport.width);
		self.y = wrap_axis(rng.r#gen::<f64>() * viewport.height, viewport.height);

		self.vx = (rng.r#gen::<f64>() - 0.5) * spawn.drift;
		self.vy = (rng.r#gen::<f64>() - 0.5) * spawn.drift;

		self.hover_speed = spawn.hover_speed_min
			+ rng.r#gen::<f64>() * (spawn.hover_speed_max - spawn.hover_speed_min);
		self.hover_angle = rng.r#gen::<f64>() * TAU;
	}

	/// Advance the particle by one frame.
	///
	/// `delta` is the frame time relative to the target frame rate (1.0 at
	/// 60 fps). `peers` must not contain `self`.
	pub fn update<'a>(
		&mut self,
		delta: f64,
		input: &Input,
		peers: impl IntoIterator<Item = &'a Particle>,
		motion: &MotionConfig,
	) {
		self.hover_angle += self.hover_speed * delta;
		self.vx += self.hover_angle.cos() * motion.hover_accel * delta;
		self.vy += self.hover_angle.sin() * motion.hover_accel * delta;

		let pointer = input.pointer;
		if let Some((ax, ay)) = repulsion(
			self.x - pointer.x,
			self.y - pointer.y,
			motion.cursor_radius,
			motion.cursor_strength,
		) {
			self.vx += ax * delta;
			self.vy += ay * delta;
		}

		for peer in peers {
			if let Some((ax, ay)) = repulsion(
				self.x - peer.x,
				self.y - peer.y,
				motion.peer_radius,
				motion.peer_strength,
			) {
				self.vx += ax * delta;
				self.vy += ay * delta;
			}
		}

		// Per frame, not per delta.
		self.vx *= motion.damping;
		self.vy *= motion.damping;

		self.x += self.vx * delta;
		self.y += self.vy * delta;

		self.x = wrap_axis(self.x, input.viewport.width);
		self.y = wrap_axis(self.y, input.viewport.height);
	}

	/// Draw the particle as a soft disc in `color`.
	pub fn draw(&self, surface: &mut impl Surface, color: &str, appearance: &AppearanceConfig) {
		surface.set_alpha(appearance.opacity);
		surface.set_fill_color(color);
		surface.fill_circle(self.x, self.y, appearance.radius);
	}
}

/// Velocity change that pushes a point away from a source it is offset from
/// by `(dx, dy)`.
///
/// Falls off linearly from `strength` at the source to zero at `radius`.
/// Returns `None` outside the radius and at zero distance, where the
/// direction is undefined.
pub fn repulsion(dx: f64, dy: f64, radius: f64, strength: f64) -> Option<(f64, f64)> {
	let dist = (dx * dx + dy * dy).sqrt();
	if !(dist > 0.0 && dist < radius) {
		return None;
	}
	let force = (radius - dist) / radius * strength;
	Some((dx / dist * force, dy / dist * force))
}

/// Bring a coordinate back into `[0, extent)`.
///
/// Reaching the far edge restarts at 0; leaving through 0 re-enters from the
/// far edge, keeping the overshoot.
pub fn wrap_axis(value: f64, extent: f64) -> f64 {
	if !(extent > 0.0) || !value.is_finite() {
		return 0.0;
	}
	if value >= extent {
		0.0
	} else if value < 0.0 {
		let wrapped = value.rem_euclid(extent);
		if wrapped >= extent { 0.0 } else { wrapped }
	} else {
		value
	}
}
