//! Viewport-proportional particle population.
//!
//! The live particle count tracks the viewport area so the field looks equally
//! dense on any screen. Changes are spread over several calls to keep a large
//! resize from costing one long frame.

use rand::Rng;

use super::config::{PopulationConfig, SpawnConfig};
use super::particles::Particle;
use super::state::Viewport;

/// Number of particles that keeps density constant for a `width × height` viewport.
pub fn target_count(width: f64, height: f64, config: &PopulationConfig) -> usize {
	let block_area = config.block_size * config.block_size;
	let count = (width * height / block_area * config.density).round();
	if count.is_finite() && count > 0.0 {
		count as usize
	} else {
		0
	}
}

/// Fill `particles` up to exactly `target` in one go.
///
/// Used at start-up, before anything has been drawn.
pub fn populate(
	particles: &mut Vec<Particle>,
	target: usize,
	viewport: Viewport,
	spawn: &SpawnConfig,
	rng: &mut impl Rng,
) {
	particles.clear();
	particles.reserve(target);
	particles.extend((0..target).map(|_| Particle::new(rng, viewport, spawn)));
}

/// Move the population one step toward `target`.
///
/// At most `config.max_step` particles are added or removed. New particles are
/// placed at random; removed ones are taken from the end. Returns the signed
/// change in length.
pub fn sync_to_target(
	particles: &mut Vec<Particle>,
	target: usize,
	viewport: Viewport,
	config: &PopulationConfig,
	spawn: &SpawnConfig,
	rng: &mut impl Rng,
) -> isize {
	let current = particles.len();
	if current < target {
		let add = (target - current).min(config.max_step);
		particles.extend((0..add).map(|_| Particle::new(rng, viewport, spawn)));
		add as isize
	} else if current > target {
		let remove = (current - target).min(config.max_step);
		particles.truncate(current - remove);
		-(remove as isize)
	} else {
		0
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	const VIEWPORT: Viewport = Viewport {
		width: 640.0,
		height: 480.0,
	};

	#[test]
	fn target_scales_with_area() {
		let config = PopulationConfig::default();
		assert_eq!(target_count(1000.0, 1000.0, &config), 400);
		assert_eq!(target_count(500.0, 200.0, &config), 40);
		assert_eq!(target_count(0.0, 0.0, &config), 0);
		assert_eq!(target_count(1920.0, 0.0, &config), 0);
		// 0.5 particles rounds up, 0.49 rounds down.
		assert_eq!(target_count(125.0, 10.0, &config), 1);
		assert_eq!(target_count(122.5, 10.0, &config), 0);
	}

	#[test]
	fn target_is_never_negative() {
		let config = PopulationConfig::default();
		assert_eq!(target_count(-500.0, 200.0, &config), 0);
		assert_eq!(target_count(f64::NAN, 200.0, &config), 0);
	}

	#[test]
	fn populate_is_not_capped() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut particles = Vec::new();
		populate(&mut particles, 500, VIEWPORT, &SpawnConfig::default(), &mut rng);
		assert_eq!(particles.len(), 500);
	}

	#[test]
	fn sync_changes_at_most_max_step() {
		let mut rng = SmallRng::seed_from_u64(2);
		let config = PopulationConfig::default();
		let spawn = SpawnConfig::default();
		let mut particles = Vec::new();

		for target in [0, 1000, 10, 63, 64, 65, 400, 0, 129] {
			let before = particles.len();
			let change =
				sync_to_target(&mut particles, target, VIEWPORT, &config, &spawn, &mut rng);
			let after = particles.len();
			assert!(before.abs_diff(after) <= 64);
			assert_eq!(after as isize - before as isize, change);
			assert!(after.abs_diff(target) <= before.abs_diff(target));
		}
	}

	#[test]
	fn sync_converges_over_several_calls() {
		let mut rng = SmallRng::seed_from_u64(3);
		let config = PopulationConfig::default();
		let spawn = SpawnConfig::default();
		let mut particles = Vec::new();

		let mut calls = 0;
		while particles.len() != 200 {
			sync_to_target(&mut particles, 200, VIEWPORT, &config, &spawn, &mut rng);
			calls += 1;
		}
		assert_eq!(calls, 4);
		assert_eq!(
			sync_to_target(&mut particles, 200, VIEWPORT, &config, &spawn, &mut rng),
			0
		);

		assert_eq!(
			sync_to_target(&mut particles, 100, VIEWPORT, &config, &spawn, &mut rng),
			-64
		);
		assert_eq!(particles.len(), 136);
	}

	#[test]
	fn shrinking_keeps_the_front() {
		let mut rng = SmallRng::seed_from_u64(4);
		let config = PopulationConfig::default();
		let spawn = SpawnConfig::default();
		let mut particles = Vec::new();
		populate(&mut particles, 10, VIEWPORT, &spawn, &mut rng);
		let front = particles[..4].to_vec();

		sync_to_target(&mut particles, 4, VIEWPORT, &config, &spawn, &mut rng);
		assert_eq!(particles, front);
	}
}
