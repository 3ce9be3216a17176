//! Tuning configuration for the particle field.
//!
//! Every constant the simulation uses lives here, grouped by concern. All
//! structs deserialize with `#[serde(default)]`, so a host page can override a
//! single field without restating the rest:
//!
//! ```json
//! { "motion": { "cursor_radius": 120.0 }, "appearance": { "opacity": 0.3 } }
//! ```

use serde::Deserialize;

/// Forces applied to each particle during an update step.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
	/// Acceleration of the hover drift, per unit of delta.
	pub hover_accel: f64,
	/// Distance below which the pointer pushes particles away.
	pub cursor_radius: f64,
	/// Peak cursor push (at zero distance), per unit of delta.
	pub cursor_strength: f64,
	/// Distance below which particles push each other apart.
	pub peer_radius: f64,
	/// Peak peer push, per unit of delta.
	pub peer_strength: f64,
	/// Per-frame velocity multiplier. Applied once per frame, not scaled by delta.
	pub damping: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			hover_accel: 0.005,
			cursor_radius: 90.0,
			cursor_strength: 0.8,
			peer_radius: 20.0,
			peer_strength: 0.02,
			damping: 0.97,
		}
	}
}

/// Ranges used when a particle is (re)initialized.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
	/// Initial velocity per axis is drawn from `[-drift / 2, drift / 2)`.
	pub drift: f64,
	/// Lower bound of the hover phase speed.
	pub hover_speed_min: f64,
	/// Upper bound (exclusive) of the hover phase speed.
	pub hover_speed_max: f64,
}

impl Default for SpawnConfig {
	fn default() -> Self {
		Self {
			drift: 0.15,
			hover_speed_min: 0.002,
			hover_speed_max: 0.006,
		}
	}
}

/// Viewport-proportional population sizing.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
	/// Side length of the square area `density` refers to.
	pub block_size: f64,
	/// Particles per `block_size × block_size` block.
	pub density: f64,
	/// Most particles added or removed by a single sync.
	pub max_step: usize,
}

impl Default for PopulationConfig {
	fn default() -> Self {
		Self {
			block_size: 100.0,
			density: 4.0,
			max_step: 64,
		}
	}
}

/// How particles look on the canvas.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
	/// Disc radius.
	pub radius: f64,
	/// Global alpha used while drawing a particle.
	pub opacity: f64,
	/// CSS custom property holding the theme's foreground color.
	pub color_variable: String,
	/// Color used when the custom property is missing or blank.
	pub fallback_color: String,
}

impl Default for AppearanceConfig {
	fn default() -> Self {
		Self {
			radius: 1.5,
			opacity: 0.2,
			color_variable: "--text".to_string(),
			fallback_color: "#111111".to_string(),
		}
	}
}

/// Complete particle field configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Frame rate at which `delta == 1.0`.
	pub frame_rate: f64,
	pub motion: MotionConfig,
	pub spawn: SpawnConfig,
	pub population: PopulationConfig,
	/// Disc size, opacity and theme color lookup.
	pub appearance: AppearanceConfig,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			frame_rate: 60.0,
			motion: MotionConfig::default(),
			spawn: SpawnConfig::default(),
			population: PopulationConfig::default(),
			appearance: AppearanceConfig::default(),
		}
	}
}

impl ParticleConfig {
	/// Milliseconds in one frame at `frame_rate`.
	pub fn frame_ms(&self) -> f64 {
		1000.0 / self.frame_rate
	}
}
