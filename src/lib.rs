//! ambient-particles: theme-aware drifting particle background for web pages.
//!
//! This crate provides a WASM-based canvas component that fills the page
//! background with faint particles reacting to the pointer, plus the small
//! header controls (theme toggle, burger menu) of the page hosting it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::nav_menu::{NavLink, NavMenu};
pub use components::particle_field::{ParticleConfig, ParticleField, Simulation, Viewport};
pub use components::theme_toggle::ThemeToggle;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ambient-particles: logging initialized");
}

/// Parse a particle configuration document, falling back to defaults.
pub fn parse_config(json_text: &str) -> ParticleConfig {
	match serde_json::from_str::<ParticleConfig>(json_text) {
		Ok(config) => {
			info!("ambient-particles: loaded particle config");
			config
		}
		Err(e) => {
			warn!("ambient-particles: failed to parse particle config: {}", e);
			ParticleConfig::default()
		}
	}
}

/// Load particle tuning from a script element with id="particle-config".
/// Expected format: JSON matching [`ParticleConfig`], any field may be omitted.
fn load_config() -> Option<ParticleConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	Some(parse_config(&json_text))
}

fn default_links() -> Vec<NavLink> {
	vec![
		NavLink::new("Home", "#home"),
		NavLink::new("About", "#about"),
		NavLink::new("Projects", "#projects"),
		NavLink::new("Contact", "#contact"),
	]
}

/// Main application component.
/// Mounts the particle background behind the page header controls.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Ambient Particles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleField config=config />
		<header class="site-header">
			<NavMenu links=default_links() />
			<ThemeToggle />
		</header>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_overrides_named_fields_only() {
		let config = parse_config(r#"{ "population": { "density": 2.0 }, "frame_rate": 30.0 }"#);
		assert_eq!(config.population.density, 2.0);
		assert_eq!(config.population.max_step, 64);
		assert_eq!(config.frame_rate, 30.0);
	}

	#[test]
	fn malformed_config_uses_defaults() {
		let config = parse_config("{ not json");
		assert_eq!(config.motion.cursor_radius, 90.0);
		assert_eq!(config.appearance.color_variable, "--text");
	}
}
