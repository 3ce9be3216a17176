//! Theme-aware particle color.
//!
//! The particles are drawn in the page's foreground color, read from a CSS
//! custom property on the document element. The page switches themes by
//! toggling a class on that element, so a `MutationObserver` filtered to the
//! `class` attribute tells us when to re-read it.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{MutationObserver, MutationObserverInit};

use super::config::AppearanceConfig;

/// Where the current theme's foreground color comes from.
pub trait ThemeSource {
	/// Raw value of the CSS custom property `variable`, if the host has one.
	fn foreground_color(&self, variable: &str) -> Option<String>;
}

/// Reads custom properties from the computed style of `<html>`.
pub struct DocumentTheme;

impl ThemeSource for DocumentTheme {
	fn foreground_color(&self, variable: &str) -> Option<String> {
		let window = web_sys::window()?;
		let root = window.document()?.document_element()?;
		let style = window.get_computed_style(&root).ok()??;
		style.get_property_value(variable).ok()
	}
}

/// The particle color currently in effect.
#[derive(Clone, Debug)]
pub struct ThemeColor {
	variable: String,
	fallback: String,
	current: String,
}

impl ThemeColor {
	/// Start out with the fallback color until the first refresh.
	pub fn new(appearance: &AppearanceConfig) -> Self {
		Self {
			variable: appearance.color_variable.clone(),
			fallback: appearance.fallback_color.clone(),
			current: appearance.fallback_color.clone(),
		}
	}

	/// Re-read the color from `source`. Returns whether it changed.
	pub fn refresh(&mut self, source: &impl ThemeSource) -> bool {
		let sampled = source
			.foreground_color(&self.variable)
			.map(|value| value.trim().to_string())
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| self.fallback.clone());

		if sampled == self.current {
			return false;
		}
		self.current = sampled;
		true
	}

	pub fn color(&self) -> &str {
		&self.current
	}
}

/// Calls back whenever the document element's `class` attribute changes.
///
/// The subscription lasts as long as this value; dropping it disconnects the
/// observer.
pub struct ThemeObserver {
	observer: MutationObserver,
	_callback: Closure<dyn FnMut()>,
}

impl ThemeObserver {
	/// Subscribe `on_change` to theme class changes. Returns `None` if the
	/// document is unavailable or the observer could not be attached.
	pub fn watch(on_change: impl FnMut() + 'static) -> Option<Self> {
		let root = web_sys::window()?.document()?.document_element()?;
		let callback = Closure::<dyn FnMut()>::new(on_change);

		let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
			Ok(observer) => observer,
			Err(e) => {
				warn!("ambient-particles: failed to create theme observer: {:?}", e);
				return None;
			}
		};

		let options = MutationObserverInit::new();
		options.set_attributes(true);
		options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));

		if let Err(e) = observer.observe_with_options(&root, &options) {
			warn!("ambient-particles: failed to observe theme changes: {:?}", e);
			return None;
		}

		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for ThemeObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Stub(Option<&'static str>);

	impl ThemeSource for Stub {
		fn foreground_color(&self, variable: &str) -> Option<String> {
			assert_eq!(variable, "--text");
			self.0.map(str::to_string)
		}
	}

	#[test]
	fn defaults_to_fallback() {
		let color = ThemeColor::new(&AppearanceConfig::default());
		assert_eq!(color.color(), "#111111");
	}

	#[test]
	fn reads_trimmed_value() {
		let mut color = ThemeColor::new(&AppearanceConfig::default());
		assert!(color.refresh(&Stub(Some(" #e8e8e8\n"))));
		assert_eq!(color.color(), "#e8e8e8");
		assert!(!color.refresh(&Stub(Some("#e8e8e8"))));
	}

	#[test]
	fn missing_or_blank_falls_back() {
		let mut color = ThemeColor::new(&AppearanceConfig::default());
		color.refresh(&Stub(Some("rgb(10, 10, 10)")));
		assert!(color.refresh(&Stub(Some("   "))));
		assert_eq!(color.color(), "#111111");

		color.refresh(&Stub(Some("white")));
		assert!(color.refresh(&Stub(None)));
		assert_eq!(color.color(), "#111111");
	}

	#[test]
	fn fallback_is_configurable() {
		let appearance = AppearanceConfig {
			fallback_color: "#333".to_string(),
			..AppearanceConfig::default()
		};
		let mut color = ThemeColor::new(&appearance);
		color.refresh(&Stub(None));
		assert_eq!(color.color(), "#333");
	}
}
