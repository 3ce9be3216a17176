//! Dark/light theme switch persisted in local storage.
//!
//! The theme is a `dark` class on `<html>`; stylesheets key the `--text`
//! variable (and everything else) off it. Flipping the class is also what
//! notifies the particle field to re-read its color.

use leptos::prelude::*;
use log::debug;
use web_sys::{Element, MouseEvent, Storage};

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

fn root_element() -> Option<Element> {
	web_sys::window()?.document()?.document_element()
}

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok()?
}

/// Storage value for a theme.
fn theme_name(dark: bool) -> &'static str {
	if dark { "dark" } else { "light" }
}

/// Whether a stored value selects the dark theme. Anything else means light.
fn prefers_dark(stored: Option<&str>) -> bool {
	stored == Some("dark")
}

/// Apply the theme saved by a previous visit.
pub fn restore_theme() {
	let stored = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	if prefers_dark(stored.as_deref()) {
		if let Some(root) = root_element() {
			let _ = root.class_list().add_1(DARK_CLASS);
		}
	}
}

/// Flip between dark and light and remember the choice.
/// Returns whether the dark theme is now active.
pub fn toggle_theme() -> Option<bool> {
	let dark = root_element()?.class_list().toggle(DARK_CLASS).ok()?;
	if let Some(storage) = local_storage() {
		let _ = storage.set_item(STORAGE_KEY, theme_name(dark));
	}
	debug!("ambient-particles: theme {}", theme_name(dark));
	Some(dark)
}

/// Button switching the page theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	restore_theme();

	let on_click = move |_: MouseEvent| {
		toggle_theme();
	};

	view! {
		<button
			id="themeToggle"
			class="theme-toggle"
			type="button"
			aria-label="Toggle dark mode"
			on:click=on_click
		>
			<span class="theme-toggle-icon" aria-hidden="true"></span>
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_dark_restores_dark() {
		assert!(prefers_dark(Some("dark")));
		assert!(!prefers_dark(Some("light")));
		assert!(!prefers_dark(Some("Dark")));
		assert!(!prefers_dark(None));
	}

	#[test]
	fn stored_names_round_trip() {
		assert!(prefers_dark(Some(theme_name(true))));
		assert!(!prefers_dark(Some(theme_name(false))));
	}
}
