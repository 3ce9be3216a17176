//! Collapsible navigation with a burger button.
//!
//! On narrow screens the nav list slides in over the page. While it is open
//! `<body>` carries `menu-open` (so the page can lock scrolling), and a click
//! on a link or anywhere outside the menu closes it again.

use leptos::prelude::*;
use web_sys::MouseEvent;

/// A single navigation entry.
#[derive(Clone, Debug)]
pub struct NavLink {
	pub label: String,
	pub href: String,
}

impl NavLink {
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
		}
	}
}

/// Burger button plus the navigation list it opens.
#[component]
pub fn NavMenu(links: Vec<NavLink>) -> impl IntoView {
	let (open, set_open) = signal(false);

	Effect::new(move |_| {
		let is_open = open.get();
		if let Some(body) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body())
		{
			let _ = body.class_list().toggle_with_force("menu-open", is_open);
		}
	});

	let toggle = move |_: MouseEvent| set_open.update(|o| *o = !*o);
	let close = move |_: MouseEvent| set_open.set(false);

	let items = links
		.into_iter()
		.map(|link| {
			view! {
				<li>
					<a href=link.href on:click=close>
						{link.label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<button
			id="burgerMenu"
			class="burger"
			class:active=move || open.get()
			type="button"
			aria-label="Menu"
			aria-expanded=move || open.get().to_string()
			on:click=toggle
		>
			<span></span>
			<span></span>
			<span></span>
		</button>
		<div class="menu-overlay" class:active=move || open.get() on:click=close></div>
		<nav id="navMenu" class="nav" class:active=move || open.get()>
			<ul>{items}</ul>
		</nav>
	}
}
