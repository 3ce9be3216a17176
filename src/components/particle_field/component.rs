//! Leptos component wrapping the particle background canvas.
//!
//! The component creates a fixed, full-viewport canvas and wires up window
//! resize and pointer-move listeners plus a theme observer. An animation loop
//! runs via `requestAnimationFrame`, stepping and drawing the simulation each
//! frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::ParticleConfig;
use super::state::{Simulation, Viewport};
use super::theme::{DocumentTheme, ThemeObserver};

fn window_viewport(window: &Window) -> Option<Viewport> {
	Some(Viewport {
		width: window.inner_width().ok()?.as_f64()?,
		height: window.inner_height().ok()?.as_f64()?,
	})
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Renders the drifting particle background.
///
/// The canvas covers the viewport behind the page content and ignores pointer
/// events; the pointer is tracked on the window instead so links and buttons
/// above it keep working.
#[component]
pub fn ParticleField(#[prop(optional)] config: ParticleConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let simulation: Rc<RefCell<Option<Simulation>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let theme_observer: Rc<RefCell<Option<ThemeObserver>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if simulation.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("ambient-particles: no window, particles disabled");
			return;
		};
		let Some(viewport) = window_viewport(&window) else {
			warn!("ambient-particles: viewport size unavailable, particles disabled");
			return;
		};
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);

		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("ambient-particles: canvas has no 2d context, particles disabled");
			return;
		};

		let now = window.performance().map(|p| p.now()).unwrap_or_default();
		let mut sim = Simulation::new(config.clone(), viewport, now, random_seed());
		sim.refresh_color(&DocumentTheme);
		*simulation.borrow_mut() = Some(sim);

		let sim_theme = simulation.clone();
		let observer = ThemeObserver::watch(move || {
			if let Some(ref mut s) = *sim_theme.borrow_mut() {
				s.refresh_color(&DocumentTheme);
			}
		});
		if observer.is_none() {
			warn!("ambient-particles: theme changes will not update particle color");
		}
		*theme_observer.borrow_mut() = observer;

		let (sim_resize, canvas_resize) = (simulation.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(viewport) = web_sys::window().and_then(|w| window_viewport(&w)) else {
				return;
			};
			canvas_resize.set_width(viewport.width as u32);
			canvas_resize.set_height(viewport.height as u32);
			if let Some(ref mut s) = *sim_resize.borrow_mut() {
				s.resize(viewport.width, viewport.height);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let sim_pointer = simulation.clone();
		*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut s) = *sim_pointer.borrow_mut() {
				s.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *pointer_cb.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (sim_anim, animate_inner) = (simulation.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move |now: f64| {
			if let Some(ref mut s) = *sim_anim.borrow_mut() {
				s.tick(now, &mut ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(window) = web_sys::window() {
					let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="bg-canvas"
			class="particle-field"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}
