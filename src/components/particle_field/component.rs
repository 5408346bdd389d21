//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component creates a full-viewport canvas and wires up window-level
//! mouse and resize event handlers. An animation loop runs via
//! `requestAnimationFrame`, advancing the simulation and redrawing each
//! frame; resizes and theme changes re-seed the field.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::BackdropState;
use super::theme::{self, Theme, ThemeKind};

/// Bundles the simulation state with the active theme.
struct BackdropContext {
	state: BackdropState,
	theme: Theme,
}

/// Renders the ambient particle backdrop on a full-viewport canvas.
///
/// Pass the active mode via the reactive `theme` signal. The field re-seeds
/// itself whenever the window resizes or the signal changes, so particle
/// fills always match the accent that was live when they were created. The
/// animation loop has no stop state; it runs for the page's lifetime.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] theme: Signal<ThemeKind>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BackdropContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_move_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let pointer_out_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());
	let (pointer_move_init, pointer_out_init) = (pointer_move_cb.clone(), pointer_out_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let initial = theme.get_untracked().theme();
		let accent = theme::resolve_accent(&initial);
		*context_init.borrow_mut() = Some(BackdropContext {
			state: BackdropState::new(&mut rand::thread_rng(), w, h, &initial, accent),
			theme: initial,
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				let accent = theme::resolve_accent(&c.theme);
				c.state.resize(&mut rand::thread_rng(), nw, nh, &c.theme, accent);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// Pointer listeners go on the window: the canvas sits behind the page
		// content and would never receive the events itself. The canvas is
		// fixed at the viewport origin, so client coordinates are canvas
		// coordinates.
		let context_move = context_init.clone();
		*pointer_move_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_move.borrow_mut() {
				c.state
					.pointer
					.set_position(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *pointer_move_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let context_out = context_init.clone();
		*pointer_out_init.borrow_mut() = Some(Closure::new(move |_: MouseEvent| {
			if let Some(ref mut c) = *context_out.borrow_mut() {
				c.state.pointer.clear();
			}
		}));
		if let Some(ref cb) = *pointer_out_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mouseout", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick();
				// Accent is re-resolved every frame so connection strokes
				// track the live theme; particle fills keep their
				// creation-time color until the next reseed.
				let accent = theme::resolve_accent(&c.theme);
				render::render(&c.state, &ctx, &c.theme.connection, accent);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Theme switch: swap the palette and reseed with the new accent.
	let context_theme = context.clone();
	Effect::new(move |_| {
		let next = theme.get().theme();
		if let Some(ref mut c) = *context_theme.borrow_mut() {
			if c.theme.name != next.name {
				let accent = theme::resolve_accent(&next);
				c.theme = next;
				c.state.reseed(&mut rand::thread_rng(), &c.theme, accent);
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="backdrop-canvas"
			style="display: block; position: fixed; inset: 0; z-index: -1;"
		/>
	}
}
