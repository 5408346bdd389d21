//! One-shot scroll fade-ins driven by an `IntersectionObserver`.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of an element that must be visible before it fades in.
const THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements start animating slightly before
/// they reach the fold.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observe every `.fade-in` element and add the `visible` class the first
/// time it scrolls into view. Each element animates once and is then
/// unobserved.
pub fn observe_fade_ins() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};

	let callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
		Closure::new(|entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let target = entry.target();
					let _ = target.class_list().add_1("visible");
					observer.unobserve(&target);
				}
			}
		});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	options.set_root_margin(ROOT_MARGIN);

	let observer =
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => observer,
			Err(_) => {
				warn!("particle-backdrop: IntersectionObserver unavailable, fade-ins disabled");
				return;
			}
		};

	let Ok(elements) = document.query_selector_all(".fade-in") else {
		return;
	};
	for i in 0..elements.length() {
		if let Some(element) = elements.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&element);
		}
	}

	// The observer and its callback live for the rest of the page.
	callback.forget();
}
