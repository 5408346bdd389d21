//! Character-by-character typing effect for the hero headline.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Milliseconds before the first character appears.
const START_DELAY_MS: i32 = 500;
/// Milliseconds between characters.
const CHAR_DELAY_MS: i32 = 100;

/// Types out `text` one character at a time after a short initial delay.
#[component]
pub fn TypingHeadline(text: String) -> impl IntoView {
	let (typed, set_typed) = signal(String::new());
	let chars: Rc<Vec<char>> = Rc::new(text.chars().collect());
	let index = Rc::new(Cell::new(0usize));
	let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let step_inner = step.clone();

	*step.borrow_mut() = Some(Closure::new(move || {
		let i = index.get();
		if let Some(&ch) = chars.get(i) {
			set_typed.update(|s| s.push(ch));
			index.set(i + 1);
			if index.get() < chars.len() {
				schedule(&step_inner, CHAR_DELAY_MS);
			}
		}
	}));
	schedule(&step, START_DELAY_MS);

	view! { <h1 class="typing">{move || typed.get()}</h1> }
}

fn schedule(step: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, delay_ms: i32) {
	if let Some(ref cb) = *step.borrow() {
		let _ = web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				delay_ms,
			);
	}
}
