//! particle-backdrop: ambient interactive particle field for the portfolio page.
//!
//! This crate renders the animated canvas background behind the page content:
//! drifting particles that link up with translucent lines when close together
//! and scatter away from the pointer. It also carries the page's cosmetic
//! interactions (typing headline, scroll fade-ins, mobile menu, dark/light
//! toggle), which feed back into the core only by re-seeding the field.

// Direct dependency only to enable its `js` feature for wasm builds of `rand`.
use getrandom as _;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod types;

pub use components::particle_field::{ParticleFieldCanvas, Theme, ThemeKind};
pub use types::{NavLink, PageData};

use components::page::{NavMenu, TypingHeadline, observe_fade_ins};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Load page content from a script element with id="page-data".
/// Expected format: JSON with { headline: "...", nav: [{ label, href }] }
fn load_page_data() -> Option<PageData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("page-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PageData>(&json_text) {
		Ok(data) => {
			info!(
				"particle-backdrop: loaded page data, {} nav links",
				data.nav.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("particle-backdrop: failed to parse page data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the backdrop canvas behind the page content and wires the cosmetic
/// page interactions around it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PageData { headline, nav } = load_page_data().unwrap_or_default();
	let theme = RwSignal::new(ThemeKind::Dark);

	// Observe fade-in sections once the page content exists.
	Effect::new(move |_| {
		observe_fade_ins();
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme.get().name() />
		<Title text="Developer Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas theme=theme />
		<NavMenu links=nav theme=theme />
		<header class="hero fade-in">
			<TypingHeadline text=headline />
		</header>
	}
}
