//! Site navigation: the mobile menu toggle and the theme switch.

use leptos::prelude::*;

use crate::components::particle_field::ThemeKind;
use crate::types::NavLink;

const MENU_OPEN_GLYPH: &str = "✕";
const MENU_CLOSED_GLYPH: &str = "☰";

/// Collapsible navigation menu. On small screens the hamburger button shows
/// and hides the link list; choosing a link closes it again.
#[component]
pub fn NavMenu(links: Vec<NavLink>, theme: RwSignal<ThemeKind>) -> impl IntoView {
	let (open, set_open) = signal(false);

	view! {
		<nav class="site-nav">
			<button class="menu-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
				{move || if open.get() { MENU_OPEN_GLYPH } else { MENU_CLOSED_GLYPH }}
			</button>
			<ul class="nav-menu" class:active=move || open.get()>
				{links
					.into_iter()
					.map(|link| {
						view! {
							<li>
								<a href=link.href on:click=move |_| set_open.set(false)>
									{link.label}
								</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
			<ThemeToggle theme=theme />
		</nav>
	}
}

/// Dark/light mode switch. Toggling swaps the page accent, which re-seeds
/// the particle backdrop with the new color.
#[component]
pub fn ThemeToggle(theme: RwSignal<ThemeKind>) -> impl IntoView {
	view! {
		<button class="theme-toggle" on:click=move |_| theme.update(|t| *t = t.toggled())>
			{move || theme.get().glyph()}
		</button>
	}
}
