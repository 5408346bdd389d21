//! Page content data structures for input to the app shell.

use serde::Deserialize;

/// A single entry in the navigation menu.
#[derive(Clone, Debug, Deserialize)]
pub struct NavLink {
	/// Visible link text.
	pub label: String,
	/// Target URL or fragment (e.g., "#projects").
	pub href: String,
}

/// Page content: the typed headline plus navigation entries.
///
/// Deserialized from the `page-data` script tag; any missing field falls
/// back to the built-in defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PageData {
	/// Headline typed out character by character in the hero section.
	pub headline: String,
	/// Navigation menu entries.
	pub nav: Vec<NavLink>,
}

impl Default for PageData {
	fn default() -> Self {
		Self {
			headline: "Welcome to My Developer Portfolio".to_string(),
			nav: vec![
				NavLink {
					label: "About".to_string(),
					href: "#about".to_string(),
				},
				NavLink {
					label: "Projects".to_string(),
					href: "#projects".to_string(),
				},
				NavLink {
					label: "Contact".to_string(),
					href: "#contact".to_string(),
				},
			],
		}
	}
}
