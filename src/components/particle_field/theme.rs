//! Visual theming for the particle backdrop.
//!
//! Provides the dark/light theme presets, the accent color the particles and
//! connection lines are drawn with, and CSS color parsing so a `--accent`
//! custom property on the page can override the built-in accents.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
	pub fn parse(color_str: &str) -> Option<Color> {
		let color_str = color_str.trim();
		if color_str.starts_with('#') && color_str.len() == 7 {
			let r = u8::from_str_radix(&color_str[1..3], 16).ok()?;
			let g = u8::from_str_radix(&color_str[3..5], 16).ok()?;
			let b = u8::from_str_radix(&color_str[5..7], 16).ok()?;
			Some(Color::rgb(r, g, b))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums.first().and_then(|s| s.trim().parse().ok())?;
			let g = nums.get(1).and_then(|s| s.trim().parse().ok())?;
			let b = nums.get(2).and_then(|s| s.trim().parse().ok())?;
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Some(Color::rgba(r, g, b, a))
		} else {
			None
		}
	}
}

/// Particle field tuning. Values are shared by both themes; only the accent
/// color differs between modes.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Surface area (px²) covered by each particle; the field holds
	/// `floor(width * height / density_divisor)` particles.
	pub density_divisor: f64,
	/// Particle radius range lower bound (inclusive).
	pub size_min: f64,
	/// Particle radius range upper bound (exclusive).
	pub size_max: f64,
	/// Per-axis velocity is sampled uniformly from `[-max_speed, max_speed)`.
	pub max_speed: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			density_divisor: 9000.0,
			size_min: 1.0,
			size_max: 5.0,
			max_speed: 1.0,
		}
	}
}

/// Connection line styling.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
	/// Maximum distance at which two particles are linked.
	pub distance: f64,
	/// Stroke width of the link lines.
	pub line_width: f64,
}

impl Default for ConnectionStyle {
	fn default() -> Self {
		Self {
			distance: 120.0,
			line_width: 1.0,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	/// Color used for particle fills (bound at creation) and connection
	/// strokes (read live each frame).
	pub accent: Color,
	pub field: FieldStyle,
	pub connection: ConnectionStyle,
}

impl Theme {
	/// Dark mode (default): teal accent over the dark page background.
	pub fn dark() -> Self {
		Self {
			name: "dark",
			accent: Color::rgb(100, 255, 218),
			field: FieldStyle::default(),
			connection: ConnectionStyle::default(),
		}
	}

	/// Light mode: deep blue accent for contrast on light surfaces.
	pub fn light() -> Self {
		Self {
			name: "light",
			accent: Color::rgb(25, 118, 210),
			field: FieldStyle::default(),
			connection: ConnectionStyle::default(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

/// The two page modes the theme toggle switches between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeKind {
	/// Dark page background, teal accent.
	#[default]
	Dark,
	/// Light page background, blue accent.
	Light,
}

impl ThemeKind {
	/// Full theme for this mode.
	pub fn theme(self) -> Theme {
		match self {
			Self::Dark => Theme::dark(),
			Self::Light => Theme::light(),
		}
	}

	/// Attribute value for `data-theme` on the document element.
	pub fn name(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}

	/// Glyph shown on the toggle button while this mode is active.
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Dark => "🌙",
			Self::Light => "☀",
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}
}

/// Resolve the live accent color: the `--accent` CSS custom property when the
/// page defines one, falling back to the theme's built-in accent.
pub fn resolve_accent(theme: &Theme) -> Color {
	css_accent().unwrap_or(theme.accent)
}

fn css_accent() -> Option<Color> {
	let window = web_sys::window()?;
	let root = window.document()?.document_element()?;
	let style = window.get_computed_style(&root).ok()??;
	let value = style.get_property_value("--accent").ok()?;
	Color::parse(&value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex() {
		assert_eq!(Color::parse("#1976d2"), Some(Color::rgb(25, 118, 210)));
		assert_eq!(Color::parse(" #64ffda "), Some(Color::rgb(100, 255, 218)));
	}

	#[test]
	fn parses_functional_notation() {
		assert_eq!(
			Color::parse("rgb(100, 255, 218)"),
			Some(Color::rgb(100, 255, 218))
		);
		assert_eq!(
			Color::parse("rgba(10, 20, 30, 0.5)"),
			Some(Color::rgba(10, 20, 30, 0.5))
		);
	}

	#[test]
	fn rejects_unknown_forms() {
		assert_eq!(Color::parse(""), None);
		assert_eq!(Color::parse("#abc"), None);
		assert_eq!(Color::parse("tomato"), None);
		assert_eq!(Color::parse("#zzzzzz"), None);
	}

	#[test]
	fn css_round_trip() {
		assert_eq!(Color::rgb(25, 118, 210).to_css(), "#1976d2");
		assert_eq!(
			Color::rgba(10, 20, 30, 0.5).to_css(),
			"rgba(10, 20, 30, 0.5)"
		);
	}

	#[test]
	fn theme_accents_differ_between_modes() {
		assert_ne!(Theme::dark().accent, Theme::light().accent);
		assert_eq!(ThemeKind::default(), ThemeKind::Dark);
		assert_eq!(ThemeKind::Dark.toggled(), ThemeKind::Light);
		assert_eq!(ThemeKind::Light.toggled(), ThemeKind::Dark);
	}
}
