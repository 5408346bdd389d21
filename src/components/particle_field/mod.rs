//! Ambient particle backdrop component.
//!
//! Renders an animated particle field on an HTML canvas with:
//! - Straight-line particle motion with edge reflection
//! - Pointer-driven repulsion within a fixed radius
//! - Translucent connection lines between nearby particles
//! - Dark/light theming; theme and resize events re-seed the field
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::{ParticleFieldCanvas, ThemeKind};
//!
//! let theme = RwSignal::new(ThemeKind::Dark);
//!
//! view! { <ParticleFieldCanvas theme=theme /> }
//! ```

mod component;
mod particles;
mod render;
mod state;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use theme::{Theme, ThemeKind};
