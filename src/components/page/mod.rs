//! Cosmetic page components: typing headline, navigation menu, theme toggle,
//! and scroll-triggered fade-ins.
//!
//! Nothing here touches the simulation directly; the theme toggle feeds back
//! into the backdrop only through the shared theme signal.

mod fade;
mod nav;
mod typing;

pub use fade::observe_fade_ins;
pub use nav::{NavMenu, ThemeToggle};
pub use typing::TypingHeadline;
