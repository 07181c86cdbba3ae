//! Card components.

use web_sys::Window;

pub mod countdown;
pub mod hearts;
pub mod loader;
pub mod modal;
pub mod navigator;
pub mod particle_field;
pub mod player;
pub mod timeline;

/// Current viewport size in CSS pixels.
pub(crate) fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}
