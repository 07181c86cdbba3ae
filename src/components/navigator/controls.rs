//! Placement of the "next" control relative to the music player panel.

use std::time::Duration;

/// Delay before the offset is recomputed after controls change, letting
/// layout settle first.
pub const SETTLE: Duration = Duration::from_millis(100);
/// Delay before the first offset computation after mount.
pub const INITIAL: Duration = Duration::from_millis(500);

/// Viewport width above which the player panel sits beside the controls.
const WIDE_VIEWPORT: f64 = 1200.0;

/// Inline offsets applied to the visible "next" control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlOffset {
	pub right: f64,
	pub bottom: Option<f64>,
}

impl Default for ControlOffset {
	fn default() -> Self {
		Self {
			right: 40.0,
			bottom: None,
		}
	}
}

impl ControlOffset {
	pub fn to_style(self) -> String {
		match self.bottom {
			Some(bottom) => format!("right: {}px; bottom: {}px;", self.right, bottom),
			None => format!("right: {}px;", self.right),
		}
	}
}

/// Offset keeping the "next" control clear of the expanded player.
pub fn control_offset(viewport_width: f64, player_minimized: bool) -> ControlOffset {
	if viewport_width > WIDE_VIEWPORT {
		ControlOffset {
			right: if player_minimized { 40.0 } else { 380.0 },
			bottom: None,
		}
	} else {
		ControlOffset {
			right: 40.0,
			bottom: Some(140.0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wide_viewport_clears_expanded_player() {
		assert_eq!(control_offset(1440.0, false).right, 380.0);
		assert_eq!(control_offset(1440.0, true).right, 40.0);
		assert_eq!(control_offset(1440.0, false).bottom, None);
	}

	#[test]
	fn narrow_viewport_lifts_control() {
		for minimized in [false, true] {
			let offset = control_offset(1200.0, minimized);
			assert_eq!(offset, ControlOffset { right: 40.0, bottom: Some(140.0) });
		}
		assert_eq!(
			control_offset(375.0, false).to_style(),
			"right: 40px; bottom: 140px;"
		);
	}
}
