//! Shared card state handed to components through Leptos context.

use leptos::prelude::*;
use log::debug;

use crate::components::modal::ModalState;
use crate::components::navigator::{ControlOffset, Navigator, control_offset};
use crate::components::player::PlayerState;
use crate::components::viewport_size;

/// Bundles the navigator, player and modal state with the audio element.
///
/// Created once by [`crate::App`] and provided as context; handlers reach
/// state only through this value.
#[derive(Clone, Copy)]
pub struct CardContext {
	pub navigator: RwSignal<Navigator>,
	pub player: RwSignal<PlayerState>,
	pub modal: RwSignal<ModalState>,
	pub control_offset: RwSignal<ControlOffset>,
	pub audio: NodeRef<leptos::html::Audio>,
}

impl CardContext {
	pub fn new() -> Self {
		Self {
			navigator: RwSignal::new(Navigator::new()),
			player: RwSignal::new(PlayerState::new()),
			modal: RwSignal::new(ModalState::Closed),
			control_offset: RwSignal::new(ControlOffset::default()),
			audio: NodeRef::new(),
		}
	}

	/// Context provided by [`crate::App`].
	pub fn expect() -> Self {
		expect_context::<Self>()
	}

	/// Recompute where the "next" control sits for the current viewport and
	/// player panel state.
	pub fn refresh_control_offset(self) {
		let Some((width, _)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		let minimized = self.player.with_untracked(|p| p.minimized);
		let offset = control_offset(width, minimized);
		debug!("valentine-card: control offset {offset:?}");
		self.control_offset.set(offset);
	}
}

impl Default for CardContext {
	fn default() -> Self {
		Self::new()
	}
}
