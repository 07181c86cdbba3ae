//! Leptos wiring for the page navigator.
//!
//! [`NavigatorHandle`] turns [`Navigator`] transitions into timers: the exit
//! half runs immediately, the enter half after [`EXIT`], and the enter markers
//! are dropped after a further [`ENTER`]. [`PageDeck`] renders every page with
//! classes and controls derived from navigator state.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::debug;

use super::controls::{INITIAL, SETTLE};
use super::pages::PageBody;
use super::state::{ControlVisibility, ENTER, EXIT, PageId};
use crate::components::player::start_playback;
use crate::context::CardContext;

/// Drives page changes against the shared card state.
#[derive(Clone, Copy)]
pub struct NavigatorHandle {
	card: CardContext,
}

impl NavigatorHandle {
	pub fn new(card: CardContext) -> Self {
		Self { card }
	}

	/// Move to `target`. Requests for the current page are ignored.
	pub fn go_to(self, target: PageId) {
		let card = self.card;
		let playing = card.player.with_untracked(|p| p.playing);
		let Some(transition) = card
			.navigator
			.try_update(|n| n.request_page_change(target, playing))
			.flatten()
		else {
			return;
		};
		debug!(
			"valentine-card: {} -> {} ({:?}, generation {})",
			transition.from, transition.to, transition.direction, transition.generation
		);

		if transition.start_audio {
			start_playback(card);
		}

		let generation = transition.generation;
		set_timeout(
			move || {
				let Some(page) = card
					.navigator
					.try_update(|n| n.finish_exit(generation))
					.flatten()
				else {
					return;
				};
				scroll_to_top(page);
				self.apply_controls(page);
				set_timeout(
					move || card.navigator.update(|n| n.finish_enter(generation)),
					ENTER,
				);
			},
			EXIT,
		);
	}

	/// Show `page`'s controls, hide every other page's, and schedule the
	/// "next" control to be repositioned once layout settles.
	pub fn apply_controls(self, page: PageId) -> ControlVisibility {
		let card = self.card;
		let shown = card
			.navigator
			.try_update(|n| n.apply_controls(page))
			.unwrap_or_default();
		set_timeout(move || card.refresh_control_offset(), SETTLE);
		shown
	}
}

fn scroll_to_top(page: PageId) {
	if let Some(el) = document().get_element_by_id(&page.element_id()) {
		el.set_scroll_top(0);
	}
}

/// Renders every page of the card; only the navigator's current page is shown.
#[component]
pub fn PageDeck() -> impl IntoView {
	let card = CardContext::expect();
	let nav = NavigatorHandle::new(card);

	nav.apply_controls(PageId::Hero);
	set_timeout(move || card.refresh_control_offset(), INITIAL);
	let _ = window_event_listener(leptos::ev::resize, move |_| card.refresh_control_offset());

	PageId::ALL
		.into_iter()
		.map(|page| view! { <PageSection page=page nav=nav /> })
		.collect_view()
}

#[component]
fn PageSection(page: PageId, nav: NavigatorHandle) -> impl IntoView {
	let card = CardContext::expect();
	let navigator = card.navigator;
	let phase = move || navigator.with(|n| n.phase(page));
	let controls = move || navigator.with(|n| n.controls(page));

	let go_prev = move |_: MouseEvent| {
		if let Some(prev) = page.prev() {
			nav.go_to(prev);
		}
	};
	let go_next = move |_: MouseEvent| {
		if let Some(next) = page.next() {
			nav.go_to(next);
		}
	};

	view! {
		<section
			id=page.element_id()
			class=move || phase().class()
			style:display=move || if phase().is_displayed() { "block" } else { "none" }
		>
			<PageBody page=page nav=nav />
			<button
				class="nav-button prev"
				class:hidden=move || !controls().prev
				on:click=go_prev
			>
				"‹ Back"
			</button>
			<button
				class="nav-button next"
				class:hidden=move || !controls().next
				style=move || {
					if controls().next { card.control_offset.get().to_style() } else { String::new() }
				}
				on:click=go_next
			>
				"Next ›"
			</button>
		</section>
	}
}
