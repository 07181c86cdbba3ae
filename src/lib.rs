//! valentine-card: an animated single-page greeting card.
//!
//! This crate provides a WASM-based card with a drifting particle background,
//! floating hearts, paged slides with directional transitions, a background
//! music player, message and photo modals, a reveal-on-scroll timeline and a
//! countdown to a fixed date.

// Pulled in for its `js` feature so `rand` can seed from the browser.
use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;
pub mod content;
pub mod context;

use components::hearts::FloatingHearts;
use components::loader::Loader;
use components::modal::Modals;
use components::navigator::PageDeck;
use components::particle_field::ParticleCanvas;
use components::player::MusicPlayer;
pub use content::{CardContent, ContentError};
pub use context::CardContext;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("valentine-card: logging initialized");
}

/// Load card content from the hosting page, falling back to the built-in card.
fn load_content() -> CardContent {
	match CardContent::from_document() {
		Ok(content) => {
			info!(
				"valentine-card: loaded {} messages, {} photos, {} memories",
				content.messages.len(),
				content.photos.len(),
				content.memories.len()
			);
			content
		}
		Err(ContentError::MissingElement(_)) => CardContent::default(),
		Err(e) => {
			warn!("valentine-card: using built-in content: {}", e);
			CardContent::default()
		}
	}
}

/// Main application component.
/// Loads content from the DOM and renders the card.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_content();
	let audio_src = content.audio_src.clone();
	let title = content.title.clone();
	provide_context(content);

	let card = CardContext::new();
	provide_context(card);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Loader>
			<div class="loader-heart">"💖"</div>
		</Loader>
		<ParticleCanvas />
		<FloatingHearts />
		<main class="card">
			<PageDeck />
		</main>
		<MusicPlayer src=audio_src />
		<Modals state=card.modal />
	}
}
