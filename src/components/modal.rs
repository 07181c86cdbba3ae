//! Message and photo modals.
//!
//! Only one modal is open at a time. Clicking the dimmed backdrop closes it;
//! clicks inside the dialog do not.

use leptos::prelude::*;

use crate::content::Message;

/// Which modal is open, and what it shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
	#[default]
	Closed,
	Message {
		message: Message,
		signature: Option<String>,
	},
	Photo {
		src: String,
	},
}

impl ModalState {
	pub fn message(message: Message) -> Self {
		ModalState::Message {
			message,
			signature: None,
		}
	}

	pub fn signed(message: Message, signature: String) -> Self {
		ModalState::Message {
			message,
			signature: Some(signature),
		}
	}

	pub fn photo(src: impl Into<String>) -> Self {
		ModalState::Photo { src: src.into() }
	}
}

/// Renders whichever modal `state` describes.
#[component]
pub fn Modals(state: RwSignal<ModalState>) -> impl IntoView {
	let close = move |_: leptos::ev::MouseEvent| state.set(ModalState::Closed);
	let keep_open = |ev: leptos::ev::MouseEvent| ev.stop_propagation();

	move || match state.get() {
		ModalState::Closed => ().into_any(),
		ModalState::Message { message, signature } => view! {
			<div id="modal" class="modal" style="display: flex;" on:click=close>
				<div class="modal-content" on:click=keep_open>
					<span class="close" on:click=close>"×"</span>
					<h2 id="modalTitle">{message.title}</h2>
					<p id="modalText">{message.text}</p>
					{signature.map(|s| view! { <p id="modalSignature" class="signature">{s}</p> })}
				</div>
			</div>
		}
		.into_any(),
		ModalState::Photo { src } => view! {
			<div id="photoModal" class="modal photo-modal" style="display: flex;" on:click=close>
				<div class="modal-content" on:click=keep_open>
					<span class="close" on:click=close>"×"</span>
					<img id="modalImage" src=src alt="" />
				</div>
			</div>
		}
		.into_any(),
	}
}
