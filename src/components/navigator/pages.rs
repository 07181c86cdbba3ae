//! Content of each card page.

use leptos::prelude::*;

use super::component::NavigatorHandle;
use super::state::PageId;
use crate::components::countdown::CountdownDisplay;
use crate::components::modal::ModalState;
use crate::components::timeline::Timeline;
use crate::content::CardContent;
use crate::context::CardContext;

#[component]
pub fn PageBody(page: PageId, nav: NavigatorHandle) -> impl IntoView {
	let content = expect_context::<CardContent>();
	let modal = CardContext::expect().modal;

	match page {
		PageId::Hero => view! {
			<div class="hero">
				<h1 class="hero-title">{content.title}</h1>
				<p class="hero-subtitle">{content.subtitle}</p>
				<button class="cta-button" on:click=move |_| nav.go_to(PageId::Messages)>
					"Open 💌"
				</button>
			</div>
		}
		.into_any(),
		PageId::Messages => view! {
			<div class="messages">
				<h2 class="section-title">"A Few Words"</h2>
				<div class="message-cards">
					{content
						.messages
						.into_iter()
						.map(|message| {
							let title = message.title.clone();
							view! {
								<div
									class="message-card"
									on:click=move |_| modal.set(ModalState::message(message.clone()))
								>
									<h3>{title}</h3>
									<span class="read-more">"Tap to read"</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		}
		.into_any(),
		PageId::Memories => view! {
			<div class="memories">
				<h2 class="section-title">"Our Memories"</h2>
				<Timeline memories=content.memories />
			</div>
		}
		.into_any(),
		PageId::Gallery => view! {
			<div class="gallery">
				<h2 class="section-title">"Gallery"</h2>
				<div class="gallery-grid">
					{content
						.photos
						.into_iter()
						.map(|photo| {
							let src = photo.src.clone();
							view! {
								<figure
									class="gallery-item"
									on:click=move |_| modal.set(ModalState::photo(src.clone()))
								>
									<img src=photo.src alt=photo.caption.clone() loading="lazy" />
									<figcaption>{photo.caption}</figcaption>
								</figure>
							}
						})
						.collect_view()}
				</div>
			</div>
		}
		.into_any(),
		PageId::Final => {
			let (message, signature) = (content.final_message, content.signature);
			view! {
				<div class="final">
					<h2 class="section-title">"Until Valentine's"</h2>
					<CountdownDisplay target=content.countdown_target />
					<button
						class="cta-button"
						on:click=move |_| {
							modal.set(ModalState::signed(message.clone(), signature.clone()))
						}
					>
						"One Last Thing 💝"
					</button>
				</div>
			}
			.into_any()
		}
	}
}
