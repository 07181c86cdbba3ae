//! Music player panel bound to the card's `<audio>` element.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use super::state::{format_time, seek_position};
use crate::context::CardContext;

/// Ask the audio element to play, marking the player as playing once it does.
///
/// Browsers may refuse playback that was not started by a user gesture; the
/// refusal is logged and otherwise ignored.
pub fn start_playback(card: CardContext) {
	let Some(audio) = card.audio.get_untracked() else {
		return;
	};
	let promise = match audio.play() {
		Ok(promise) => promise,
		Err(e) => {
			info!("valentine-card: playback refused: {e:?}");
			return;
		}
	};
	spawn_local(async move {
		match JsFuture::from(promise).await {
			Ok(_) => card.player.update(|p| p.playing = true),
			Err(e) => info!("valentine-card: autoplay blocked: {e:?}"),
		}
	});
}

fn audio(card: CardContext) -> Option<HtmlAudioElement> {
	card.audio.get_untracked()
}

/// Playback controls, volume slider and seekable progress bar.
#[component]
pub fn MusicPlayer(#[prop(into)] src: String) -> impl IntoView {
	let card = CardContext::expect();
	let player = card.player;

	let toggle_play = move |_: MouseEvent| {
		if player.with_untracked(|p| p.playing) {
			if let Some(a) = audio(card) {
				let _ = a.pause();
			}
			player.update(|p| p.playing = false);
		} else {
			start_playback(card);
		}
	};

	let toggle_panel = move |_: MouseEvent| {
		player.update(|p| p.minimized = !p.minimized);
		card.refresh_control_offset();
	};

	let rewind = move |_: MouseEvent| {
		if let Some(a) = audio(card) {
			a.set_current_time(0.0);
		}
	};

	let on_volume = move |ev| {
		let Ok(percent) = event_target_value(&ev).parse::<f64>() else {
			return;
		};
		let mut volume = 1.0;
		player.update(|p| volume = p.set_volume_percent(percent));
		if let Some(a) = audio(card) {
			a.set_volume(volume);
		}
	};

	let on_time_update = move |_| {
		if let Some(a) = audio(card) {
			player.update(|p| {
				p.current_time = a.current_time();
				p.duration = Some(a.duration()).filter(|d| d.is_finite());
			});
		}
	};

	let on_metadata = move |_| {
		if let Some(a) = audio(card) {
			debug!("valentine-card: track is {:.1}s long", a.duration());
			player.update(|p| p.duration = Some(a.duration()).filter(|d| d.is_finite()));
		}
	};

	let bar_ref = NodeRef::<leptos::html::Div>::new();
	let on_seek = move |ev: MouseEvent| {
		let Some(bar) = bar_ref.get_untracked() else {
			return;
		};
		let Some(a) = audio(card) else {
			return;
		};
		if let Some(pos) = seek_position(f64::from(ev.offset_x()), f64::from(bar.client_width()), a.duration()) {
			a.set_current_time(pos);
		}
	};

	view! {
		<audio node_ref=card.audio id="bgMusic" src=src preload="auto"
			on:timeupdate=on_time_update
			on:loadedmetadata=on_metadata
		/>
		<div id="musicPlayer" class="music-player" class:minimized=move || player.get().minimized>
			<button class="player-toggle" on:click=toggle_panel>"🎵"</button>
			<div class="player-body">
				<div class="player-controls">
					<button class="control-btn" on:click=rewind>"⏮"</button>
					<button id="playBtn" class="control-btn play" on:click=toggle_play>
						{move || player.get().play_label()}
					</button>
					<button class="control-btn" on:click=rewind>"⏭"</button>
				</div>
				<div class="progress-bar" node_ref=bar_ref on:click=on_seek>
					<div
						id="progressFill"
						class="progress-fill"
						style=move || {
							let pct = player.get().progress_percent().unwrap_or(0.0);
							format!("width: {pct}%;")
						}
					/>
				</div>
				<div class="time">
					<span id="currentTime">{move || format_time(player.get().current_time)}</span>
					<span id="duration">
						{move || format_time(player.get().duration.unwrap_or(f64::NAN))}
					</span>
				</div>
				<div class="volume">
					<input
						id="volumeSlider"
						type="range"
						min="0"
						max="100"
						prop:value=move || player.get().volume.to_string()
						on:input=on_volume
					/>
					<span id="volumeValue">{move || format!("{}%", player.get().volume)}</span>
				</div>
			</div>
		</div>
	}
}
