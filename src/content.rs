//! Card content: messages, photos, timeline entries and the countdown target.
//!
//! Content can be supplied by the hosting page in a script element with
//! `id="card-data"` holding JSON. Any field left out falls back to the
//! built-in card.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Id of the script element carrying content JSON.
pub const CONTENT_ELEMENT_ID: &str = "card-data";

/// Reasons the hosted content could not be used.
#[derive(Debug, Error)]
pub enum ContentError {
	#[error("no element with id \"{0}\"")]
	MissingElement(&'static str),
	#[error("element \"{0}\" is not a script element")]
	NotAScript(&'static str),
	#[error("malformed content JSON: {0}")]
	Parse(#[from] serde_json::Error),
}

/// A titled block of text shown in the message modal.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Message {
	pub title: String,
	pub text: String,
}

/// A gallery photo.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Photo {
	pub src: String,
	#[serde(default)]
	pub caption: String,
}

/// One entry on the memories timeline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Memory {
	pub date: String,
	pub title: String,
	pub text: String,
}

/// Everything the card displays.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardContent {
	pub title: String,
	pub subtitle: String,
	pub messages: Vec<Message>,
	pub final_message: Message,
	pub signature: String,
	pub photos: Vec<Photo>,
	pub memories: Vec<Memory>,
	/// Local date-time the countdown runs to, as accepted by `Date`.
	pub countdown_target: String,
	pub audio_src: String,
}

impl Default for CardContent {
	fn default() -> Self {
		Self {
			title: "Happy Valentine's Day".into(),
			subtitle: "A little something, just for you 💝".into(),
			messages: vec![
				Message {
					title: "Tentang Waktu 🕰️".into(),
					text: "Gue tau lo sibuk banget (namanya juga orang penting wkwk). Jadi, thank you banget udah mau meluangkan waktu di sela-sela kesibukan itu buat gue. It means a lot!".into(),
				},
				Message {
					title: "The Vibes ✨".into(),
					text: "Jujur, gue nyaman ngobrol sama lo. Lo bisa diajak serius, tapi bisa diajak receh juga. Kombinasi yang jarang gue temuin. Seru parah!".into(),
				},
				Message {
					title: "Stay Awesome 🌟".into(),
					text: "Semangat terus buat semua target dan ambisi lo. Gue di sini support aja, sambil siap jadi tempat lo sambat kalau capek. Hahaha.".into(),
				},
			],
			final_message: Message {
				title: "Thank You! 💝".into(),
				text: "Terima kasih udah baca sampai sini. You are a cool person, and I hope you know that. Happy Valentine's Day! 🌹✨".into(),
			},
			signature: "With love 💌".into(),
			photos: (1..=6)
				.map(|i| Photo {
					src: format!("images/photo{i}.jpg"),
					caption: String::new(),
				})
				.collect(),
			memories: vec![
				Memory {
					date: "Day 1".into(),
					title: "First Hello 👋".into(),
					text: "The first message that started it all.".into(),
				},
				Memory {
					date: "Day 30".into(),
					title: "Late Night Talks 🌙".into(),
					text: "Conversations that somehow always ran past midnight.".into(),
				},
				Memory {
					date: "Today".into(),
					title: "Still Here ✨".into(),
					text: "And counting.".into(),
				},
			],
			countdown_target: "2026-02-14T00:00:00".into(),
			audio_src: "music/song.mp3".into(),
		}
	}
}

impl CardContent {
	pub fn from_json(json: &str) -> Result<Self, ContentError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Load content from the hosting page's `card-data` script element.
	pub fn from_document() -> Result<Self, ContentError> {
		let element = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(CONTENT_ELEMENT_ID))
			.ok_or(ContentError::MissingElement(CONTENT_ELEMENT_ID))?;
		let script: HtmlScriptElement = element
			.dyn_into()
			.map_err(|_| ContentError::NotAScript(CONTENT_ELEMENT_ID))?;
		let json = script.text().unwrap_or_default();
		Self::from_json(&json)
	}

	/// Message card `index`, counting from zero.
	pub fn message(&self, index: usize) -> Option<&Message> {
		self.messages.get(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let content = CardContent::from_json(r#"{ "title": "Hi" }"#).unwrap();
		assert_eq!(content.title, "Hi");
		assert_eq!(content.messages, CardContent::default().messages);
		assert_eq!(content.countdown_target, "2026-02-14T00:00:00");
	}

	#[test]
	fn photos_parse_without_caption() {
		let content = CardContent::from_json(r#"{ "photos": [{ "src": "a.jpg" }] }"#).unwrap();
		assert_eq!(
			content.photos,
			vec![Photo {
				src: "a.jpg".into(),
				caption: String::new()
			}]
		);
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = CardContent::from_json("{ messages: ").unwrap_err();
		assert!(matches!(err, ContentError::Parse(_)));
		assert!(err.to_string().starts_with("malformed content JSON"));
	}

	#[test]
	fn default_card_has_three_messages() {
		let content = CardContent::default();
		assert_eq!(content.messages.len(), 3);
		assert_eq!(content.message(1).map(|m| m.title.as_str()), Some("The Vibes ✨"));
		assert!(content.message(3).is_none());
	}
}
