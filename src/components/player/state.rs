//! Music player state and display helpers.

/// Playback and panel state of the music player.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
	pub playing: bool,
	pub minimized: bool,
	/// Volume in percent, `0..=100`.
	pub volume: u8,
	pub current_time: f64,
	pub duration: Option<f64>,
}

impl PlayerState {
	pub fn new() -> Self {
		Self {
			volume: 100,
			..Self::default()
		}
	}

	pub fn play_label(&self) -> &'static str {
		if self.playing { "⏸" } else { "▶" }
	}

	/// Playback progress in percent, once the duration is known.
	pub fn progress_percent(&self) -> Option<f64> {
		match self.duration {
			Some(d) if d.is_finite() && d > 0.0 => Some(self.current_time / d * 100.0),
			_ => None,
		}
	}

	/// Media volume (`0.0..=1.0`) for a slider value in percent.
	pub fn set_volume_percent(&mut self, percent: f64) -> f64 {
		self.volume = percent.clamp(0.0, 100.0).round() as u8;
		f64::from(self.volume) / 100.0
	}
}

/// Seek position for a click at `offset_x` on a bar `width` pixels wide.
pub fn seek_position(offset_x: f64, width: f64, duration: f64) -> Option<f64> {
	if width <= 0.0 || !duration.is_finite() {
		return None;
	}
	Some(offset_x / width * duration)
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: f64) -> String {
	if !seconds.is_finite() || seconds < 0.0 {
		return "0:00".to_string();
	}
	let mins = (seconds / 60.0).floor() as u64;
	let secs = (seconds % 60.0).floor() as u64;
	format!("{mins}:{secs:02}")
}
