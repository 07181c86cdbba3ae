//! Background music player.

mod component;
mod state;

pub use component::{MusicPlayer, start_playback};
pub use state::{PlayerState, format_time, seek_position};
