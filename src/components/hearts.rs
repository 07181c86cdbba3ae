//! Floating heart decorations rising across the page.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;
use rand::Rng;

/// Interval between new hearts.
pub const SPAWN_EVERY: Duration = Duration::from_millis(400);
/// Each heart is removed this long after it appears.
pub const LIFETIME: Duration = Duration::from_secs(15);

const HEARTS: [&str; 8] = ["❤️", "💕", "💖", "💗", "💝", "💘", "💓", "💞"];

/// One heart's randomised appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
	pub id: u64,
	pub glyph: &'static str,
	/// Horizontal position in percent of the container width.
	pub left: f64,
	/// Animation duration in seconds.
	pub duration: f64,
	/// Animation delay in seconds.
	pub delay: f64,
}

impl Heart {
	pub fn random<R: Rng>(id: u64, rng: &mut R) -> Self {
		Self {
			id,
			glyph: HEARTS[rng.gen_range(0..HEARTS.len())],
			left: rng.gen_range(0.0..100.0),
			duration: rng.gen_range(8.0..14.0),
			delay: rng.gen_range(0.0..5.0),
		}
	}

	pub fn style(&self) -> String {
		format!(
			"left: {}%; animation-duration: {}s; animation-delay: {}s;",
			self.left, self.duration, self.delay
		)
	}
}

/// Container that keeps spawning hearts for the lifetime of the page.
#[component]
pub fn FloatingHearts() -> impl IntoView {
	let hearts = RwSignal::new(Vec::<Heart>::new());
	let next_id = StoredValue::new(0u64);

	let spawn = move || {
		let id = next_id.get_value();
		next_id.set_value(id + 1);
		hearts.update(|h| h.push(Heart::random(id, &mut rand::thread_rng())));
		set_timeout(
			move || hearts.update(|h| h.retain(|heart| heart.id != id)),
			LIFETIME,
		);
	};
	if let Err(e) = set_interval_with_handle(spawn, SPAWN_EVERY) {
		warn!("valentine-card: heart spawner not started: {e:?}");
	}

	view! {
		<div class="floating-hearts" id="floatingHearts">
			<For each=move || hearts.get() key=|heart| heart.id let:heart>
				<div class="floating-heart" style=heart.style()>
					{heart.glyph}
				</div>
			</For>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn random_hearts_stay_in_range() {
		let mut rng = StdRng::seed_from_u64(2);
		for id in 0..200 {
			let heart = Heart::random(id, &mut rng);
			assert_eq!(heart.id, id);
			assert!(HEARTS.contains(&heart.glyph));
			assert!((0.0..100.0).contains(&heart.left));
			assert!((8.0..14.0).contains(&heart.duration));
			assert!((0.0..5.0).contains(&heart.delay));
		}
	}

	#[test]
	fn style_positions_and_times_heart() {
		let heart = Heart {
			id: 0,
			glyph: "💖",
			left: 42.5,
			duration: 9.0,
			delay: 0.5,
		};
		assert_eq!(
			heart.style(),
			"left: 42.5%; animation-duration: 9s; animation-delay: 0.5s;"
		);
	}
}
