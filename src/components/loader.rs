//! Opening loader overlay with twinkling sparkles.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use rand::Rng;

/// Sparkles created when the loader mounts.
pub const SPARKLE_COUNT: usize = 20;
/// How long the loader lingers after the page has loaded.
pub const HIDE_AFTER: Duration = Duration::from_millis(2500);

#[derive(Clone, Debug, PartialEq)]
struct Sparkle {
	left: f64,
	top: f64,
	delay: f64,
	duration: f64,
}

impl Sparkle {
	fn random<R: Rng>(rng: &mut R) -> Self {
		Self {
			left: rng.gen_range(0.0..100.0),
			top: rng.gen_range(0.0..100.0),
			delay: rng.gen_range(0.0..3.0),
			duration: rng.gen_range(2.0..4.0),
		}
	}

	fn style(&self) -> String {
		format!(
			"left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
			self.left, self.top, self.delay, self.duration
		)
	}
}

fn sparkles<R: Rng>(rng: &mut R) -> Vec<Sparkle> {
	(0..SPARKLE_COUNT).map(|_| Sparkle::random(rng)).collect()
}

/// Fullscreen loader, hidden a moment after the window finishes loading.
#[component]
pub fn Loader(children: Children) -> impl IntoView {
	let hidden = RwSignal::new(false);
	let hide_later = move || {
		set_timeout(
			move || {
				debug!("valentine-card: hiding loader");
				hidden.set(true);
			},
			HIDE_AFTER,
		)
	};

	let loaded = document().ready_state() == "complete";
	if loaded {
		hide_later();
	} else {
		let _ = window_event_listener(ev::load, move |_| hide_later());
	}

	let sparkles = sparkles(&mut rand::thread_rng());

	view! {
		<div id="loader" class="loader" class:hidden=move || hidden.get()>
			<div class="loader-sparkles" id="loaderSparkles">
				{sparkles
					.iter()
					.map(|s| view! { <div class="sparkle" style=s.style() /> })
					.collect_view()}
			</div>
			{children()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn creates_fixed_batch_in_range() {
		let batch = sparkles(&mut StdRng::seed_from_u64(9));
		assert_eq!(batch.len(), 20);
		for s in &batch {
			assert!((0.0..100.0).contains(&s.left) && (0.0..100.0).contains(&s.top));
			assert!((0.0..3.0).contains(&s.delay));
			assert!((2.0..4.0).contains(&s.duration));
		}
	}

	#[test]
	fn style_lists_all_properties() {
		let s = Sparkle {
			left: 10.0,
			top: 20.5,
			delay: 1.0,
			duration: 2.5,
		};
		assert_eq!(
			s.style(),
			"left: 10%; top: 20.5%; animation-delay: 1s; animation-duration: 2.5s;"
		);
	}
}
