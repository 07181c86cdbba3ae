//! Days/hours/minutes countdown to a fixed local date-time.

use leptos::prelude::*;
use log::warn;
use std::time::Duration;

const MINUTE_MS: f64 = 60.0 * 1000.0;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

/// How often the display is refreshed.
pub const REFRESH: Duration = Duration::from_secs(60);

/// Whole days, hours and minutes remaining.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
}

impl Countdown {
	/// Time left from `now_ms` until `target_ms`, both in epoch milliseconds.
	///
	/// Returns `None` once the target has been reached.
	pub fn until(target_ms: f64, now_ms: f64) -> Option<Self> {
		let diff = target_ms - now_ms;
		if diff.is_nan() || diff <= 0.0 {
			return None;
		}
		Some(Self {
			days: (diff / DAY_MS).floor() as u64,
			hours: ((diff % DAY_MS) / HOUR_MS).floor() as u64,
			minutes: ((diff % HOUR_MS) / MINUTE_MS).floor() as u64,
		})
	}
}

fn pad(value: u64) -> String {
	format!("{value:02}")
}

/// Parses `target` as a local date-time in epoch milliseconds.
fn target_millis(target: &str) -> Option<f64> {
	let ms = js_sys::Date::new(&target.into()).get_time();
	(!ms.is_nan()).then_some(ms)
}

/// Countdown display refreshed once a minute.
///
/// Once the target passes, the last shown values stay on screen.
#[component]
pub fn CountdownDisplay(#[prop(into)] target: String) -> impl IntoView {
	let remaining = RwSignal::new(Countdown::default());

	let Some(target_ms) = target_millis(&target) else {
		warn!("valentine-card: countdown target {target:?} is not a valid date");
		return view! { <div class="countdown" /> }.into_any();
	};

	let refresh = move || {
		if let Some(c) = Countdown::until(target_ms, js_sys::Date::now()) {
			remaining.set(c);
		}
	};
	refresh();
	if let Err(e) = set_interval_with_handle(refresh, REFRESH) {
		warn!("valentine-card: countdown timer not started: {e:?}");
	}

	view! {
		<div class="countdown">
			<div class="countdown-item">
				<span id="days">{move || pad(remaining.get().days)}</span>
				<span class="label">"Days"</span>
			</div>
			<div class="countdown-item">
				<span id="hours">{move || pad(remaining.get().hours)}</span>
				<span class="label">"Hours"</span>
			</div>
			<div class="countdown-item">
				<span id="minutes">{move || pad(remaining.get().minutes)}</span>
				<span class="label">"Minutes"</span>
			</div>
		</div>
	}
	.into_any()
}
