//! Memories timeline whose entries reveal themselves as they scroll into view.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::content::Memory;

/// Fraction of an entry that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.3;
/// Class added to an entry once revealed.
pub const REVEALED_CLASS: &str = "visible";

/// Vertical timeline of memories.
#[component]
pub fn Timeline(memories: Vec<Memory>) -> impl IntoView {
	let list_ref = NodeRef::<leptos::html::Div>::new();

	Effect::new(move |_| {
		let Some(list) = list_ref.get() else {
			return;
		};

		let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			|entries: js_sys::Array, _: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if entry.is_intersecting() {
						let _ = entry.target().class_list().add_1(REVEALED_CLASS);
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		options.set_root_margin("0px");

		let observer = match IntersectionObserver::new_with_options(
			on_intersect.as_ref().unchecked_ref(),
			&options,
		) {
			Ok(observer) => observer,
			Err(e) => {
				warn!("valentine-card: timeline reveal unavailable: {e:?}");
				return;
			}
		};

		let Ok(items) = list.query_selector_all(".timeline-item") else {
			return;
		};
		for i in 0..items.length() {
			if let Some(item) = items.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
				observer.observe(&item);
			}
		}

		// The observer outlives this effect; keep its callback alive with it.
		on_intersect.forget();
	});

	view! {
		<div class="timeline" node_ref=list_ref>
			{memories
				.into_iter()
				.enumerate()
				.map(|(i, m)| {
					let side = if i % 2 == 0 { "left" } else { "right" };
					view! {
						<div class=format!("timeline-item {side}")>
							<div class="timeline-content">
								<span class="timeline-date">{m.date}</span>
								<h3>{m.title}</h3>
								<p>{m.text}</p>
							</div>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
