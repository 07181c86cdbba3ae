//! Leptos component wrapping the particle field canvas.
//!
//! The canvas fills the viewport and follows window resizes. An animation loop
//! runs via `requestAnimationFrame`, stepping and drawing the field each frame
//! for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::render;
use super::theme::FieldStyle;
use crate::components::viewport_size;

/// Bundles the particle population with its drawing style.
struct FieldContext {
	field: ParticleField,
	style: FieldStyle,
}

/// Renders the drifting sparkle background on a fullscreen canvas.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas;
		let Some(window): Option<Window> = web_sys::window() else {
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("valentine-card: 2d canvas context unavailable");
				return;
			}
		};

		let style = FieldStyle::default();
		let field = ParticleField::new(&style, w, h, &mut rand::thread_rng());
		debug!(
			"valentine-card: particle field with {} particles at {}x{}",
			field.particles.len(),
			w,
			h
		);
		*context.borrow_mut() = Some(FieldContext { field, style });

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				render::render_frame(&mut c.field, &ctx, &c.style);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="canvas-bg"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}
