//! Leptos component wrapping the particle field canvas.
//!
//! The component sizes a fixed canvas to the viewport, scatters the particles
//! and drives them from a `requestAnimationFrame` loop. The loop and the
//! resize listener are stopped when the component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::field::ParticleField;
use super::frame_loop::FrameLoop;
use crate::components::theme_provider::{ThemeContext, ThemeMode};

const CANVAS_STYLE: &str = "position: fixed; inset: 0; width: 100%; height: 100%; \
	pointer-events: none; z-index: 0; opacity: 0.9;";

/// A mounted field together with the loop that animates it.
struct RunningField {
	field: Rc<RefCell<ParticleField<CanvasRenderingContext2d>>>,
	frame_loop: FrameLoop,
}

impl RunningField {
	fn stop(self) {
		self.frame_loop.stop();
		self.field.borrow_mut().teardown();
	}
}

/// Renders drifting, interconnected particles behind the page content.
///
/// Colors follow the [`ThemeContext`] when one is provided and default to the
/// dark palette otherwise. `particle_count` overrides `config.particle_count`.
#[component]
pub fn FloatingBackground(
	#[prop(optional)] config: FieldConfig,
	#[prop(optional)] particle_count: Option<usize>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<RunningField>);

	let config = FieldConfig {
		particle_count: particle_count.unwrap_or(config.particle_count),
		..config
	};
	let theme: Signal<ThemeMode> = match use_context::<ThemeContext>() {
		Some(ctx) => Signal::derive(move || ctx.mode()),
		None => Signal::stored(ThemeMode::default()),
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		stop_running(running);

		let Some(window) = web_sys::window() else {
			debug!("fedf-backdrop: no window, background disabled");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			debug!("fedf-backdrop: no 2d context, background disabled");
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let field = Rc::new(RefCell::new(ParticleField::new(config.clone(), seeded_rng())));
		field.borrow_mut().mount(ctx, w, h);
		info!(
			"fedf-backdrop: particle field mounted with {} particles",
			config.particle_count
		);

		let field_frame = field.clone();
		let on_frame = move || {
			let mode = theme.try_get_untracked().unwrap_or_default();
			field_frame.borrow_mut().frame(mode)
		};

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		let on_resize = move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			field_resize.borrow_mut().resize(nw, nh);
		};

		let frame_loop = FrameLoop::start(&window, on_frame, on_resize);
		running.set_value(Some(RunningField { field, frame_loop }));
	});

	on_cleanup(move || stop_running(running));

	view! {
		<canvas
			node_ref=canvas_ref
			class="floating-background"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
	}
}

fn stop_running(running: StoredValue<Option<RunningField>, LocalStorage>) {
	if let Some(Some(field)) = running.try_update_value(Option::take) {
		field.stop();
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
	};
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Particle placement is not meant to be reproducible in the browser, so the
/// generator is seeded from `Math.random`.
fn seeded_rng() -> Rng {
	Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}
