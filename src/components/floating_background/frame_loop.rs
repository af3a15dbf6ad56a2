//! Handle for the self-rescheduling animation loop and its resize listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the `requestAnimationFrame` callback, the id of the pending frame and
/// the window resize listener. Nothing is cancelled implicitly: call
/// [`FrameLoop::stop`] to end the loop.
pub struct FrameLoop {
	window: Window,
	frame: Callback,
	frame_id: Rc<Cell<Option<i32>>>,
	resize: Option<Closure<dyn FnMut()>>,
}

impl FrameLoop {
	/// Start calling `on_frame` once per display refresh and `on_resize` on
	/// every window resize. The loop ends on its own once `on_frame` returns
	/// `false`.
	pub fn start(
		window: &Window,
		mut on_frame: impl FnMut() -> bool + 'static,
		on_resize: impl FnMut() + 'static,
	) -> Self {
		let frame: Callback = Rc::new(RefCell::new(None));
		let frame_id = Rc::new(Cell::new(None));

		let (frame_inner, id_inner, window_inner) = (frame.clone(), frame_id.clone(), window.clone());
		*frame.borrow_mut() = Some(Closure::new(move || {
			id_inner.set(None);
			if !on_frame() {
				return;
			}
			if let Some(ref cb) = *frame_inner.borrow() {
				request_frame(&window_inner, cb, &id_inner);
			}
		}));
		if let Some(ref cb) = *frame.borrow() {
			request_frame(window, cb, &frame_id);
		}

		let resize = Closure::<dyn FnMut()>::new(on_resize);
		if let Err(e) = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref()) {
			warn!("fedf-backdrop: could not attach resize listener: {e:?}");
		}

		Self {
			window: window.clone(),
			frame,
			frame_id,
			resize: Some(resize),
		}
	}

	/// Cancel the pending frame and detach the resize listener.
	pub fn stop(mut self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		if let Some(cb) = self.resize.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		// The frame closure holds a reference to its own slot; drop it to
		// break the cycle.
		self.frame.borrow_mut().take();
	}
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>, id: &Cell<Option<i32>>) {
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(handle) => id.set(Some(handle)),
		Err(e) => warn!("fedf-backdrop: requestAnimationFrame failed: {e:?}"),
	}
}
