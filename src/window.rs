use crate::{
	guard::{host, non_null},
	Result,
};
use js_sys::Function;
use tracing::{instrument, trace, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Window};

/// Acquires the global [***Window***](https://developer.mozilla.org/en-US/docs/Web/API/Window).
///
/// # Errors
///
/// Iff there is none, e.g. in a worker.
#[instrument]
pub fn window() -> Result<Window> {
	non_null(web_sys::window(), "window")
}

/// # Errors
///
/// Iff `window` has no [***document***](https://developer.mozilla.org/en-US/docs/Web/API/Window/document).
#[instrument]
pub fn document(window: &Window) -> Result<Document> {
	non_null(window.document(), "window.document")
}

/// Acquires the [***Window***](https://developer.mozilla.org/en-US/docs/Web/API/Window) owning `document`.
///
/// # Errors
///
/// Iff `document` isn't attached to a browsing context.
#[instrument]
pub fn default_view(document: &Document) -> Result<Window> {
	non_null(document.default_view(), "document.defaultView")
}

/// A callback scheduled with [`request_animation_frame`].
///
/// This handle owns the callback: Dropping it cancels the frame (if it hasn't run yet) and frees the callback
/// along with everything it captured. Keep it around until the callback ran.
#[derive(Debug)]
#[must_use = "Dropping an `AnimationFrame` cancels it."]
pub struct AnimationFrame {
	id: i32,
	pending_in: Option<Window>,
	_callback: Closure<dyn FnMut(f64)>,
}
impl AnimationFrame {
	/// The host's request id.
	#[must_use]
	pub fn id(&self) -> i32 {
		self.id
	}
}
impl Drop for AnimationFrame {
	fn drop(&mut self) {
		// Cancelling a frame that already ran is a no-op on the host side.
		if let Some(window) = self.pending_in.take() {
			if let Err(error) = window.cancel_animation_frame(self.id) {
				warn!("Failed to cancel animation frame {} on drop: {:?}", self.id, error)
			}
		}
	}
}

/// Schedules `callback` to run once before the next repaint of `window`.
///
/// `callback` receives the frame's timestamp in milliseconds.
/// It is owned by the returned [`AnimationFrame`], so it must be kept until the callback ran.
///
/// # Errors
///
/// Iff the host throws.
#[instrument(skip(callback))]
pub fn request_animation_frame(callback: impl FnOnce(f64) + 'static, window: &Window) -> Result<AnimationFrame> {
	let callback = Closure::<dyn FnMut(f64)>::once(move |timestamp: f64| {
		trace!(timestamp, "Animation frame.");
		callback(timestamp)
	});
	let id = window
		.request_animation_frame(callback.as_ref().unchecked_ref::<Function>())
		.map_err(host("window.requestAnimationFrame"))?;
	trace!(id, "Requested animation frame.");
	Ok(AnimationFrame {
		id,
		pending_in: Some(window.clone()),
		_callback: callback,
	})
}

/// Cancels `frame` if it hasn't run yet, then frees its callback.
///
/// # Errors
///
/// Iff the host throws. The callback is freed either way.
#[instrument]
pub fn cancel_animation_frame(mut frame: AnimationFrame, window: &Window) -> Result<()> {
	frame.pending_in = None;
	window.cancel_animation_frame(frame.id).map_err(host("window.cancelAnimationFrame"))
}
