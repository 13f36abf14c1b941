use crate::{guard::host, Result};
use js_sys::Function;
use tracing::{instrument, trace_span};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// How an event listener is attached.
///
/// See [***addEventListener***](https://developer.mozilla.org/en-US/docs/Web/API/EventTarget/addEventListener#parameters) for details.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
	pub capture: bool,
	pub once: bool,
	pub passive: bool,
}
impl ListenerOptions {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			capture: false,
			once: false,
			passive: false,
		}
	}

	#[must_use]
	pub const fn with_capture(self, capture: bool) -> Self {
		Self { capture, ..self }
	}

	#[must_use]
	pub const fn with_once(self, once: bool) -> Self {
		Self { once, ..self }
	}

	#[must_use]
	pub const fn with_passive(self, passive: bool) -> Self {
		Self { passive, ..self }
	}

	fn to_web(self) -> AddEventListenerOptions {
		let web_options = AddEventListenerOptions::new();
		web_options.set_capture(self.capture);
		web_options.set_once(self.once);
		web_options.set_passive(self.passive);
		web_options
	}
}

/// Registers `callback` for `event` on `target`.
///
/// The listener can't be removed again, so `callback` is kept alive for the rest of the page's lifetime
/// (even if [`ListenerOptions::once`] is set).
///
/// # Errors
///
/// Iff the host throws.
#[instrument(skip(callback))]
pub fn add_event_listener(options: ListenerOptions, event: &str, callback: impl FnMut(Event) + 'static, target: &EventTarget) -> Result<()> {
	let mut callback = callback;
	let event_name = event.to_string();
	let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		let span = trace_span!("event_listener", event = %event_name);
		let _enter = span.enter();
		callback(event)
	});
	target
		.add_event_listener_with_callback_and_add_event_listener_options(event, closure.as_ref().unchecked_ref::<Function>(), &options.to_web())
		.map_err(host(format!("addEventListener({:?})", event)))?;
	closure.forget();
	Ok(())
}
