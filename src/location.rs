use crate::{
	guard::{host, non_null, string},
	Result,
};
use js_sys::Reflect;
use tracing::{instrument, trace};
use wasm_bindgen::JsValue;
use web_sys::{Document, Location};

/// # Errors
///
/// Iff `document` isn't attached to a browsing context.
#[instrument]
pub fn location(document: &Document) -> Result<Location> {
	non_null(document.location(), "document.location")
}

/// Reads the fragment identifier of `location`, including its leading `'#'` (or `""` if there is none).
///
/// # Errors
///
/// Iff the `hash` property is missing or not a string.
#[instrument]
pub fn hash(location: &Location) -> Result<String> {
	let value = Reflect::get(location, &JsValue::from_str("hash")).map_err(host("location.hash"))?;
	string(value, "location.hash")
}

/// Navigates to the fragment `value`. A leading `'#'` is optional.
///
/// # Errors
///
/// Iff the host throws.
#[instrument(skip(value))]
pub fn set_hash(value: &str, location: &Location) -> Result<()> {
	if cfg!(feature = "dangerous-logging") {
		trace!(value, "Setting hash.");
	}
	location.set_hash(value).map_err(host("location.hash"))
}

/// [`hash`] of `document`'s [`location`].
///
/// # Errors
///
/// See there.
pub fn location_hash(document: &Document) -> Result<String> {
	hash(&location(document)?)
}

/// [`set_hash`] on `document`'s [`location`].
///
/// # Errors
///
/// See there.
pub fn set_location_hash(value: &str, document: &Document) -> Result<()> {
	set_hash(value, &location(document)?)
}
