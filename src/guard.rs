//! The checks every access in this crate is built from.
//!
//! These are public so that callers can extend the layer with their own host accesses in the same manner.

use crate::{Error, Result};
use js_sys::Reflect;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};

/// Passes `value` through, or fails with [`Error::NullOrUndefined`] labelled `label`.
///
/// [`web_sys`] already maps nullable return values to [`Option`], so this is the check for those.
///
/// # Errors
///
/// Iff `value` is [`None`].
pub fn non_null<T>(value: Option<T>, label: impl Into<String>) -> Result<T> {
	value.ok_or_else(|| missing(label.into()))
}

/// Passes `value` through, or fails with [`Error::NullOrUndefined`] labelled `label`.
///
/// # Errors
///
/// Iff `value` is [***null***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/null)
/// or [***undefined***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/undefined).
pub fn non_nullish(value: JsValue, label: impl Into<String>) -> Result<JsValue> {
	if value.is_null() || value.is_undefined() {
		Err(missing(label.into()))
	} else {
		Ok(value)
	}
}

fn missing(label: String) -> Error {
	debug!("null or undefined: {}", label);
	Error::NullOrUndefined { label }
}

/// Coerces `value` to a [`String`].
///
/// # Errors
///
/// [`Error::NullOrUndefined`] if `value` is missing, [`Error::Coercion`] if it's present but not a string.
pub fn string(value: JsValue, label: impl Into<String>) -> Result<String> {
	let label = label.into();
	non_nullish(value, label.as_str())?.as_string().ok_or_else(|| coercion(label, "string"))
}

/// Casts `value` to `T` after checking its type.
///
/// # Errors
///
/// [`Error::Coercion`] if `value` is not an instance of `T`.
pub fn cast<T: JsCast>(value: impl Into<JsValue>, expected: &'static str, label: impl Into<String>) -> Result<T> {
	value.into().dyn_into::<T>().map_err(|_| coercion(label.into(), expected))
}

pub(crate) fn coercion(label: String, expected: &'static str) -> Error {
	debug!("expected {}: {}", expected, label);
	Error::Coercion { label, expected }
}

/// Reads an array-like host value into a [`Vec`], through its `length` property and each index below it.
///
/// This works for [`web_sys::NodeList`], [***arguments***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Functions/arguments)
/// and other values that don't necessarily implement the iteration protocol.
///
/// # Errors
///
/// Iff `length` is missing, not a number, or not a valid array length (a whole number from 0 to 2³² - 1),
/// or a property access throws.
pub fn from_array_like(value: &JsValue, label: &str) -> Result<Vec<JsValue>> {
	let length_label = format!("{}.length", label);
	let length = non_nullish(Reflect::get(value, &JsValue::from_str("length")).map_err(host(length_label.as_str()))?, length_label.as_str())?
		.as_f64()
		.ok_or_else(|| coercion(length_label.clone(), "number"))?;

	#[allow(clippy::float_cmp)]
	let valid = (0.0..=f64::from(u32::MAX)).contains(&length) && length.trunc() == length;
	if !valid {
		return Err(coercion(length_label, "array length"));
	}
	#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
	let length = length as u32;
	(0..length)
		.map(|i| Reflect::get_u32(value, i).map_err(host(format!("{}[{}]", label, i))))
		.collect()
}

/// Creates a mapper from a thrown host value to [`Error::Host`] labelled `label`.
///
/// The message is taken from a thrown [***Error***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Error)'s
/// [***message***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Error/message), a thrown string,
/// or the thrown value's debug representation otherwise.
pub fn host(label: impl Into<String>) -> impl FnOnce(JsValue) -> Error {
	let label = label.into();
	move |thrown| {
		let message = if let Some(error) = thrown.dyn_ref::<js_sys::Error>() {
			String::from(error.message())
		} else if let Some(message) = thrown.as_string() {
			message
		} else {
			format!("{:?}", thrown)
		};
		warn!("Host exception in {}: {}", label, message);
		Error::Host { label, message }
	}
}
