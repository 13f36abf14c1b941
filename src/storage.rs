//! [***localStorage***](https://developer.mozilla.org/en-US/docs/Web/API/Window/localStorage) of a window's origin.
//!
//! Keys and values are opaque strings.
//! Values are only logged with the `"dangerous-logging"` feature enabled.

use crate::{
	guard::{host, non_null},
	Result,
};
use tracing::{instrument, trace};
use web_sys::{Storage, Window};

/// # Errors
///
/// Iff local storage is unavailable or access is denied (e.g. by privacy settings).
#[instrument]
pub fn local_storage(window: &Window) -> Result<Storage> {
	let storage = window.local_storage().map_err(host("window.localStorage"))?;
	non_null(storage, "window.localStorage")
}

/// Reads the value stored under `key`, if any.
///
/// # Errors
///
/// Iff local storage can't be accessed.
#[instrument]
pub fn get_item(key: &str, window: &Window) -> Result<Option<String>> {
	let value = local_storage(window)?
		.get_item(key)
		.map_err(host(format!("localStorage.getItem({:?})", key)))?;
	if cfg!(feature = "dangerous-logging") {
		trace!(?value, "Read item.");
	} else {
		trace!(present = value.is_some(), "Read item.");
	}
	Ok(value)
}

/// Stores `value` under `key`, replacing any previous value.
///
/// # Errors
///
/// Iff local storage can't be accessed or its quota is exceeded.
#[instrument(skip(value))]
pub fn set_item(key: &str, value: &str, window: &Window) -> Result<()> {
	if cfg!(feature = "dangerous-logging") {
		trace!(value, "Writing item.");
	}
	local_storage(window)?
		.set_item(key, value)
		.map_err(host(format!("localStorage.setItem({:?})", key)))
}

/// Removes `key`. Removing an absent key does nothing.
///
/// # Errors
///
/// Iff local storage can't be accessed.
#[instrument]
pub fn remove_item(key: &str, window: &Window) -> Result<()> {
	local_storage(window)?
		.remove_item(key)
		.map_err(host(format!("localStorage.removeItem({:?})", key)))
}
