use thiserror::Error;
use wasm_bindgen::{throw_str, JsValue};

/// A missing or malformed value, labelled with the access that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// The host returned [***null***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/null)
	/// or [***undefined***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/undefined)
	/// where a value was required.
	#[error("null or undefined: {label}")]
	NullOrUndefined { label: String },

	/// A value was present but not of the expected type.
	#[error("expected {expected}: {label}")]
	Coercion { label: String, expected: &'static str },

	/// The host threw while performing the access.
	#[error("{label}: {message}")]
	Host { label: String, message: String },
}

impl Error {
	/// The label of the access that failed.
	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			Error::NullOrUndefined { label } | Error::Coercion { label, .. } | Error::Host { label, .. } => label,
		}
	}
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// One or more [`Error`]s, in the order they occurred.
///
/// Renders as each failure's message, separated by `"; "`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.0))]
pub struct Errors(Vec<Error>);

impl Errors {
	#[must_use]
	pub fn iter(&self) -> core::slice::Iter<'_, Error> {
		self.0.iter()
	}

	/// Always at least 1.
	#[must_use]
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<Error> {
		self.0
	}
}

impl From<Error> for Errors {
	fn from(error: Error) -> Self {
		Self(vec![error])
	}
}

impl IntoIterator for Errors {
	type Item = Error;
	type IntoIter = std::vec::IntoIter<Error>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Errors {
	type Item = &'a Error;
	type IntoIter = core::slice::Iter<'a, Error>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

fn render(errors: &[Error]) -> String {
	let mut rendered = String::new();
	for (i, error) in errors.iter().enumerate() {
		if i > 0 {
			rendered.push_str("; ");
		}
		rendered.push_str(&error.to_string());
	}
	rendered
}

/// Runs through all `results`, keeping every failure instead of stopping at the first.
///
/// # Errors
///
/// Iff any of `results` is an [`Err`], with all of them in order.
pub fn collect_all<T>(results: impl IntoIterator<Item = Result<T>>) -> Result<Vec<T>, Errors> {
	let mut values = Vec::new();
	let mut errors = Vec::new();
	for result in results {
		match result {
			Ok(value) => values.push(value),
			Err(error) => errors.push(error),
		}
	}
	if errors.is_empty() {
		Ok(values)
	} else {
		Err(Errors(errors))
	}
}

/// Resolves a failable result at a strict boundary.
pub trait ThrowExt<T> {
	/// Returns the success value or throws a JavaScript exception carrying the rendered failure(s).
	///
	/// Outside of `wasm32` targets this panics instead, like any other [`wasm_bindgen`] import.
	fn unwrap_or_throw(self) -> T;

	/// Converts the failure(s) into a [***JavaScript Error***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Error),
	/// for returning from `#[wasm_bindgen]` functions.
	///
	/// # Errors
	///
	/// Iff `self` is an [`Err`].
	fn into_js(self) -> Result<T, JsValue>;
}

impl<T, E: Into<Errors>> ThrowExt<T> for Result<T, E> {
	fn unwrap_or_throw(self) -> T {
		match self {
			Ok(value) => value,
			Err(errors) => {
				let errors: Errors = errors.into();
				tracing::error!("Throwing {} failure(s) into JavaScript.", errors.len());
				throw_str(&errors.to_string())
			}
		}
	}

	fn into_js(self) -> Result<T, JsValue> {
		self.map_err(|errors| {
			let errors: Errors = errors.into();
			js_sys::Error::new(&errors.to_string()).into()
		})
	}
}
