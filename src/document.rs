use crate::{
	guard::{cast, from_array_like, host, non_null},
	Result,
};
use core::fmt::Debug;
use tracing::{instrument, trace};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, NodeList};

/// The [***ParentNode***](https://developer.mozilla.org/en-US/docs/Web/API/Document_object_model/Locating_DOM_elements_using_selectors)
/// mixin: a [`Document`] or [`Element`] that can be searched with CSS selectors.
pub trait ParentNode: Debug {
	/// Forwards to the host's `querySelector`.
	///
	/// # Errors
	///
	/// Iff the host throws, i.e. for an invalid selector.
	fn query_selector_raw(&self, selector: &str) -> core::result::Result<Option<Element>, JsValue>;

	/// Forwards to the host's `querySelectorAll`.
	///
	/// # Errors
	///
	/// Iff the host throws, i.e. for an invalid selector.
	fn query_selector_all_raw(&self, selector: &str) -> core::result::Result<NodeList, JsValue>;
}

impl ParentNode for Document {
	fn query_selector_raw(&self, selector: &str) -> core::result::Result<Option<Element>, JsValue> {
		self.query_selector(selector)
	}

	fn query_selector_all_raw(&self, selector: &str) -> core::result::Result<NodeList, JsValue> {
		self.query_selector_all(selector)
	}
}

impl ParentNode for Element {
	fn query_selector_raw(&self, selector: &str) -> core::result::Result<Option<Element>, JsValue> {
		self.query_selector(selector)
	}

	fn query_selector_all_raw(&self, selector: &str) -> core::result::Result<NodeList, JsValue> {
		self.query_selector_all(selector)
	}
}

/// Finds the [`Element`] with the given `id` in `document`.
///
/// # Errors
///
/// Iff there is no such element. The error's label contains `id`.
#[instrument]
pub fn get_element_by_id(id: &str, document: &Document) -> Result<Element> {
	non_null(document.get_element_by_id(id), format!("getElementById({:?})", id))
}

/// Finds the first [`Element`] matching `selector` in `parent`.
///
/// # Errors
///
/// Iff there is no match (labelled with `selector`) or `selector` is invalid.
#[instrument]
pub fn query_selector(selector: &str, parent: &impl ParentNode) -> Result<Element> {
	let label = format!("querySelector({:?})", selector);
	let found = parent.query_selector_raw(selector).map_err(host(label.as_str()))?;
	non_null(found, label)
}

/// Finds all [`Element`]s matching `selector` in `parent`, in document order.
///
/// No match is an empty [`Vec`], not an error.
///
/// # Errors
///
/// Iff `selector` is invalid.
#[instrument]
pub fn query_selector_all(selector: &str, parent: &impl ParentNode) -> Result<Vec<Element>> {
	let label = format!("querySelectorAll({:?})", selector);
	let node_list = parent.query_selector_all_raw(selector).map_err(host(label.as_str()))?;
	let elements = from_array_like(&node_list, &label)?
		.into_iter()
		.enumerate()
		.map(|(i, node)| cast::<Element>(node, "Element", format!("{}[{}]", label, i)))
		.collect::<Result<Vec<_>>>()?;
	trace!("{} match(es).", elements.len());
	Ok(elements)
}

/// Creates a new, detached [`Element`] named `tag_name` in `document`.
///
/// # Errors
///
/// Iff `tag_name` isn't a valid element name.
#[instrument]
pub fn create_element(tag_name: &str, document: &Document) -> Result<Element> {
	document.create_element(tag_name).map_err(host(format!("createElement({:?})", tag_name)))
}

/// # Errors
///
/// Iff `document` has no [***body***](https://developer.mozilla.org/en-US/docs/Web/API/Document/body).
#[instrument]
pub fn body(document: &Document) -> Result<HtmlElement> {
	non_null(document.body(), "document.body")
}
