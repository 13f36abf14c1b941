use crate::{
	guard::{coercion, host, non_null},
	Result,
};
use tracing::{instrument, trace};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Node, SvgElement};

/// Appends `child` to `parent`'s [***childNodes***](https://developer.mozilla.org/en-US/docs/Web/API/Node/childNodes).
///
/// If `child` is already in the document, it is moved. There are no further checks beyond the host's.
///
/// Returns `child` for chaining.
///
/// # Errors
///
/// Iff the host throws, e.g. when `child` is an ancestor of `parent`.
#[instrument]
pub fn append_child(child: &Element, parent: &Element) -> Result<Element> {
	let parent: &Node = parent.as_ref();
	parent.append_child(child.as_ref()).map_err(host("appendChild"))?;
	Ok(child.clone())
}

/// Removes all [***childNodes***](https://developer.mozilla.org/en-US/docs/Web/API/Node/childNodes) of `element`.
///
/// Returns `element` for chaining.
///
/// # Errors
///
/// Iff the host throws.
#[instrument]
pub fn clear_element(element: &Element) -> Result<Element> {
	let node: &Node = element.as_ref();
	let mut removed = 0_usize;
	while let Some(child) = node.first_child() {
		node.remove_child(&child).map_err(host("removeChild"))?;
		removed += 1;
	}
	trace!("Removed {} child node(s).", removed);
	Ok(element.clone())
}

/// Focuses `element`, which must be an [`HtmlElement`] or [`SvgElement`].
///
/// Returns `element` for chaining.
///
/// # Errors
///
/// Iff `element` is neither or the host throws.
#[instrument]
pub fn focus(element: &Element) -> Result<Element> {
	if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
		html_element.focus().map_err(host("focus"))?;
	} else if let Some(svg_element) = element.dyn_ref::<SvgElement>() {
		svg_element.focus().map_err(host("focus"))?;
	} else {
		return Err(coercion("focus".to_string(), "HtmlElement or SvgElement"));
	}
	Ok(element.clone())
}

/// Selects all text in `element`, which must be an `<input>` or `<textarea>`.
///
/// Returns `element` for chaining.
///
/// # Errors
///
/// Iff `element` is neither.
#[instrument]
pub fn select(element: &Element) -> Result<Element> {
	if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		input.select();
	} else if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
		text_area.select();
	} else {
		return Err(coercion("select".to_string(), "HtmlInputElement or HtmlTextAreaElement"));
	}
	Ok(element.clone())
}

/// # Errors
///
/// Never for elements, but the host API is nullable.
#[instrument]
pub fn text_content(element: &Element) -> Result<String> {
	let node: &Node = element.as_ref();
	non_null(node.text_content(), "textContent")
}

#[must_use]
#[instrument]
pub fn inner_html(element: &Element) -> String {
	let html = element.inner_html();
	if cfg!(feature = "dangerous-logging") {
		trace!(%html, "innerHTML");
	}
	html
}

/// # Errors
///
/// Not for elements created through a [`Document`], but the host API is nullable.
#[instrument]
pub fn owner_document(element: &Element) -> Result<Document> {
	let node: &Node = element.as_ref();
	non_null(node.owner_document(), "ownerDocument")
}
