//! Typed, failable access to the few browser APIs a VDOM application still needs to touch directly:
//! finding and clearing its mount point, focus and text selection, event listeners, animation frames,
//! the location hash and [***localStorage***](https://developer.mozilla.org/en-US/docs/Web/API/Window/localStorage).
//!
//! Every operation forwards to the host through [`web_sys`] and returns a [`Result`].
//! [***null***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/null) or
//! [***undefined***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/undefined)
//! where a value was required becomes an [`Error`], as do failed coercions and host exceptions.
//! Empty results (like a selector without matches in [`query_selector_all`]) are **not** errors.
//!
//! Side effects happen as soon as a function is called.
//! To resolve failures eagerly (throwing into JavaScript), see [`ThrowExt`].

#![doc(html_root_url = "https://docs.rs/dom-access/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub use web_sys;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod guard;
pub mod location;
pub mod storage;
pub mod window;

pub use document::{body, create_element, get_element_by_id, query_selector, query_selector_all, ParentNode};
pub use element::{append_child, clear_element, focus, inner_html, owner_document, select, text_content};
pub use error::{collect_all, Error, Errors, Result, ThrowExt};
pub use event::{add_event_listener, ListenerOptions};
pub use location::{hash, location, location_hash, set_hash, set_location_hash};
pub use storage::{get_item, local_storage, remove_item, set_item};
pub use window::{cancel_animation_frame, default_view, document, request_animation_frame, window, AnimationFrame};
