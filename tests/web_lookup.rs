use dom_access::{append_child, create_element, document, get_element_by_id, owner_document, query_selector, query_selector_all, window, Error};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

use web_fixture_::fixture;

#[wasm_bindgen_test]
fn window_and_document() {
	let window = window().unwrap();
	let document = document(&window).unwrap();
	assert_eq!(dom_access::default_view(&document).unwrap(), window);
}

#[wasm_bindgen_test]
fn missing_id_is_named() {
	fixture("");
	let document = web_fixture_::document();
	for id in &["missing", "also-missing", "with space"] {
		let error = get_element_by_id(id, &document).unwrap_err();
		assert!(matches!(error, Error::NullOrUndefined { .. }));
		assert!(error.to_string().contains(id), "{}", error);
	}
}

#[wasm_bindgen_test]
fn app_mount_point() {
	fixture(r#"<div id="app"></div>"#);
	let document = web_fixture_::document();

	let app = get_element_by_id("app", &document).unwrap();
	let child = create_element("span", &document).unwrap();
	let returned = append_child(&child, &app).unwrap();

	assert_eq!(returned, child);
	assert_eq!(child.parent_element(), Some(app.clone()));
	assert_eq!(app.child_element_count(), 1);
	assert_eq!(owner_document(&child).unwrap(), document);
}

#[wasm_bindgen_test]
fn reparenting_moves() {
	let container = fixture(r#"<p class="a"></p><p class="b"></p>"#);
	let a = query_selector(".a", &container).unwrap();
	let b = query_selector(".b", &container).unwrap();
	let child = create_element("i", &web_fixture_::document()).unwrap();

	append_child(&child, &a).unwrap();
	append_child(&child, &b).unwrap();
	assert_eq!(a.child_element_count(), 0);
	assert_eq!(b.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn cyclic_append_fails() {
	let container = fixture("<p></p>");
	let p = query_selector("p", &container).unwrap();
	assert!(matches!(append_child(&container, &p), Err(Error::Host { .. })));
}

#[wasm_bindgen_test]
fn no_match() {
	let container = fixture("<p></p>");

	assert!(query_selector_all("table", &container).unwrap().is_empty());

	let error = query_selector("table", &container).unwrap_err();
	assert!(matches!(error, Error::NullOrUndefined { .. }));
	assert!(error.to_string().contains("table"), "{}", error);
}

#[wasm_bindgen_test]
fn document_order() {
	let container = fixture(r#"<i id="q-1"></i><b><i id="q-2"></i></b><i id="q-3"></i>"#);
	let ids: Vec<_> = query_selector_all("i", &container).unwrap().iter().map(web_sys::Element::id).collect();
	assert_eq!(ids, ["q-1", "q-2", "q-3"]);

	let document = web_fixture_::document();
	assert_eq!(query_selector("#q-2", &document).unwrap().id(), "q-2");
	assert_eq!(query_selector_all("#q-2, #q-3", &document).unwrap().len(), 2);
}

#[wasm_bindgen_test]
fn invalid_selector() {
	let container = fixture("");
	let error = query_selector("[", &container).unwrap_err();
	assert!(matches!(error, Error::Host { .. }));
	assert!(error.label().contains('['));
	assert!(matches!(query_selector_all("[", &container), Err(Error::Host { .. })));
}

#[wasm_bindgen_test]
fn body_contains_fixtures() {
	let container = fixture("");
	let body = dom_access::body(&web_fixture_::document()).unwrap();
	assert_eq!(container.parent_element(), Some(body.into()));
}
