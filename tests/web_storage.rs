use dom_access::{get_item, remove_item, set_item, window};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);


#[wasm_bindgen_test]
fn set_get_remove() {
	web_fixture_::document();
	let window = window().unwrap();

	for (key, value) in &[("dom-access-a", "1"), ("dom-access-b", ""), ("dom-access-ü", "ünïcödé"), ("", "empty key")] {
		set_item(key, value, &window).unwrap();
		assert_eq!(get_item(key, &window).unwrap().as_deref(), Some(*value));

		remove_item(key, &window).unwrap();
		assert_eq!(get_item(key, &window).unwrap(), None);
	}
}

#[wasm_bindgen_test]
fn overwrite() {
	web_fixture_::document();
	let window = window().unwrap();
	set_item("dom-access-overwrite", "first", &window).unwrap();
	set_item("dom-access-overwrite", "second", &window).unwrap();
	assert_eq!(get_item("dom-access-overwrite", &window).unwrap().as_deref(), Some("second"));
	remove_item("dom-access-overwrite", &window).unwrap();
}

#[wasm_bindgen_test]
fn remove_absent() {
	web_fixture_::document();
	let window = window().unwrap();
	remove_item("dom-access-never-set", &window).unwrap();
	assert_eq!(get_item("dom-access-never-set", &window).unwrap(), None);
}
