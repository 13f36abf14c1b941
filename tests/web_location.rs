use dom_access::{hash, location, location_hash, set_hash, set_location_hash};
use std::{
	io,
	sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::{format::FmtSpan, MakeWriter};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);


#[wasm_bindgen_test]
fn hash_round_trip() {
	let document = web_fixture_::document();

	set_location_hash("#section2", &document).unwrap();
	assert_eq!(location_hash(&document).unwrap(), "#section2");

	let location = location(&document).unwrap();
	set_hash("section3", &location).unwrap();
	assert_eq!(hash(&location).unwrap(), "#section3");

	set_hash("", &location).unwrap();
	assert_eq!(hash(&location).unwrap(), "");
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);
impl io::Write for Captured {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
impl<'a> MakeWriter<'a> for Captured {
	type Writer = Self;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}

#[cfg(not(feature = "dangerous-logging"))]
#[wasm_bindgen_test]
fn hash_value_is_not_logged() {
	let document = web_fixture_::document();
	let location = location(&document).unwrap();

	let captured = Captured::default();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(captured.clone())
		.with_max_level(tracing::Level::TRACE)
		.with_span_events(FmtSpan::NEW)
		.without_time()
		.finish();
	tracing::subscriber::with_default(subscriber, || set_hash("#private-fragment", &location).unwrap());
	assert_eq!(hash(&location).unwrap(), "#private-fragment");

	let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
	assert!(log.contains("set_hash"), "{}", log);
	assert!(!log.contains("private-fragment"), "{}", log);
}
