//! Browser checks for the parts that touch the DOM.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use music_ai_web::config::{ClientConfig, CONFIG_ELEMENT_ID};
use music_ai_web::text::{escape_html, lyrics_preview};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a document")
}

#[wasm_bindgen_test]
fn config_defaults_without_element() {
    let (config, error) = ClientConfig::from_document();
    assert!(error.is_none());
    assert_eq!(config, ClientConfig::default());
}

#[wasm_bindgen_test]
fn config_read_from_page() {
    let doc = document();
    let script = doc.create_element("script").unwrap();
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{"output_base": "/files", "lyrics_preview_chars": 120}"#));
    doc.body().unwrap().append_child(&script).unwrap();

    let (config, error) = ClientConfig::from_document();
    script.remove();

    assert!(error.is_none());
    assert_eq!(config.output_url("a.mp3"), "/files/a.mp3");
    assert_eq!(config.lyrics_preview_chars, 120);
    assert_eq!(config.api_base, "/api");
}

#[wasm_bindgen_test]
fn malformed_config_falls_back() {
    let doc = document();
    let script = doc.create_element("script").unwrap();
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_text_content(Some("{oops"));
    doc.body().unwrap().append_child(&script).unwrap();

    let (config, error) = ClientConfig::from_document();
    script.remove();

    assert!(error.is_some());
    assert_eq!(config, ClientConfig::default());
}

#[wasm_bindgen_test]
fn escaped_preview_renders_as_text() {
    let doc = document();
    let div = doc.create_element("div").unwrap();
    div.set_inner_html(&lyrics_preview("<script>alert(1)</script>", 300));

    assert_eq!(div.child_element_count(), 0);
    assert_eq!(div.text_content().unwrap(), "<script>alert(1)</script>");
    assert_eq!(escape_html("plain"), "plain");
}
