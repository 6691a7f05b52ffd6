#![cfg(target_arch = "wasm32")]

use serde_json::Value as JsonValue;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use baseconv_core::{BaseConverter, bytes_to_views, convert_integer};

wasm_bindgen_test_configure!(run_in_browser);

fn js_to_json(value: JsValue) -> JsonValue {
    serde_wasm_bindgen::from_value(value).expect("JsValue -> JSON map")
}

fn field<'a>(map: &'a JsonValue, key: &str) -> &'a str {
    map.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| panic!("missing string field {key}"))
}

#[wasm_bindgen_test]
fn converter_text_edit_fans_out() {
    let mut converter = BaseConverter::new(JsValue::UNDEFINED).expect("default config");
    let view = js_to_json(converter.edit("text", "Hi").expect("edit text"));
    assert_eq!(field(&view, "mode"), "byteMode");
    assert_eq!(field(&view, "hexBytes"), "48 69");
    assert_eq!(field(&view, "base64"), "SGk=");
    assert_eq!(field(&view, "decimal"), "72 105");
    assert_eq!(field(&view, "binary"), "01001000 01101001");
    assert_eq!(field(&view, "ascii"), "H i");
}

#[wasm_bindgen_test]
fn converter_reports_base64_padding_error() {
    let mut converter = BaseConverter::new(JsValue::NULL).expect("default config");
    let view = js_to_json(converter.edit("base64", "SGk").expect("edit base64"));
    let errors = view["errors"].as_array().cloned().unwrap_or_default();
    assert_eq!(errors.len(), 1);
    assert_eq!(field(&errors[0], "code"), "base64.bad_padding");
    assert_eq!(field(&errors[0], "field"), "base64");
}

#[wasm_bindgen_test]
fn converter_number_mode_locks_byte_fields() {
    let mut converter = BaseConverter::new(JsValue::UNDEFINED).expect("default config");
    converter.edit("decimal", "255").expect("edit decimal");
    assert!(!converter.is_editable("text").unwrap());
    assert_eq!(converter.copy("hex").unwrap(), "FF");

    let entry = js_to_json(converter.save().expect("history entry"));
    assert_eq!(field(&entry, "input"), "Dec: 255");

    let view = js_to_json(converter.clear_all().expect("clear all"));
    assert_eq!(field(&view, "mode"), "empty");
    assert!(converter.is_editable("text").unwrap());
}

#[wasm_bindgen_test]
fn converter_rejects_unknown_field() {
    let mut converter = BaseConverter::new(JsValue::UNDEFINED).expect("default config");
    assert!(converter.edit("octal", "7").is_err());
}

#[wasm_bindgen_test]
fn bytes_to_views_decodes_hex() {
    let map = js_to_json(bytes_to_views("hexBytes", "48 69").expect("hex bytes"));
    assert_eq!(field(&map, "text"), "Hi");
    assert_eq!(field(&map, "base64"), "SGk=");
}

#[wasm_bindgen_test]
fn convert_integer_decimal_255_flow() {
    let map = js_to_json(convert_integer("decimal", "255").expect("convert integer"));
    assert_eq!(field(&map, "binary"), "11111111");
    assert_eq!(field(&map, "hex"), "FF");
    assert_eq!(field(&map, "decimal"), "255");
}
