use wasm_bindgen::prelude::*;

/// `translate` for JavaScript callers. Errors are thrown as their message string.
#[wasm_bindgen(js_name = cxmlToXml)]
pub fn cxml_to_xml(cxml: &str) -> Result<String, JsValue> {
    crate::translate(cxml).map_err(|err| JsValue::from_str(&err.to_string()))
}
