use wasm_bindgen::prelude::*;

use crate::parse::TagTreeBuilder;

/// Build `markup` with the default configuration and return the tree outline.
#[wasm_bindgen]
pub fn outline(markup: &str) -> Result<String, JsValue> {
    TagTreeBuilder::default()
        .build(markup)
        .map(|tree| tree.to_string())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
