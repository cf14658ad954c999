//! WASM bindings for the figvue generator.
//!
//! Exposes `generate()`, `generateFromJson()` and `compile()` to JavaScript
//! via wasm-bindgen. Functions throw on malformed design nodes.

use wasm_bindgen::prelude::*;

/// Generate a `.vue` document from a design node given as a JS object.
#[wasm_bindgen]
pub fn generate(node: JsValue, component_name: &str) -> Result<String, JsError> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(node)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let root = figvue_model::decode::from_value(value).map_err(|e| JsError::new(&e.to_string()))?;

    Ok(figvue_codegen::generate_component(&root, component_name))
}

/// Generate a `.vue` document from a design node given as JSON text.
#[wasm_bindgen(js_name = generateFromJson)]
pub fn generate_from_json(source: &str, component_name: &str) -> Result<String, JsError> {
    let root = figvue_model::decode::from_json(source).map_err(|e| JsError::new(&e.to_string()))?;

    Ok(figvue_codegen::generate_component(&root, component_name))
}

/// Compile a design node (JSON text) into its three sections.
///
/// Returns a JS object with `{ template: string, script: string, style: string }`.
#[wasm_bindgen]
pub fn compile(source: &str, component_name: &str) -> Result<JsValue, JsError> {
    let root = figvue_model::decode::from_json(source).map_err(|e| JsError::new(&e.to_string()))?;
    let output = figvue_codegen::compile(&root, component_name);

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"template".into(), &output.template.into())
        .map_err(|_| JsError::new("Failed to set template property"))?;
    js_sys::Reflect::set(&js_obj, &"script".into(), &output.script.into())
        .map_err(|_| JsError::new("Failed to set script property"))?;
    js_sys::Reflect::set(&js_obj, &"style".into(), &output.style.into())
        .map_err(|_| JsError::new("Failed to set style property"))?;

    Ok(js_obj.into())
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
