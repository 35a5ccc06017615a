//! WASM bindings for browser-based formatting.
//!
//! This module exposes the core pipeline to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::font::{FontStyle, convert_to_unicode, convert_to_unicode_rich};
use crate::markdown::convert_markdown_to_fb;
use crate::post::post_process;
use crate::style::{PRESET_NAMES, style_config};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render Markdown to plain Unicode text using a named preset
/// (`minimal`, `structured`, or `social`), then post-process.
#[wasm_bindgen]
pub fn md_to_fb(markdown: &str, style: &str, pangu: bool) -> Result<String, JsValue> {
    let config = style_config(style).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let rendered = convert_markdown_to_fb(markdown, config);
    Ok(post_process(&rendered, pangu))
}

/// Apply one of the 19 font styles to plain text.
#[wasm_bindgen]
pub fn style_text(text: &str, style: &str) -> Result<String, JsValue> {
    let style: FontStyle = style
        .parse()
        .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?;
    Ok(convert_to_unicode(text, style))
}

/// Apply a font style and return per-character conversion info as JSON:
/// an array of `{char, converted}` records for live preview grids.
#[wasm_bindgen]
pub fn style_text_rich(text: &str, style: &str) -> Result<String, JsValue> {
    let style: FontStyle = style
        .parse()
        .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?;
    let rich = convert_to_unicode_rich(text, style);
    serde_json::to_string(&rich).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The accepted font style tags.
#[wasm_bindgen]
pub fn font_styles() -> Vec<String> {
    FontStyle::ALL.iter().map(|s| s.as_str().to_string()).collect()
}

/// The accepted preset names.
#[wasm_bindgen]
pub fn style_presets() -> Vec<String> {
    PRESET_NAMES.iter().map(|s| s.to_string()).collect()
}
