//! Clipboard Commands
//!
//! Frontend wrapper for `navigator.clipboard.writeText`.

use thiserror::Error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Copy plain text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
}
