//! Crate error type

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call `{op}` failed: {message}")]
    Dom { op: &'static str, message: String },
    #[error("node is not an HTML element")]
    NotAnElement,
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
    #[error("options must be an object like {{ distance, strength, animationDuration }}, got {0}")]
    OptionsShape(String),
}

impl FxError {
    /// Wrap an exception thrown by the DOM during `op`
    pub fn dom(op: &'static str, err: &JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{err:?}"));
        Self::Dom { op, message }
    }
}

pub type Result<T, E = FxError> = std::result::Result<T, E>;
