use miette::Diagnostic;
use thiserror::Error;
use wasm_bindgen::JsValue;

use texfield_core::ConfigError;

#[derive(Debug, Error, Diagnostic)]
pub enum BrowserError {
    #[error("no global window")]
    #[diagnostic(code(texfield::browser::no_window))]
    NoWindow,

    #[error("window has no document")]
    #[diagnostic(code(texfield::browser::no_document))]
    NoDocument,

    #[error("query for `{selector}` failed: {message}")]
    #[diagnostic(code(texfield::browser::selector))]
    Selector { selector: String, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl BrowserError {
    pub(crate) fn selector(selector: &str, err: JsValue) -> Self {
        Self::Selector {
            selector: selector.to_owned(),
            message: js_message(&err),
        }
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
