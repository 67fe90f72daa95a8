//! WASM bindings for texfield.
//!
//! Exposes the math field widgets to plain pages via wasm-bindgen:
//! call `mountFields()` once and keep the returned handle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use texfield_browser::{MountedWidget, WidgetConfig, document, mount_widgets, on_content_loaded};

mod types;

pub use types::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Host page may have installed one already
    let _ = set_global_default(Registry::default().with(wasm_layer));
}

/// Mount math fields on the current page.
///
/// # Arguments
/// * `config` - Optional `WidgetConfig` object (camelCase keys); missing keys
///   fall back to the defaults
///
/// Mounting waits for `DOMContentLoaded` if the page is still loading.
/// Widgets stay attached for as long as the returned handle is alive.
#[wasm_bindgen(js_name = mountFields)]
pub fn mount_fields(config: Option<JsValue>) -> Result<JsFieldSet, JsError> {
    let config: WidgetConfig = match config {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            serde_wasm_bindgen::from_value(value)
                .map_err(|e| JsError::new(&format!("Invalid field config: {}", e)))?
        }
        _ => WidgetConfig::default(),
    };
    config
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))?;

    let document = document().map_err(|e| JsError::new(&e.to_string()))?;
    let widgets: Rc<RefCell<Vec<MountedWidget>>> = Rc::default();

    let sink = Rc::clone(&widgets);
    let target = document.clone();
    let ready = on_content_loaded(&document, move || {
        match mount_widgets(&target, &config) {
            Ok(mounted) => sink.borrow_mut().extend(mounted),
            Err(err) => tracing::error!(%err, "failed to mount tex fields"),
        }
    });

    Ok(JsFieldSet::new(widgets, ready))
}

/// Render text with `$...$` math spans to markup.
///
/// # Arguments
/// * `text` - Raw field text; plain parts are passed through unescaped
#[wasm_bindgen(js_name = renderTex)]
pub fn render_tex(text: &str) -> JsRenderResult {
    match texfield_browser::render(text, &texfield_browser::PulldownEngine) {
        Ok(html) => JsRenderResult {
            success: true,
            html,
            error: None,
        },
        Err(err) => JsRenderResult {
            success: false,
            html: String::new(),
            error: Some(err.to_string()),
        },
    }
}

/// Whether `text` has an even number of `$`.
#[wasm_bindgen(js_name = evenDollars)]
pub fn even_dollars(text: &str) -> bool {
    texfield_browser::even_dollars(text)
}
