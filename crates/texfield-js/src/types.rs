//! Types exposed to JavaScript via wasm-bindgen.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use texfield_browser::MountedWidget;

/// Result from rendering field text.
#[wasm_bindgen]
pub struct JsRenderResult {
    pub success: bool,
    #[wasm_bindgen(getter_with_clone)]
    pub html: String,
    #[wasm_bindgen(getter_with_clone)]
    pub error: Option<String>,
}

/// Handle to the widgets mounted by `mountFields()`.
///
/// Dropping it (or calling `free()`) detaches every widget.
#[wasm_bindgen]
pub struct JsFieldSet {
    widgets: Rc<RefCell<Vec<MountedWidget>>>,
    _ready: Option<EventListener>,
}

impl JsFieldSet {
    pub(crate) fn new(
        widgets: Rc<RefCell<Vec<MountedWidget>>>,
        ready: Option<EventListener>,
    ) -> Self {
        Self {
            widgets,
            _ready: ready,
        }
    }
}

#[wasm_bindgen]
impl JsFieldSet {
    /// Number of mounted widgets (0 until the page has loaded).
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.widgets.borrow().len()
    }

    /// Ids of the inputs the widgets are attached to.
    #[wasm_bindgen(js_name = inputIds)]
    pub fn input_ids(&self) -> Vec<String> {
        self.widgets
            .borrow()
            .iter()
            .map(|widget| widget.input().id())
            .collect()
    }

    /// Re-render every widget, e.g. after setting input values from script.
    pub fn refresh(&self) {
        for widget in self.widgets.borrow().iter() {
            widget.refresh();
        }
    }
}
