//! Input/output element pairs.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use texfield_core::{FieldSurface, WidgetConfig};

use crate::error::BrowserError;

/// An `<input>` and the element its rendered math is written into.
#[derive(Debug, Clone)]
pub struct DomField {
    input: HtmlInputElement,
    output: HtmlElement,
}

impl DomField {
    pub fn new(input: HtmlInputElement, output: HtmlElement) -> Self {
        Self { input, output }
    }

    /// Find the input and output inside a widget container.
    ///
    /// `Ok(None)` when either element is missing or has the wrong type.
    pub fn from_container(
        container: &Element,
        config: &WidgetConfig,
    ) -> Result<Option<Self>, BrowserError> {
        let input = query(container, &config.input_selector)?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let output = query(container, &config.output_selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Ok(input.zip(output).map(|(input, output)| Self::new(input, output)))
    }

    /// Pair a preview input with the output in its `#input_group_{id}` wrapper.
    pub fn from_preview_input(
        document: &Document,
        input: HtmlInputElement,
        config: &WidgetConfig,
    ) -> Result<Option<Self>, BrowserError> {
        let id = input.id();
        if id.is_empty() {
            return Ok(None);
        }
        // Looked up by id, not selector: ids may hold characters like `:` or `.`.
        let Some(wrapper) = document.get_element_by_id(&format!("input_group_{id}")) else {
            return Ok(None);
        };
        let output = query(&wrapper, &config.output_selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Ok(output.map(|output| Self::new(input, output)))
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn output(&self) -> &HtmlElement {
        &self.output
    }
}

impl FieldSurface for DomField {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn set_output_html(&mut self, html: &str) {
        self.output.set_inner_html(html);
    }

    fn set_custom_validity(&mut self, message: &str) {
        self.input.set_custom_validity(message);
    }
}

fn query(container: &Element, selector: &str) -> Result<Option<Element>, BrowserError> {
    container
        .query_selector(selector)
        .map_err(|e| BrowserError::selector(selector, e))
}
