//! Finding widget elements on a page and keeping them wired up.
//!
//! Every matched element gets its own widget instance. A mounted widget
//! owns its `input` listener; dropping it detaches the widget.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, NodeList};

use texfield_core::{
    FieldSurface, LiveField, PulldownEngine, RenderedView, Validity, WidgetConfig, WidgetMode,
};

use crate::error::BrowserError;
use crate::field::DomField;

pub type DomLiveField = LiveField<DomField, PulldownEngine>;

/// The page's document.
pub fn document() -> Result<Document, BrowserError> {
    web_sys::window()
        .ok_or(BrowserError::NoWindow)?
        .document()
        .ok_or(BrowserError::NoDocument)
}

/// Run `f` once the document's structure has loaded.
///
/// Runs immediately unless the document is still loading. The returned
/// listener must be kept alive until it fires.
pub fn on_content_loaded<F>(document: &Document, f: F) -> Option<EventListener>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        Some(EventListener::once(document, "DOMContentLoaded", move |_| f()))
    } else {
        f();
        None
    }
}

/// A live render-and-validate field attached to the page.
pub struct MountedField {
    field: Rc<RefCell<DomLiveField>>,
    _listener: EventListener,
}

impl MountedField {
    /// Render the initial value and re-run on every `input` event.
    pub fn mount(dom: DomField, config: &WidgetConfig) -> Self {
        let input = dom.input().clone();
        let field = Rc::new(RefCell::new(LiveField::new(dom, PulldownEngine, config)));

        let handle = Rc::clone(&field);
        let listener = EventListener::new(&input, "input", move |_event| {
            match handle.try_borrow_mut() {
                Ok(mut field) => {
                    field.update();
                }
                Err(_) => tracing::debug!("tex field busy, skipping nested input event"),
            }
        });

        Self {
            field,
            _listener: listener,
        }
    }

    /// Re-run the loop without waiting for an input event.
    pub fn update(&self) -> Validity {
        self.field.borrow_mut().update().clone()
    }

    pub fn validity(&self) -> Validity {
        self.field.borrow().validity().clone()
    }

    pub fn input(&self) -> HtmlInputElement {
        self.field.borrow().surface().input().clone()
    }
}

/// A preview that re-renders the whole input on change.
///
/// Failed renders leave the previous preview on screen and never touch
/// the field's validity.
pub struct MountedPreview {
    dom: DomField,
    view: Rc<RefCell<RenderedView<PulldownEngine>>>,
    _listener: EventListener,
}

impl MountedPreview {
    pub fn mount(dom: DomField) -> Self {
        let view = RenderedView::with_input(PulldownEngine, &dom.input_value());
        dom.output().set_inner_html(view.output());
        let view = Rc::new(RefCell::new(view));

        let handle = Rc::clone(&view);
        let target = dom.clone();
        let listener = EventListener::new(dom.input(), "input", move |_event| {
            let Ok(mut view) = handle.try_borrow_mut() else {
                return;
            };
            if view.update(&target.input_value()) {
                target.output().set_inner_html(view.output());
            }
        });

        Self {
            dom,
            view,
            _listener: listener,
        }
    }

    /// The last successfully rendered markup.
    pub fn output(&self) -> String {
        self.view.borrow().output().to_owned()
    }

    pub fn input(&self) -> &HtmlInputElement {
        self.dom.input()
    }
}

pub enum MountedWidget {
    Live(MountedField),
    Preview(MountedPreview),
}

impl MountedWidget {
    pub fn input(&self) -> HtmlInputElement {
        match self {
            MountedWidget::Live(field) => field.input(),
            MountedWidget::Preview(preview) => preview.input().clone(),
        }
    }

    /// Recompute as if the input had changed.
    pub fn refresh(&self) {
        match self {
            MountedWidget::Live(field) => {
                field.update();
            }
            MountedWidget::Preview(preview) => {
                let mut view = preview.view.borrow_mut();
                if view.update(&preview.dom.input_value()) {
                    preview.dom.output().set_inner_html(view.output());
                }
            }
        }
    }
}

fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

fn query_all(document: &Document, selector: &str) -> Result<NodeList, BrowserError> {
    document
        .query_selector_all(selector)
        .map_err(|e| BrowserError::selector(selector, e))
}

/// Mount a live field on every container matching `container_selector`.
///
/// Containers without a usable input and output are skipped, as are
/// containers whose lookups fail.
pub fn mount_live_fields(
    document: &Document,
    config: &WidgetConfig,
) -> Result<Vec<MountedField>, BrowserError> {
    config.validate()?;
    let containers = query_all(document, &config.container_selector)?;

    let mut mounted = Vec::new();
    for container in elements(&containers) {
        match DomField::from_container(&container, config) {
            Ok(Some(dom)) => mounted.push(MountedField::mount(dom, config)),
            Ok(None) => tracing::warn!(
                id = %container.id(),
                "tex field container is missing its input or output, skipping"
            ),
            Err(err) => tracing::warn!(
                id = %container.id(),
                %err,
                "failed to look up tex field elements, skipping"
            ),
        }
    }

    tracing::debug!(count = mounted.len(), "mounted live tex fields");
    Ok(mounted)
}

/// Mount a preview on every input matching `preview_input_selector`.
///
/// One input without a usable output never stops the others from mounting.
pub fn mount_preview_fields(
    document: &Document,
    config: &WidgetConfig,
) -> Result<Vec<MountedPreview>, BrowserError> {
    config.validate()?;
    let inputs = query_all(document, &config.preview_input_selector)?;

    let mut mounted = Vec::new();
    for element in elements(&inputs) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let id = input.id();
        match DomField::from_preview_input(document, input, config) {
            Ok(Some(dom)) => mounted.push(MountedPreview::mount(dom)),
            Ok(None) => tracing::warn!(%id, "no preview output for tex input, skipping"),
            Err(err) => tracing::warn!(%id, %err, "failed to look up tex preview output, skipping"),
        }
    }

    tracing::debug!(count = mounted.len(), "mounted tex previews");
    Ok(mounted)
}

/// Mount whichever widget `config.mode` selects.
pub fn mount_widgets(
    document: &Document,
    config: &WidgetConfig,
) -> Result<Vec<MountedWidget>, BrowserError> {
    Ok(match config.mode {
        WidgetMode::Live => mount_live_fields(document, config)?
            .into_iter()
            .map(MountedWidget::Live)
            .collect(),
        WidgetMode::Preview => mount_preview_fields(document, config)?
            .into_iter()
            .map(MountedWidget::Preview)
            .collect(),
    })
}
