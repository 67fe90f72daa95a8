//! The per-keystroke render-and-validate loop.
//!
//! `LiveField` owns one input/output pair through a [`FieldSurface`] and
//! keeps the field's custom validity in step with its content:
//! an odd number of `$` blocks submission without rendering, and any span the
//! engine rejects blocks submission with the engine's diagnostic.

use crate::auto_render::{Delimiter, render_in_place};
use crate::config::WidgetConfig;
use crate::math::MathEngine;
use crate::validate::{Validity, even_dollars};

/// The input and output elements a live field drives.
///
/// Implemented over the DOM by `texfield-browser`.
pub trait FieldSurface {
    /// Current raw value of the input.
    fn input_value(&self) -> String;

    /// Replace the output's content with `html`.
    fn set_output_html(&mut self, html: &str);

    /// Set the input's custom validity; empty clears it.
    fn set_custom_validity(&mut self, message: &str);
}

#[derive(Debug)]
pub struct LiveField<S, E> {
    surface: S,
    engine: E,
    delimiters: Vec<Delimiter>,
    unclosed_message: String,
    validity: Validity,
}

impl<S: FieldSurface, E: MathEngine> LiveField<S, E> {
    /// Attach to `surface` and render its initial value.
    pub fn new(surface: S, engine: E, config: &WidgetConfig) -> Self {
        let mut field = Self {
            surface,
            engine,
            delimiters: config.delimiters.clone(),
            unclosed_message: config.unclosed_message.clone(),
            validity: Validity::Valid,
        };
        field.update();
        field
    }

    /// Re-read the input, re-render the output and update validity.
    pub fn update(&mut self) -> &Validity {
        let raw = self.surface.input_value();
        self.surface.set_output_html(&raw);

        if !even_dollars(&raw) {
            let message = self.unclosed_message.clone();
            self.set_validity(Validity::Invalid(message));
            return &self.validity;
        }

        self.set_validity(Validity::Valid);

        let mut first_error = None;
        let html = render_in_place(&raw, &self.delimiters, &self.engine, |err, source| {
            tracing::debug!(%err, source, "math span failed to render");
            first_error.get_or_insert_with(|| err.to_string());
        });
        self.surface.set_output_html(&html);

        if let Some(message) = first_error {
            self.set_validity(Validity::Invalid(message));
        }
        &self.validity
    }

    fn set_validity(&mut self, validity: Validity) {
        self.surface.set_custom_validity(validity.message());
        self.validity = validity;
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
