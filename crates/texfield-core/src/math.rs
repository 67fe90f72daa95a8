//! LaTeX math rendering via pulldown-latex → MathML

use pulldown_latex::{
    Parser, Storage, config::DisplayMode, config::RenderConfig, mathml::push_mathml,
};

use crate::error::RenderError;

/// Turns a single math source string into markup.
///
/// This is the seam to the typesetting engine. Widgets only ever see
/// `Ok(markup)` or a `RenderError` carrying the engine diagnostic.
pub trait MathEngine {
    /// Render `latex` (without delimiters). `display` selects block layout.
    fn render(&self, latex: &str, display: bool) -> Result<String, RenderError>;
}

impl<T: MathEngine + ?Sized> MathEngine for &T {
    fn render(&self, latex: &str, display: bool) -> Result<String, RenderError> {
        (*self).render(latex, display)
    }
}

/// The pulldown-latex engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownEngine;

impl MathEngine for PulldownEngine {
    fn render(&self, latex: &str, display: bool) -> Result<String, RenderError> {
        render_math(latex, display)
    }
}

/// Render LaTeX math to MathML
///
/// # Arguments
/// * `latex` - The LaTeX source string (without delimiters like $ or $$)
/// * `display_mode` - If true, render as display math (block); if false, inline
pub fn render_math(latex: &str, display_mode: bool) -> Result<String, RenderError> {
    let storage = Storage::new();
    let parser = Parser::new(latex, &storage);
    let config = RenderConfig {
        display_mode: if display_mode {
            DisplayMode::Block
        } else {
            DisplayMode::Inline
        },
        ..Default::default()
    };

    // push_mathml renders parse errors inline, so check for them first
    let events: Vec<_> = parser.collect();
    let errors: Vec<String> = events
        .iter()
        .filter_map(|e| e.as_ref().err().map(|err| err.to_string()))
        .collect();

    if !errors.is_empty() {
        return Err(RenderError::parse(latex, errors.join("; ")));
    }

    let mut mathml = String::new();
    push_mathml(&mut mathml, events.into_iter(), config)
        .map_err(|e| RenderError::Mathml(e.to_string()))?;
    Ok(mathml)
}
