//! Whole-string rendering for the preview widget.

use crate::error::RenderError;
use crate::math::MathEngine;
use crate::segment::{Segment, SegmentKind, split_segments};

/// Concatenate plain segments verbatim and math segments as inline markup.
///
/// Plain text is not escaped. The first failing math segment aborts the pass.
pub fn render_segments<E: MathEngine + ?Sized>(
    segments: &[Segment],
    engine: &E,
) -> Result<String, RenderError> {
    let mut html = String::new();
    for segment in segments {
        match segment.kind {
            SegmentKind::PlainText => html.push_str(&segment.text),
            SegmentKind::MathSpan => html.push_str(&engine.render(&segment.text, false)?),
        }
    }
    Ok(html)
}

pub fn render<E: MathEngine + ?Sized>(input: &str, engine: &E) -> Result<String, RenderError> {
    render_segments(&split_segments(input), engine)
}

/// Rendered output recomputed from the input on every change.
///
/// A failed pass is logged and leaves the previous output in place.
#[derive(Debug)]
pub struct RenderedView<E> {
    engine: E,
    output: String,
}

impl<E: MathEngine> RenderedView<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            output: String::new(),
        }
    }

    /// Create a view and render `input` once.
    pub fn with_input(engine: E, input: &str) -> Self {
        let mut view = Self::new(engine);
        view.update(input);
        view
    }

    /// Recompute from `input`. Returns true when the output was replaced.
    pub fn update(&mut self, input: &str) -> bool {
        match render(input, &self.engine) {
            Ok(html) => {
                self.output = html;
                true
            }
            Err(err) => {
                tracing::warn!(%err, "error while rendering tex, keeping previous output");
                false
            }
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::math::PulldownEngine;

    /// Wraps math in `<m>` and rejects `\badcmd`.
    #[derive(Default)]
    pub(crate) struct StubEngine {
        pub calls: Cell<usize>,
    }

    impl MathEngine for StubEngine {
        fn render(&self, latex: &str, display: bool) -> Result<String, RenderError> {
            self.calls.set(self.calls.get() + 1);
            if latex.contains(r"\badcmd") {
                return Err(RenderError::parse(latex, "unknown primitive command found"));
            }
            let tag = if display { "mb" } else { "m" };
            Ok(format!("<{tag}>{latex}</{tag}>"))
        }
    }

    #[test]
    fn renders_math_between_plain_text() {
        let html = render("a$b$c", &StubEngine::default()).unwrap();
        assert_eq!(html, "a<m>b</m>c");
    }

    #[test]
    fn plain_text_is_not_escaped() {
        let html = render("<b>bold</b> $x$", &StubEngine::default()).unwrap();
        assert_eq!(html, "<b>bold</b> <m>x</m>");
    }

    #[test]
    fn first_failure_aborts_the_pass() {
        let engine = StubEngine::default();
        let err = render(r"$\badcmd$ then $y$", &engine).unwrap_err();
        assert!(matches!(err, RenderError::Parse { .. }));
        assert_eq!(engine.calls.get(), 1);
    }

    #[test]
    fn view_keeps_last_good_output() {
        let mut view = RenderedView::with_input(StubEngine::default(), "Area = $r^2$");
        assert_eq!(view.output(), "Area = <m>r^2</m>");

        assert!(!view.update(r"Area = $\badcmd$"));
        assert_eq!(view.output(), "Area = <m>r^2</m>");

        assert!(view.update("Area = $r$"));
        assert_eq!(view.output(), "Area = <m>r</m>");
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut view = RenderedView::new(PulldownEngine);
        view.update("Area = $r^2$");
        let first = view.output().to_owned();
        view.update("Area = $r^2$");
        assert_eq!(view.output(), first);
        assert!(first.starts_with("Area = <math"));
    }
}
