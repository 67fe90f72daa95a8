//! Delimiter-driven rendering pass over a block of text.
//!
//! Unlike [`crate::render`], a span that fails to render is reported and
//! left as its literal source, and scanning carries on with later spans.

use serde::{Deserialize, Serialize};

use crate::entities::decode_entities;
use crate::error::RenderError;
use crate::math::MathEngine;

/// A pair of markers around a math span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiter {
    pub left: String,
    pub right: String,
    /// Render as block math.
    #[serde(default)]
    pub display: bool,
}

impl Delimiter {
    pub fn inline(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            display: false,
        }
    }

    pub fn display(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            display: true,
        }
    }

    /// `$...$` as inline math.
    pub fn dollars() -> Self {
        Self::inline("$", "$")
    }
}

/// Earliest left marker at or after `from`; earlier list entries win ties.
fn find_open<'d>(
    text: &str,
    from: usize,
    delimiters: &'d [Delimiter],
) -> Option<(usize, &'d Delimiter)> {
    let mut best: Option<(usize, &Delimiter)> = None;
    for delimiter in delimiters.iter().filter(|d| !d.left.is_empty()) {
        if let Some(offset) = text[from..].find(delimiter.left.as_str()) {
            let at = from + offset;
            if best.is_none_or(|(best_at, _)| at < best_at) {
                best = Some((at, delimiter));
            }
        }
    }
    best
}

/// Start of `right` closing a span whose body starts at `from`.
///
/// Markers inside `{...}` groups or escaped by a `\` do not close the span.
fn find_close(text: &str, from: usize, right: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut index = from;
    while index < bytes.len() {
        if depth == 0 && bytes[index..].starts_with(right.as_bytes()) {
            return Some(index);
        }
        match bytes[index] {
            b'\\' => index += 1,
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        index += 1;
    }
    None
}

/// Replace every delimited span in `text` with rendered markup.
///
/// `on_error` gets the failure and the span's source (delimiters included)
/// for each span the engine rejects. Character references in a span body
/// are decoded before rendering, as they would be in page text. Empty spans
/// and a left marker without a matching right marker are left as text.
pub fn render_in_place<E, F>(
    text: &str,
    delimiters: &[Delimiter],
    engine: &E,
    mut on_error: F,
) -> String
where
    E: MathEngine + ?Sized,
    F: FnMut(&RenderError, &str),
{
    let mut html = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some((start, delimiter)) = find_open(text, cursor, delimiters) {
        let body_start = start + delimiter.left.len();
        if delimiter.right.is_empty() {
            break;
        }
        let Some(body_end) = find_close(text, body_start, &delimiter.right) else {
            break;
        };
        let span_end = body_end + delimiter.right.len();
        let source = &text[start..span_end];
        let body = decode_entities(&text[body_start..body_end]);

        html.push_str(&text[cursor..start]);
        if body.is_empty() {
            html.push_str(source);
        } else {
            match engine.render(&body, delimiter.display) {
                Ok(markup) => html.push_str(&markup),
                Err(err) => {
                    on_error(&err, source);
                    html.push_str(source);
                }
            }
        }
        cursor = span_end;
    }

    html.push_str(&text[cursor..]);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::StubEngine;

    fn dollars() -> Vec<Delimiter> {
        vec![Delimiter::dollars()]
    }

    #[test]
    fn replaces_spans_in_order() {
        let html = render_in_place("Area = $r^2$, $r$", &dollars(), &StubEngine::default(), |_, _| {
            panic!("no errors expected")
        });
        assert_eq!(html, "Area = <m>r^2</m>, <m>r</m>");
    }

    #[test]
    fn continues_past_failing_span() {
        let engine = StubEngine::default();
        let mut failures = Vec::new();
        let html = render_in_place(r"$\badcmd$ and $y$", &dollars(), &engine, |err, source| {
            failures.push((err.to_string(), source.to_owned()));
        });
        assert_eq!(html, r"$\badcmd$ and <m>y</m>");
        assert_eq!(engine.calls.get(), 2);
        assert_eq!(
            failures,
            vec![("unknown primitive command found".to_owned(), r"$\badcmd$".to_owned())]
        );
    }

    #[test]
    fn unmatched_left_marker_is_text() {
        let html = render_in_place("$x$ costs $5", &dollars(), &StubEngine::default(), |_, _| {});
        assert_eq!(html, "<m>x</m> costs $5");
    }

    #[test]
    fn empty_span_is_text() {
        let engine = StubEngine::default();
        let html = render_in_place("a $$ b", &dollars(), &engine, |_, _| {});
        assert_eq!(html, "a $$ b");
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn earlier_delimiter_wins_ties() {
        let delimiters = vec![Delimiter::display("$$", "$$"), Delimiter::dollars()];
        let html = render_in_place(
            "$$x$$ and $y$",
            &delimiters,
            &StubEngine::default(),
            |_, _| {},
        );
        assert_eq!(html, "<mb>x</mb> and <m>y</m>");
    }

    #[test]
    fn bracket_delimiters() {
        let delimiters = vec![Delimiter::inline(r"\(", r"\)")];
        let html = render_in_place(r"see \(a+b\) here", &delimiters, &StubEngine::default(), |_, _| {});
        assert_eq!(html, "see <m>a+b</m> here");
    }

    #[test]
    fn dollar_inside_group_does_not_close() {
        let engine = StubEngine::default();
        let html = render_in_place("${a$b}$ end", &dollars(), &engine, |_, _| {
            panic!("no errors expected")
        });
        assert_eq!(html, "<m>{a$b}</m> end");
        assert_eq!(engine.calls.get(), 1);
    }

    #[test]
    fn escaped_dollar_does_not_close() {
        let html = render_in_place(r"$a\$b$", &dollars(), &StubEngine::default(), |_, _| {});
        assert_eq!(html, r"<m>a\$b</m>");
    }

    #[test]
    fn unbalanced_group_leaves_span_open() {
        let html = render_in_place("${a$ b", &dollars(), &StubEngine::default(), |_, _| {});
        assert_eq!(html, "${a$ b");
    }

    #[test]
    fn decodes_references_in_math_only() {
        let html = render_in_place(
            "x &lt; y: $a &lt; b$",
            &dollars(),
            &StubEngine::default(),
            |_, _| {},
        );
        assert_eq!(html, "x &lt; y: <m>a < b</m>");
    }

    #[test]
    fn deserializes_with_inline_default() {
        let delimiter: Delimiter = serde_json::from_str(r#"{"left":"$","right":"$"}"#).unwrap();
        assert_eq!(delimiter, Delimiter::dollars());
    }
}
