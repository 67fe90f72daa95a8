//! Splitting raw field text into plain and math segments.

use std::ops::Range;

/// Toggles between plain text and math.
pub const DELIMITER: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    PlainText,
    MathSpan,
}

/// A run of the input classified as plain text or math source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Content without delimiters.
    pub text: String,
    /// Byte range in the input, delimiters included.
    pub range: Range<usize>,
}

impl Segment {
    fn plain(text: &str, range: Range<usize>) -> Self {
        Self {
            kind: SegmentKind::PlainText,
            text: text.to_owned(),
            range,
        }
    }

    fn math(text: &str, range: Range<usize>) -> Self {
        Self {
            kind: SegmentKind::MathSpan,
            text: text.to_owned(),
            range,
        }
    }

    pub fn is_math(&self) -> bool {
        self.kind == SegmentKind::MathSpan
    }

    /// The substring of the input this segment came from.
    pub fn source(&self) -> String {
        match self.kind {
            SegmentKind::PlainText => self.text.clone(),
            SegmentKind::MathSpan => format!("{DELIMITER}{}{DELIMITER}", self.text),
        }
    }
}

/// Split `input` into alternating plain and math segments.
///
/// Empty runs (including `$$`) produce no segment. When the last `$` has no
/// partner, it and everything after it stay plain text.
pub fn split_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while cursor < input.len() {
        let rest = &input[cursor..];
        let Some(open) = rest.find(DELIMITER) else {
            segments.push(Segment::plain(rest, cursor..input.len()));
            break;
        };

        let body_start = cursor + open + DELIMITER.len_utf8();
        let Some(close) = input[body_start..].find(DELIMITER) else {
            segments.push(Segment::plain(rest, cursor..input.len()));
            break;
        };
        let body_end = body_start + close;

        if open > 0 {
            segments.push(Segment::plain(&rest[..open], cursor..cursor + open));
        }
        if close > 0 {
            segments.push(Segment::math(
                &input[body_start..body_end],
                cursor + open..body_end + DELIMITER.len_utf8(),
            ));
        }
        cursor = body_end + DELIMITER.len_utf8();
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        split_segments(input)
            .iter()
            .map(|s| {
                if s.is_math() {
                    format!("${}", s.text)
                } else {
                    s.text.clone()
                }
            })
            .collect()
    }

    fn reconstruct(input: &str) -> String {
        split_segments(input).iter().map(Segment::source).collect()
    }

    #[test]
    fn plain_math_plain() {
        insta::assert_debug_snapshot!(split_segments("a$b$c"), @r#"
        [
            Segment {
                kind: PlainText,
                text: "a",
                range: 0..1,
            },
            Segment {
                kind: MathSpan,
                text: "b",
                range: 1..4,
            },
            Segment {
                kind: PlainText,
                text: "c",
                range: 4..5,
            },
        ]
        "#);
    }

    #[test]
    fn adjacent_math_spans() {
        assert_eq!(texts("$x$$y$"), vec!["$x", "$y"]);
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn empty_math_is_dropped() {
        assert_eq!(texts("a$$b"), vec!["a", "b"]);
    }

    #[test]
    fn unterminated_dollar_stays_plain() {
        assert_eq!(texts("a$b"), vec!["a$b"]);
        assert_eq!(texts("$x$ and $y"), vec!["$x", " and $y"]);
        assert_eq!(texts("$unclosed"), vec!["$unclosed"]);
    }

    #[test]
    fn ranges_cover_the_input() {
        let input = "Area = $r^2$, radius $r$.";
        let segments = split_segments(input);
        for segment in &segments {
            assert_eq!(&input[segment.range.clone()], segment.source());
        }
        let covered: usize = segments.iter().map(|s| s.range.len()).sum();
        assert_eq!(covered, input.len());
    }

    #[test]
    fn multibyte_text_is_kept_intact() {
        assert_eq!(texts("Fläche $ä^2$ ü"), vec!["Fläche ", "$ä^2", " ü"]);
    }

    #[test]
    fn reconstruction_is_exact() {
        let inputs = [
            "",
            "plain",
            "$x$",
            "a$b$c",
            "$x$$y$",
            "Area = $r^2$",
            "$\\frac{1}{2}$ of $n$ items",
            "odd $ count",
            "trailing $x$ then $",
            "€ $\\alpha$ ß",
        ];
        for input in inputs {
            assert_eq!(reconstruct(input), input, "input: {input:?}");
        }
    }
}
