//! Server-side markup for a live math field.

use markdown_weaver_escape::escape_html;

use crate::config::MarkupConfig;

/// Wrap an already rendered `<input>` in the container the browser layer
/// mounts on (see `WidgetConfig::default`).
///
/// `id` and the hint are escaped, `input_markup` is inserted as-is.
pub fn field_markup(id: &str, input_markup: &str, config: &MarkupConfig) -> String {
    let mut escaped_id = String::new();
    let mut escaped_hint = String::new();
    // These won't fail writing to String
    let _ = escape_html(&mut escaped_id, id);
    let _ = escape_html(&mut escaped_hint, &config.hint);
    format!(
        r#"<div id="input_group_{escaped_id}" class="render-katex">
  <span class="latex-hint">{escaped_hint}</span>
  {input_markup}<br />
  <span class="katex-output"></span>
</div>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_input() {
        let html = field_markup(
            "title",
            r#"<input id="title" name="title" type="latex" value="">"#,
            &MarkupConfig::default(),
        );
        insta::assert_snapshot!(html.trim_end(), @r#"
        <div id="input_group_title" class="render-katex">
          <span class="latex-hint">LaTeX-Mathe möglich in $...$</span>
          <input id="title" name="title" type="latex" value=""><br />
          <span class="katex-output"></span>
        </div>
        "#);
    }

    #[test]
    fn escapes_id_and_hint() {
        let config = MarkupConfig {
            hint: "use <b>$</b>".to_owned(),
        };
        let html = field_markup(r#"a"b"#, "<input>", &config);
        assert!(html.contains(r#"id="input_group_a&quot;b""#));
        assert!(html.contains("use &lt;b&gt;$&lt;/b&gt;"));
        assert!(html.contains("<input><br />"));
    }
}
