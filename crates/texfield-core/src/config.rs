use serde::{Deserialize, Serialize};

use crate::auto_render::Delimiter;
use crate::error::ConfigError;
use crate::validate::UNCLOSED_MESSAGE;

/// Which widget to attach to matching elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetMode {
    /// Render-and-validate on every keystroke, blocking submission on errors.
    #[default]
    Live,
    /// Recompute a rendered preview only; failures are logged.
    Preview,
}

/// Settings for mounting widgets on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub mode: WidgetMode,
    /// Wrapper elements holding an input and an output (live mode).
    pub container_selector: String,
    /// The input inside a container.
    pub input_selector: String,
    /// The rendered output inside a container.
    pub output_selector: String,
    /// Inputs to attach a preview to (preview mode).
    pub preview_input_selector: String,
    /// Custom validity message for an odd number of `$`.
    pub unclosed_message: String,
    /// Math delimiters recognised by the live widget.
    pub delimiters: Vec<Delimiter>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mode: WidgetMode::default(),
            container_selector: "div.render-katex".to_owned(),
            input_selector: "input".to_owned(),
            output_selector: "span.katex-output".to_owned(),
            preview_input_selector: r#"[type="latex"]"#.to_owned(),
            unclosed_message: UNCLOSED_MESSAGE.to_owned(),
            delimiters: vec![Delimiter::dollars()],
        }
    }
}

impl WidgetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("containerSelector", &self.container_selector),
            ("inputSelector", &self.input_selector),
            ("outputSelector", &self.output_selector),
            ("previewInputSelector", &self.preview_input_selector),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(ConfigError::EmptySelector(*name));
        }
        if self.delimiters.is_empty() {
            return Err(ConfigError::NoDelimiters);
        }
        if self
            .delimiters
            .iter()
            .any(|d| d.left.is_empty() || d.right.is_empty())
        {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }
}

/// Settings for the server-rendered widget wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Hint shown above the input.
    pub hint: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            hint: "LaTeX-Mathe möglich in $...$".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(WidgetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"mode":"preview","unclosedMessage":"Offenes $"}"#).unwrap();
        assert_eq!(config.mode, WidgetMode::Preview);
        assert_eq!(config.unclosed_message, "Offenes $");
        assert_eq!(config.container_selector, "div.render-katex");
        assert_eq!(config.delimiters, vec![Delimiter::dollars()]);
    }

    #[test]
    fn rejects_empty_delimiters() {
        let config = WidgetConfig {
            delimiters: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoDelimiters));

        let config = WidgetConfig {
            delimiters: vec![Delimiter::inline("$", "")],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyDelimiter));
    }

    #[test]
    fn rejects_blank_selector() {
        let config = WidgetConfig {
            output_selector: " ".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptySelector("outputSelector"))
        );
    }
}
