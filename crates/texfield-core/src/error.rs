use miette::Diagnostic;
use thiserror::Error;

/// Failure to turn a math span into markup.
///
/// The `Display` output is the engine's own diagnostic, which is what ends
/// up in the field's custom validity message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RenderError {
    #[error("{message}")]
    #[diagnostic(code(texfield::render::parse))]
    Parse {
        /// The LaTeX source that failed, without delimiters.
        latex: String,
        message: String,
    },

    #[error("failed to write MathML: {0}")]
    #[diagnostic(code(texfield::render::mathml))]
    Mathml(String),
}

impl RenderError {
    pub fn parse(latex: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            latex: latex.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    #[error("no math delimiters configured")]
    #[diagnostic(code(texfield::config::no_delimiters))]
    NoDelimiters,

    #[error("math delimiters need a non-empty left and right marker")]
    #[diagnostic(code(texfield::config::empty_delimiter))]
    EmptyDelimiter,

    #[error("selector `{0}` must not be empty")]
    #[diagnostic(code(texfield::config::empty_selector))]
    EmptySelector(&'static str),
}
