//! Configuration of text-content rendering.

use crate::ConfigError;

/// Options for renderers that report text content.
///
/// The defaults are PII-safe: only the text length is rendered, never the
/// text itself.
///
/// # Example
///
/// ```rust
/// use view_xray::{text_view_renderer, ConfigError, TextRendererConfig};
///
/// let config = TextRendererConfig::default().include_text(true).max_length(20);
/// assert!(text_view_renderer(config).is_ok());
///
/// let invalid = TextRendererConfig::default().include_text(true).max_length(-1);
/// assert_eq!(
///     text_view_renderer(invalid).unwrap_err(),
///     ConfigError::NegativeMaxLength { max_length: -1 }
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextRendererConfig {
    /// Whether to render the text content. Defaults to `false`.
    pub include_text: bool,
    /// Maximum rendered text length in characters when `include_text` is
    /// set. `None`, the default, means unbounded.
    pub max_length: Option<i64>,
}

impl TextRendererConfig {
    /// Set whether the text content is rendered.
    #[must_use]
    pub fn include_text(mut self, include_text: bool) -> Self {
        self.include_text = include_text;
        self
    }

    /// Limit rendered text to `max_length` characters.
    #[must_use]
    pub fn max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Remove any limit on rendered text length.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_length = None;
        self
    }

    pub(crate) fn validate(self) -> Result<TextPolicy, ConfigError> {
        if !self.include_text {
            return Ok(TextPolicy::LengthOnly);
        }
        let max_length = match self.max_length {
            None => None,
            Some(max_length) => Some(
                usize::try_from(max_length)
                    .map_err(|_| ConfigError::NegativeMaxLength { max_length })?,
            ),
        };
        Ok(TextPolicy::Content { max_length })
    }
}

/// Validated form of [`TextRendererConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextPolicy {
    LengthOnly,
    Content { max_length: Option<usize> },
}
