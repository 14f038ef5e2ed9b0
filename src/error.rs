//! Errors raised while building renderers.

/// Invalid renderer configuration, reported when the renderer is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("text max length must be at least 0 when text is included, not {max_length}")]
    NegativeMaxLength { max_length: i64 },
}
