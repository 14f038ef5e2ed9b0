//! Built-in state renderers and the default renderer sets.

#[cfg(feature = "no_std")]
use alloc::format;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use spin::Lazy;

use crate::config::TextPolicy;
use crate::node::{CheckableCapability, TextViewCapability, ViewCapability, Visibility};
use crate::{ellipsize, layout, AttributeAppendable, ConfigError, StateRenderer, TextRendererConfig};

/// Renders the general state of a view.
///
/// Appends, in order: `id:<name>` when the id resolves, `GONE` or
/// `INVISIBLE`, `<width>x<height>px`, `focused`, `disabled` and `selected`.
pub static VIEW_RENDERER: Lazy<StateRenderer> = Lazy::new(|| {
    StateRenderer::for_capability::<ViewCapability>(|out, view| {
        if let (Some(id), Some(resources)) = (view.id(), view.resources()) {
            match resources.entry_name(id) {
                Some(name) => out.append(&format!("id:{name}")),
                None => tracing::debug!(id = id.0, "view id has no resource entry"),
            }
        }

        match view.visibility() {
            Visibility::Gone => out.append("GONE"),
            Visibility::Invisible => out.append("INVISIBLE"),
            Visibility::Visible => {}
        }

        append_dimensions(out, view.width(), view.height());

        if view.is_focused() {
            out.append("focused");
        }
        if !view.is_enabled() {
            out.append("disabled");
        }
        if view.is_selected() {
            out.append("selected");
        }
    })
});

/// Appends `checked` for checked elements.
pub static CHECKABLE_RENDERER: Lazy<StateRenderer> = Lazy::new(|| {
    StateRenderer::for_capability::<CheckableCapability>(|out, checkable| {
        if checkable.is_checked() {
            out.append("checked");
        }
    })
});

/// Defaults that never render text content.
pub static DEFAULTS_NO_PII: Lazy<Vec<StateRenderer>> = Lazy::new(|| {
    let mut renderers = Vec::from([
        (*VIEW_RENDERER).clone(),
        text_renderer_with(TextPolicy::LengthOnly),
        (*CHECKABLE_RENDERER).clone(),
    ]);
    renderers.extend(layout::DEFAULTS_NO_PII.iter().cloned());
    renderers
});

/// Defaults that render text content, untruncated.
pub static DEFAULTS_INCLUDING_PII: Lazy<Vec<StateRenderer>> = Lazy::new(|| {
    let mut renderers = Vec::from([
        (*VIEW_RENDERER).clone(),
        text_renderer_with(TextPolicy::Content { max_length: None }),
        (*CHECKABLE_RENDERER).clone(),
    ]);
    renderers.extend(layout::DEFAULTS_INCLUDING_PII.iter().cloned());
    renderers
});

/// Build a renderer for text-bearing views.
///
/// Appends `text-length:<n>` whenever the view has text and, when
/// [`TextRendererConfig::include_text`] is set, `text:"<text>"` ellipsized to
/// the configured maximum length. Appends `ime-target` for the input method
/// target.
///
/// # Errors
///
/// Returns [`ConfigError::NegativeMaxLength`] when text is included with a
/// negative maximum length.
///
/// # Example
///
/// ```rust
/// use view_xray::testing::FakeNode;
/// use view_xray::{render_attributes, text_view_renderer, TextRendererConfig};
///
/// let renderer = text_view_renderer(TextRendererConfig::default().include_text(true).max_length(5))?;
/// let node = FakeNode::view("TextView").text("hello world");
///
/// assert_eq!(
///     render_attributes(&node, &[renderer]).as_slice(),
///     ["text-length:11", "text:\"hell…\""]
/// );
/// # Ok::<(), view_xray::ConfigError>(())
/// ```
pub fn text_view_renderer(config: TextRendererConfig) -> Result<StateRenderer, ConfigError> {
    Ok(text_renderer_with(config.validate()?))
}

fn text_renderer_with(policy: TextPolicy) -> StateRenderer {
    StateRenderer::for_capability::<TextViewCapability>(move |out, text_view| {
        append_text(out, text_view.text(), policy);
        if text_view.is_input_method_target() {
            out.append("ime-target");
        }
    })
}

pub(crate) fn append_text(out: &mut dyn AttributeAppendable, text: Option<&str>, policy: TextPolicy) {
    let Some(text) = text else {
        return;
    };
    out.append(&format!("text-length:{}", text.chars().count()));
    if let TextPolicy::Content { max_length } = policy {
        let text = match max_length {
            Some(max_length) => ellipsize(text, max_length),
            None => text.into(),
        };
        out.append(&format!("text:\"{text}\""));
    }
}

pub(crate) fn append_dimensions(out: &mut dyn AttributeAppendable, width: u32, height: u32) {
    out.append(&format!("{width}x{height}px"));
}
