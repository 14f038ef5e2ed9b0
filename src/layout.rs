//! Renderers for elements of declarative layout trees.
//!
//! Declarative UI toolkits describe screens as trees of layout elements rather
//! than widget objects. Such elements are exposed to renderers through the
//! [`LayoutNode`] capability, so the same nodes, renderer lists and text
//! policy apply to both kinds of hierarchy.

#[cfg(feature = "no_std")]
use alloc::format;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use spin::Lazy;

use crate::config::TextPolicy;
use crate::node::LayoutCapability;
use crate::renderers::{append_dimensions, append_text};
use crate::{ConfigError, StateRenderer, TextRendererConfig};

/// State of one element of a declarative layout tree.
pub trait LayoutNode {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Identifier given to the element by the layout author.
    fn layout_id(&self) -> Option<&str> {
        None
    }

    /// Tag used by UI tests to find the element.
    fn test_tag(&self) -> Option<&str> {
        None
    }

    /// Accessibility role, e.g. `Button` or `Checkbox`.
    fn role(&self) -> Option<&str> {
        None
    }

    /// Text exposed through the element's semantics. This is PII.
    fn text(&self) -> Option<&str> {
        None
    }

    fn is_focused(&self) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Renders the general state of a layout element.
///
/// Appends, in order: `layout-id:"<id>"`, `<width>x<height>px`,
/// `test-tag:"<tag>"`, `role:<role>`, `focused` and `disabled`.
pub static LAYOUT_RENDERER: Lazy<StateRenderer> = Lazy::new(|| {
    StateRenderer::for_capability::<LayoutCapability>(|out, layout| {
        if let Some(layout_id) = layout.layout_id() {
            out.append(&format!("layout-id:\"{layout_id}\""));
        }

        append_dimensions(out, layout.width(), layout.height());

        if let Some(test_tag) = layout.test_tag() {
            out.append(&format!("test-tag:\"{test_tag}\""));
        }
        if let Some(role) = layout.role() {
            out.append(&format!("role:{role}"));
        }
        if layout.is_focused() {
            out.append("focused");
        }
        if !layout.is_enabled() {
            out.append("disabled");
        }
    })
});

/// Layout defaults that never render text content.
pub static DEFAULTS_NO_PII: Lazy<Vec<StateRenderer>> = Lazy::new(|| {
    Vec::from([
        (*LAYOUT_RENDERER).clone(),
        layout_text_renderer_with(TextPolicy::LengthOnly),
    ])
});

/// Layout defaults that render text content, untruncated.
pub static DEFAULTS_INCLUDING_PII: Lazy<Vec<StateRenderer>> = Lazy::new(|| {
    Vec::from([
        (*LAYOUT_RENDERER).clone(),
        layout_text_renderer_with(TextPolicy::Content { max_length: None }),
    ])
});

/// Build a renderer for the semantic text of layout elements.
///
/// Follows the same policy as [`text_view_renderer`](crate::text_view_renderer).
///
/// # Errors
///
/// Returns [`ConfigError::NegativeMaxLength`] when text is included with a
/// negative maximum length.
pub fn layout_text_renderer(config: TextRendererConfig) -> Result<StateRenderer, ConfigError> {
    Ok(layout_text_renderer_with(config.validate()?))
}

fn layout_text_renderer_with(policy: TextPolicy) -> StateRenderer {
    StateRenderer::for_capability::<LayoutCapability>(move |out, layout| {
        append_text(out, layout.text(), policy);
    })
}
