#![cfg_attr(feature = "no_std", no_std)]

//! Pluggable state renderers for dumping UI view hierarchies as text.
//!
//! A hierarchy dump prints one line per node, e.g.
//! `TextView { id:title, 320x48px, text-length:11 }`. This crate produces the
//! attributes of such a line. Walking the hierarchy and drawing the tree are
//! left to the caller.
//!
//! Attributes come from an ordered list of [`StateRenderer`]s. Each renderer
//! targets one [`Capability`] of the node's underlying object (general view
//! state, a checked state, text content, ...) and appends zero or more
//! attributes to an [`AttributeAppendable`]. Renderers that do not apply to a
//! node append nothing, so one list serves every node of a hierarchy.
//!
//! User-visible text is treated as PII: [`DEFAULTS_NO_PII`] only reports its
//! length, while [`DEFAULTS_INCLUDING_PII`] and [`text_view_renderer`] can
//! include it, ellipsized to a configured length.
//!
//! ## Example
//!
//! ```rust
//! use view_xray::{describe, ScannableNode, StateRenderer, TextView, DEFAULTS_INCLUDING_PII};
//!
//! struct Label { text: String }
//!
//! impl TextView for Label {
//!     fn text(&self) -> Option<&str> { Some(&self.text) }
//! }
//!
//! impl ScannableNode for Label {
//!     fn display_name(&self) -> &str { "Label" }
//!     fn as_text_view(&self) -> Option<&(dyn TextView + 'static)> { Some(self) }
//! }
//!
//! let label = Label { text: "hello world".to_string() };
//!
//! let mut renderers = DEFAULTS_INCLUDING_PII.to_vec();
//! renderers.push(StateRenderer::new("bold", |out, _node| out.append("bold")));
//!
//! assert_eq!(
//!     describe(&label, &renderers),
//!     "Label { text-length:11, text:\"hello world\", bold }"
//! );
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod appendable;
mod config;
mod error;
pub mod layout;
mod node;
mod renderer;
mod renderers;
mod truncate;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Public re-exports
pub use appendable::{AttributeAppendable, AttributeList};
pub use config::TextRendererConfig;
pub use error::ConfigError;
pub use layout::{layout_text_renderer, LayoutNode, LAYOUT_RENDERER};
pub use node::{
    Capability, Checkable, CheckableCapability, Concrete, LayoutCapability, ResourceId,
    Resources, ScannableNode, TextView, TextViewCapability, View, ViewCapability, Visibility,
};
pub use renderer::{describe, render_attributes, StateRenderer};
pub use renderers::{
    text_view_renderer, CHECKABLE_RENDERER, DEFAULTS_INCLUDING_PII, DEFAULTS_NO_PII, VIEW_RENDERER,
};
pub use truncate::{ellipsize, ELLIPSIS};
