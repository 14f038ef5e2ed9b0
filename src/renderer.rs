//! State renderer abstraction and per-node rendering.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::format;
#[cfg(feature = "no_std")]
use alloc::string::String;

use core::any::type_name;
use core::fmt;

use portable_atomic_util::Arc;

use crate::node::{Capability, Concrete, ScannableNode};
use crate::{AttributeAppendable, AttributeList};

type RenderFn = Box<dyn Fn(&mut dyn AttributeAppendable, &dyn ScannableNode) + Send + Sync>;

/// A unit of rendering logic contributing attributes to a node's description.
///
/// A renderer targets one [`Capability`]. Applied to a node that does not
/// present that capability, it appends nothing and does not fail, so any
/// renderer can be applied to any node.
///
/// Renderers are immutable. Cloning one is cheap and shares the same render
/// function, so built-in renderers can be mixed freely into custom lists.
///
/// # Example
///
/// ```rust
/// use view_xray::testing::FakeNode;
/// use view_xray::{render_attributes, CheckableCapability, StateRenderer};
///
/// let toggle = StateRenderer::for_capability::<CheckableCapability>(|out, checkable| {
///     out.append(if checkable.is_checked() { "on" } else { "off" });
/// });
///
/// let switch = FakeNode::view("Switch").checked(true);
/// let label = FakeNode::view("Label");
///
/// assert_eq!(render_attributes(&switch, &[toggle.clone()]).as_slice(), ["on"]);
/// assert!(render_attributes(&label, &[toggle]).is_empty());
/// ```
#[derive(Clone)]
pub struct StateRenderer {
    label: &'static str,
    render: Arc<RenderFn>,
}

impl StateRenderer {
    /// Create a renderer acting on the node itself.
    ///
    /// Prefer [`for_capability`](Self::for_capability) unless the renderer
    /// needs to combine several capabilities of the same node.
    pub fn new<F>(label: &'static str, render: F) -> Self
    where
        F: Fn(&mut dyn AttributeAppendable, &dyn ScannableNode) + Send + Sync + 'static,
    {
        Self {
            label,
            render: Arc::new(Box::new(render) as RenderFn),
        }
    }

    /// Create a renderer for nodes presenting capability `C`.
    ///
    /// `render` only runs when `C` matches, and receives the matched object.
    pub fn for_capability<C: Capability>(
        render: impl Fn(&mut dyn AttributeAppendable, &C::Target) + Send + Sync + 'static,
    ) -> Self {
        Self::new(type_name::<C>(), move |out, node| {
            let Some(target) = C::query(node) else {
                tracing::trace!(
                    capability = type_name::<C>(),
                    node = node.display_name(),
                    "capability not present, skipping"
                );
                return;
            };
            render(out, target);
        })
    }

    /// Create a renderer for nodes whose underlying object is a `T`.
    pub fn for_type<T: core::any::Any>(
        render: impl Fn(&mut dyn AttributeAppendable, &T) + Send + Sync + 'static,
    ) -> Self {
        Self::for_capability::<Concrete<T>>(render)
    }

    /// Name used to identify this renderer in logs.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Apply this renderer to one node.
    pub fn render(&self, out: &mut dyn AttributeAppendable, node: &dyn ScannableNode) {
        (self.render)(out, node);
    }
}

impl fmt::Debug for StateRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRenderer")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Apply `renderers` in order to `node` and collect the attributes.
///
/// With the standard library available, a renderer that panics is skipped
/// and logged; the attributes it appended before panicking are kept and the
/// remaining renderers still run.
pub fn render_attributes(node: &dyn ScannableNode, renderers: &[StateRenderer]) -> AttributeList {
    let mut attributes = AttributeList::new();
    for renderer in renderers {
        render_isolated(renderer, &mut attributes, node);
    }
    attributes
}

#[cfg(not(feature = "no_std"))]
fn render_isolated(
    renderer: &StateRenderer,
    attributes: &mut AttributeList,
    node: &dyn ScannableNode,
) {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    if catch_unwind(AssertUnwindSafe(|| renderer.render(attributes, node))).is_err() {
        tracing::warn!(
            renderer = renderer.label(),
            node = node.display_name(),
            "state renderer panicked, attributes may be incomplete"
        );
    }
}

#[cfg(feature = "no_std")]
fn render_isolated(
    renderer: &StateRenderer,
    attributes: &mut AttributeList,
    node: &dyn ScannableNode,
) {
    renderer.render(attributes, node);
}

/// Render one node's line of output: `"<display name> { a, b, c }"`.
///
/// # Example
///
/// ```rust
/// use view_xray::testing::FakeNode;
/// use view_xray::{describe, VIEW_RENDERER};
///
/// let node = FakeNode::view("Button").size(100, 40).focused();
///
/// assert_eq!(
///     describe(&node, &[(*VIEW_RENDERER).clone()]),
///     "Button { 100x40px, focused }"
/// );
/// ```
pub fn describe(node: &dyn ScannableNode, renderers: &[StateRenderer]) -> String {
    let attributes = render_attributes(node, renderers);
    if attributes.is_empty() {
        format!("{} {{ }}", node.display_name())
    } else {
        format!("{} {{ {} }}", node.display_name(), attributes)
    }
}
