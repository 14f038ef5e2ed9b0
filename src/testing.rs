//! Test doubles for exercising state renderers.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::collections::BTreeMap;
#[cfg(feature = "no_std")]
use alloc::string::String;
#[cfg(not(feature = "no_std"))]
use std::collections::BTreeMap;

use core::any::Any;

use crate::layout::LayoutNode;
use crate::node::{Checkable, ResourceId, Resources, ScannableNode, TextView, View, Visibility};

/// In-memory node with configurable capabilities.
///
/// Only available with the `testing` feature.
///
/// A node starts out exposing either [`View`] ([`FakeNode::view`]) or
/// [`LayoutNode`] ([`FakeNode::layout`]). Setting a checked state makes it
/// [`Checkable`], and setting text makes a view a [`TextView`].
///
/// # Example
///
/// ```rust
/// use view_xray::testing::FakeNode;
/// use view_xray::{render_attributes, ResourceId, DEFAULTS_NO_PII};
///
/// let node = FakeNode::view("EditText")
///     .resource_entry(ResourceId(7), "username")
///     .size(320, 48)
///     .text("jane");
///
/// assert_eq!(
///     render_attributes(&node, &DEFAULTS_NO_PII).as_slice(),
///     ["id:username", "320x48px", "text-length:4"]
/// );
/// ```
pub struct FakeNode {
    name: String,
    is_view: bool,
    is_layout: bool,
    is_text_view: bool,
    id: Option<ResourceId>,
    resources: Option<Box<dyn Resources>>,
    visibility: Visibility,
    width: u32,
    height: u32,
    focused: bool,
    enabled: bool,
    selected: bool,
    checked: Option<bool>,
    text: Option<String>,
    input_method_target: bool,
    layout_id: Option<String>,
    test_tag: Option<String>,
    role: Option<String>,
}

impl FakeNode {
    /// A widget node exposing [`View`].
    pub fn view(name: impl Into<String>) -> Self {
        Self {
            is_view: true,
            ..Self::blank(name.into())
        }
    }

    /// A declarative layout element exposing [`LayoutNode`].
    pub fn layout(name: impl Into<String>) -> Self {
        Self {
            is_layout: true,
            ..Self::blank(name.into())
        }
    }

    fn blank(name: String) -> Self {
        Self {
            name,
            is_view: false,
            is_layout: false,
            is_text_view: false,
            id: None,
            resources: None,
            visibility: Visibility::Visible,
            width: 0,
            height: 0,
            focused: false,
            enabled: true,
            selected: false,
            checked: None,
            text: None,
            input_method_target: false,
            layout_id: None,
            test_tag: None,
            role: None,
        }
    }

    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Assign an id without attaching a resource table.
    #[must_use]
    pub fn id(mut self, id: ResourceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach the resource table used to resolve the id.
    #[must_use]
    pub fn resources(mut self, resources: impl Resources + 'static) -> Self {
        self.resources = Some(Box::new(resources));
        self
    }

    /// Assign an id and a resource table resolving it to `entry_name`.
    #[must_use]
    pub fn resource_entry(self, id: ResourceId, entry_name: impl Into<String>) -> Self {
        let table = BTreeMap::from([(id, entry_name.into())]);
        self.id(id).resources(table)
    }

    /// Make the node [`Checkable`].
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Make a view a [`TextView`] without text.
    #[must_use]
    pub fn text_view(mut self) -> Self {
        self.is_text_view = self.is_view;
        self
    }

    /// Set the node's text, making a view a [`TextView`].
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self.text_view()
    }

    /// Make the node the input method target, making a view a [`TextView`].
    #[must_use]
    pub fn ime_target(mut self) -> Self {
        self.input_method_target = true;
        self.text_view()
    }

    #[must_use]
    pub fn layout_id(mut self, layout_id: impl Into<String>) -> Self {
        self.layout_id = Some(layout_id.into());
        self
    }

    #[must_use]
    pub fn test_tag(mut self, test_tag: impl Into<String>) -> Self {
        self.test_tag = Some(test_tag.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl ScannableNode for FakeNode {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn as_view(&self) -> Option<&(dyn View + 'static)> {
        if self.is_view {
            Some(self)
        } else {
            None
        }
    }

    fn as_checkable(&self) -> Option<&(dyn Checkable + 'static)> {
        if self.checked.is_some() {
            Some(self)
        } else {
            None
        }
    }

    fn as_text_view(&self) -> Option<&(dyn TextView + 'static)> {
        if self.is_text_view {
            Some(self)
        } else {
            None
        }
    }

    fn as_layout(&self) -> Option<&(dyn LayoutNode + 'static)> {
        if self.is_layout {
            Some(self)
        } else {
            None
        }
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl View for FakeNode {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn resources(&self) -> Option<&dyn Resources> {
        self.resources.as_deref()
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

impl Checkable for FakeNode {
    fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }
}

impl TextView for FakeNode {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn is_input_method_target(&self) -> bool {
        self.input_method_target
    }
}

impl LayoutNode for FakeNode {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn layout_id(&self) -> Option<&str> {
        self.layout_id.as_deref()
    }

    fn test_tag(&self) -> Option<&str> {
        self.test_tag.as_deref()
    }

    fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
