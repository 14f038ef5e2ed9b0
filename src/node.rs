//! Node abstraction and the capabilities a node's underlying object may expose.

#[cfg(feature = "no_std")]
use alloc::collections::BTreeMap;
#[cfg(feature = "no_std")]
use alloc::string::String;
#[cfg(not(feature = "no_std"))]
use std::collections::BTreeMap;

use core::any::Any;
use core::marker::PhantomData;

use crate::layout::LayoutNode;

/// A node in a UI hierarchy, as seen by state renderers.
///
/// A node wraps some underlying UI object (a widget, a declarative layout
/// element, ...). Renderers never inspect the wrapper itself; they ask it
/// whether the underlying object presents a given capability and act only on
/// the object returned.
///
/// Every query defaults to `None`, so an implementation only overrides the
/// capabilities its underlying object actually has. Returned objects must be
/// `'static`, which holds for any node that owns its snapshot of UI state.
pub trait ScannableNode {
    /// Human-readable name of the underlying object, e.g. `"TextView"`.
    fn display_name(&self) -> &str;

    fn as_view(&self) -> Option<&(dyn View + 'static)> {
        None
    }

    fn as_checkable(&self) -> Option<&(dyn Checkable + 'static)> {
        None
    }

    fn as_text_view(&self) -> Option<&(dyn TextView + 'static)> {
        None
    }

    fn as_layout(&self) -> Option<&(dyn LayoutNode + 'static)> {
        None
    }

    /// The underlying object as `Any`, for renderers that target a concrete
    /// type through [`Concrete`].
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }
}

/// Identifier of a view, resolvable to a name through [`Resources`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u32);

/// Resource-name lookup service.
///
/// A missing entry is an expected outcome and is reported as `None`.
pub trait Resources {
    fn entry_name(&self, id: ResourceId) -> Option<String>;
}

impl Resources for BTreeMap<ResourceId, String> {
    fn entry_name(&self, id: ResourceId) -> Option<String> {
        self.get(&id).cloned()
    }
}

/// Visibility of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden but still taking up layout space.
    Invisible,
    /// Hidden and taking no layout space.
    Gone,
}

/// General state shared by every view.
pub trait View {
    /// `None` when the view has no id assigned.
    fn id(&self) -> Option<ResourceId>;

    /// Resource table used to resolve [`View::id`], if one is attached.
    fn resources(&self) -> Option<&dyn Resources>;

    fn visibility(&self) -> Visibility;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn is_focused(&self) -> bool;

    fn is_enabled(&self) -> bool;

    fn is_selected(&self) -> bool;
}

/// An element with a checked state (check boxes, switches, radio buttons).
pub trait Checkable {
    fn is_checked(&self) -> bool;
}

/// An element displaying user-visible text.
///
/// The text is PII; renderers only read it into their output when configured
/// to include it.
pub trait TextView {
    fn text(&self) -> Option<&str>;

    /// Whether the element is the current input method target.
    fn is_input_method_target(&self) -> bool {
        false
    }
}

/// A type-level predicate selecting the object a renderer acts on.
///
/// [`query`](Self::query) answers "does this node currently present as my
/// target, and if so, which object is it".
pub trait Capability: 'static {
    type Target: ?Sized + 'static;

    fn query(node: &dyn ScannableNode) -> Option<&Self::Target>;
}

/// Selects nodes exposing [`View`].
#[derive(Debug)]
pub struct ViewCapability;

impl Capability for ViewCapability {
    type Target = dyn View;

    fn query(node: &dyn ScannableNode) -> Option<&Self::Target> {
        node.as_view()
    }
}

/// Selects nodes exposing [`Checkable`].
#[derive(Debug)]
pub struct CheckableCapability;

impl Capability for CheckableCapability {
    type Target = dyn Checkable;

    fn query(node: &dyn ScannableNode) -> Option<&Self::Target> {
        node.as_checkable()
    }
}

/// Selects nodes exposing [`TextView`].
#[derive(Debug)]
pub struct TextViewCapability;

impl Capability for TextViewCapability {
    type Target = dyn TextView;

    fn query(node: &dyn ScannableNode) -> Option<&Self::Target> {
        node.as_text_view()
    }
}

/// Selects nodes exposing [`LayoutNode`].
#[derive(Debug)]
pub struct LayoutCapability;

impl Capability for LayoutCapability {
    type Target = dyn LayoutNode;

    fn query(node: &dyn ScannableNode) -> Option<&Self::Target> {
        node.as_layout()
    }
}

/// Selects nodes whose underlying object is exactly a `T`.
///
/// # Example
///
/// ```rust
/// use core::any::Any;
/// use view_xray::{Capability, Concrete, ScannableNode};
///
/// struct Spinner { frame: u8 }
///
/// struct Node(Spinner);
///
/// impl ScannableNode for Node {
///     fn display_name(&self) -> &str { "Spinner" }
///     fn as_any(&self) -> Option<&dyn Any> { Some(&self.0) }
/// }
///
/// let node = Node(Spinner { frame: 3 });
/// let spinner = Concrete::<Spinner>::query(&node).unwrap();
/// assert_eq!(spinner.frame, 3);
/// ```
pub struct Concrete<T>(PhantomData<fn() -> T>);

impl<T: Any> Capability for Concrete<T> {
    type Target = T;

    fn query(node: &dyn ScannableNode) -> Option<&Self::Target> {
        node.as_any()?.downcast_ref::<T>()
    }
}
