//! Ordered attribute accumulation for a single node.

#[cfg(feature = "no_std")]
use alloc::string::{String, ToString};
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use core::fmt;

/// Sink that state renderers append attributes to.
///
/// One appendable collects the attributes of exactly one node during one
/// render pass. Attributes are kept in the order they were appended and are
/// never deduplicated.
///
/// # Example
///
/// ```rust
/// use view_xray::{AttributeAppendable, AttributeList};
///
/// let mut attributes = AttributeList::new();
/// attributes.append("100x40px");
/// attributes.append("focused");
///
/// assert_eq!(attributes.as_slice(), ["100x40px", "focused"]);
/// ```
pub trait AttributeAppendable {
    /// Append one attribute. An empty string produces an empty entry.
    fn append(&mut self, attribute: &str);
}

impl AttributeAppendable for Vec<String> {
    fn append(&mut self, attribute: &str) {
        self.push(attribute.to_string());
    }
}

/// The attributes rendered for one node, in render order.
///
/// `Display` joins the attributes with `", "`, which is the form embedded in a
/// node's line of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    attributes: Vec<String>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.attributes
    }

    pub fn into_vec(self) -> Vec<String> {
        self.attributes
    }
}

impl AttributeAppendable for AttributeList {
    fn append(&mut self, attribute: &str) {
        self.attributes.push(attribute.to_string());
    }
}

impl IntoIterator for AttributeList {
    type Item = String;
    type IntoIter = <Vec<String> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, attribute) in self.attributes.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(attribute)?;
        }
        Ok(())
    }
}
