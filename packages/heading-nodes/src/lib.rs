#![warn(clippy::use_self)]

extern crate self as heading_nodes;

mod into;
mod macros;
mod mount;
pub mod query;

pub use into::IntoNode;
pub use mount::*;

#[doc(hidden)]
pub mod __private {
    pub use heading_macros::node_body;
}

pub mod attributes {
    heading_macros::create_attribute_consts!();
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeType {
    Element,
    Text,
    Fragment,
}

/// A handle into a node tree owned by some backend.
///
/// Handles are cheap to clone and compare by identity. Structural comparison
/// goes through [`Node::same_structure`].
pub trait Node: Clone + Sized + 'static {
    fn element(namespace: Option<&str>, name: &str) -> Self;

    fn text() -> Self;

    fn fragment() -> Self;

    fn ty(&self) -> NodeType;

    /// Lowercase tag name of an element node.
    fn name(&self) -> Option<String>;

    fn parent(&self) -> Option<Self>;

    /// Children of an element or fragment. Text nodes have none.
    fn children(&self) -> Vec<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn insert(&self, child: &Self, before: Option<&Self>);

    fn remove(&self, child: &Self);

    /// Character data of a text node.
    fn data(&self) -> Option<String>;

    fn set_text(&self, content: &str);

    fn attr(&self, name: &str) -> Option<String>;

    /// Attributes of an element node, in insertion order.
    fn attrs(&self) -> Vec<(String, String)>;

    fn set_attr(&self, name: &str, value: &str);

    fn remove_attr(&self, name: &str);

    fn text_content(&self) -> String {
        match self.ty() {
            NodeType::Text => self.data().unwrap_or_default(),
            NodeType::Element | NodeType::Fragment => {
                self.children().iter().map(Self::text_content).collect()
            }
        }
    }

    fn same_structure(&self, other: &Self) -> bool {
        if self.ty() != other.ty() {
            return false;
        }

        match self.ty() {
            NodeType::Text => self.data() == other.data(),
            NodeType::Element if self.name() != other.name() || self.attrs() != other.attrs() => {
                false
            }
            NodeType::Element | NodeType::Fragment => {
                let ours = self.children();
                let theirs = other.children();

                ours.len() == theirs.len()
                    && ours
                        .iter()
                        .zip(&theirs)
                        .all(|(a, b)| a.same_structure(b))
            }
        }
    }
}

/// A host that owns a tree and can resolve mount points inside it.
pub trait Document {
    type Node: Node;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Node>;
}
