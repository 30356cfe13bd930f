use std::fmt;

use heading_nodes::{query, Document, Node};

use crate::NodeRef;

/// A document held entirely in memory, rooted at `<body>`.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    body: NodeRef,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            body: NodeRef::element(None, "body"),
        }
    }

    /// A document whose body holds one empty `<div>` with the given id.
    pub fn with_mount_point(id: &str) -> Self {
        let document = Self::new();

        let mount = NodeRef::element(None, "div");
        mount.set_attr("id", id);
        document.body.insert(&mount, None);

        document
    }

    pub fn body(&self) -> &NodeRef {
        &self.body
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    type Node = NodeRef;

    fn get_element_by_id(&self, id: &str) -> Option<NodeRef> {
        query::find_by_id(&self.body, id)
    }
}

impl fmt::Display for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.body, f)
    }
}
