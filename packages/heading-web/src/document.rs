use heading_nodes::Document;

use crate::DomNode;

/// The page's live `document`.
#[derive(Clone, Debug)]
pub struct BrowserDocument(web_sys::Document);

impl BrowserDocument {
    pub fn new() -> Self {
        Self(crate::document())
    }

    pub fn native(&self) -> &web_sys::Document {
        &self.0
    }
}

impl Default for BrowserDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl From<web_sys::Document> for BrowserDocument {
    fn from(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl Document for BrowserDocument {
    type Node = DomNode;

    fn get_element_by_id(&self, id: &str) -> Option<DomNode> {
        self.0.get_element_by_id(id).map(DomNode::from_element)
    }
}
