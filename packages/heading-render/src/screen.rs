use std::fmt;

use heading_nodes::{
    query::{self, ByRole, QueryError, Role},
    Node,
};

use crate::{MemoryDocument, NodeRef};

/// A rendered tree inside a fresh document, ready to be queried.
#[derive(Clone, Debug)]
pub struct Screen {
    document: MemoryDocument,
    container: NodeRef,
}

/// Renders `f` into a `<div>` container appended to a fresh document body.
pub fn render<F>(f: F) -> Screen
where
    F: FnOnce() -> NodeRef,
{
    let document = MemoryDocument::new();
    let container = NodeRef::element(None, "div");
    document.body().insert(&container, None);
    container.insert(&f(), None);

    Screen {
        document,
        container,
    }
}

impl Screen {
    pub fn document(&self) -> &MemoryDocument {
        &self.document
    }

    pub fn container(&self) -> &NodeRef {
        &self.container
    }

    pub fn get_by_role(&self, role: Role, options: &ByRole) -> Result<NodeRef, QueryError> {
        query::get_by_role(self.document.body(), role, options)
    }

    pub fn query_all_by_role(&self, role: Role, options: &ByRole) -> Vec<NodeRef> {
        query::query_all_by_role(self.document.body(), role, options)
    }

    pub fn is_in_document(&self, node: &NodeRef) -> bool {
        let mut current = Some(node.clone());
        while let Some(node) = current {
            if &node == self.document.body() {
                return true;
            }
            current = node.parent();
        }
        false
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.container, f)
    }
}

#[cfg(test)]
mod tests {
    use heading_nodes::{query::*, *};

    use super::render;
    use crate::NodeRef;

    #[test]
    fn queries_rendered_tree() {
        let screen = render(|| main!(h1!("Title"); p!("Body")));

        let heading = screen
            .get_by_role(Role::Heading, &ByRole::new())
            .expect("heading");
        assert_eq!(heading.text_content(), "Title");
        assert!(screen.is_in_document(&heading));

        let paragraphs = screen.query_all_by_role(Role::Paragraph, &ByRole::new());
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn detached_nodes_are_not_in_document() {
        let screen = render(|| h1!("Title"));
        let detached: NodeRef = h1!("Title");
        assert!(!screen.is_in_document(&detached));
    }

    #[test]
    fn display_shows_container() {
        let screen = render(|| h1!("Title"));
        assert_eq!(screen.to_string(), "<div>\n  <h1>\n    Title\n  </h1>\n</div>");
    }
}
