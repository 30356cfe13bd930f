mod document;
mod logger;

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    thread_local,
};

use heading_nodes::{Node, NodeType};
use wasm_bindgen::{intern, JsCast};

pub use document::BrowserDocument;
pub use logger::{init_logger, ConsoleLogger};

thread_local! {
    static WINDOW: web_sys::Window = web_sys::window().expect("JavaScript window undefined");

    static DOCUMENT: web_sys::Document = WINDOW.with(|window| {
        window
            .document()
            .expect("JavaScript window.document undefined")
    });
}

pub fn window() -> web_sys::Window {
    WINDOW.with(Clone::clone)
}

pub fn document() -> web_sys::Document {
    DOCUMENT.with(Clone::clone)
}

/// Node backed by a live DOM node.
///
/// Fragments have no DOM counterpart; each one is anchored by an empty
/// comment placed after its children.
#[derive(Clone, Debug)]
pub struct DomNode(Rc<Inner>);

type WeakNode = Weak<Inner>;

#[derive(Debug)]
struct Inner {
    native: web_sys::Node,
    ty: NodeType,

    parent: RefCell<Option<WeakNode>>,
    children: RefCell<Vec<DomNode>>,
}

impl DomNode {
    fn new(native: web_sys::Node, ty: NodeType) -> Self {
        Self(Rc::new(Inner {
            native,
            ty,
            parent: RefCell::default(),
            children: RefCell::default(),
        }))
    }

    /// Wraps an element that already lives in the page, such as a mount point.
    ///
    /// Existing DOM children are left alone; inserted nodes are appended after them.
    pub fn from_element(element: web_sys::Element) -> Self {
        Self::new(element.unchecked_into(), NodeType::Element)
    }

    pub fn native(&self) -> &web_sys::Node {
        &self.0.native
    }

    fn is_virtual(&self) -> bool {
        self.0.ty == NodeType::Fragment
    }

    fn native_element(&self) -> Option<&web_sys::Element> {
        if self.0.ty == NodeType::Element {
            Some(self.0.native.unchecked_ref())
        } else {
            None
        }
    }

    fn native_target(&self) -> Option<web_sys::Node> {
        if self.is_virtual() {
            self.0.native.parent_node()
        } else {
            Some(self.0.native.clone())
        }
    }

    fn first_node(&self) -> web_sys::Node {
        if self.is_virtual() {
            if let Some(first) = self.0.children.borrow().first() {
                return first.first_node();
            }
        }

        self.0.native.clone()
    }

    fn mount_to_native(&self, target: &web_sys::Node, before: Option<&web_sys::Node>) {
        if self.is_virtual() {
            for child in &*self.0.children.borrow() {
                child.mount_to_native(target, before);
            }
        }

        target.insert_before(&self.0.native, before).unwrap();
    }

    fn remove_from_native(&self, target: &web_sys::Node) {
        if self.is_virtual() {
            for child in &*self.0.children.borrow() {
                child.remove_from_native(target);
            }
        }

        target.remove_child(&self.0.native).unwrap();
    }
}

impl Node for DomNode {
    fn element(namespace: Option<&str>, name: &str) -> Self {
        let native = DOCUMENT
            .with(|document| {
                if namespace.is_some() {
                    document.create_element_ns(namespace, name)
                } else {
                    document.create_element(intern(name))
                }
            })
            .unwrap();

        Self::new(native.unchecked_into(), NodeType::Element)
    }

    fn text() -> Self {
        let native = web_sys::Text::new().unwrap();

        Self::new(native.unchecked_into(), NodeType::Text)
    }

    fn fragment() -> Self {
        let native = web_sys::Comment::new().unwrap();

        Self::new(native.unchecked_into(), NodeType::Fragment)
    }

    fn ty(&self) -> NodeType {
        self.0.ty
    }

    fn name(&self) -> Option<String> {
        self.native_element().map(web_sys::Element::local_name)
    }

    fn parent(&self) -> Option<Self> {
        self.0
            .parent
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(DomNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let children = parent.0.children.borrow();
        children
            .iter()
            .position(|node| node == self)
            .and_then(|idx| children.get(idx + 1).cloned())
    }

    fn insert(&self, child: &Self, before: Option<&Self>) {
        if self.0.ty == NodeType::Text {
            panic!("only element and fragment nodes can have children");
        }
        let mut ancestor = Some(self.clone());
        while let Some(node) = ancestor {
            assert!(
                node != *child,
                "cannot insert a node into itself or its own descendant"
            );
            ancestor = node.parent();
        }

        if let Some(parent) = child.parent() {
            parent.remove(child);
        }

        {
            let mut children = self.0.children.borrow_mut();
            let idx = if let Some(before) = before {
                children
                    .iter()
                    .position(|node| node == before)
                    .expect("not a parent of insertion point node")
            } else {
                children.len()
            };
            children.insert(idx, child.clone());
        }

        child.0.parent.borrow_mut().replace(Rc::downgrade(&self.0));

        if let Some(target) = self.native_target() {
            let before = match before {
                Some(node) => Some(node.first_node()),
                // appending to a fragment lands just before its anchor
                None if self.is_virtual() => Some(self.0.native.clone()),
                None => None,
            };

            child.mount_to_native(&target, before.as_ref());
        }
    }

    fn remove(&self, child: &Self) {
        {
            let mut children = self.0.children.borrow_mut();
            let idx = children
                .iter()
                .position(|node| node == child)
                .expect("not a parent of child node");
            children.remove(idx);
        }

        child.0.parent.borrow_mut().take();

        if let Some(target) = self.native_target() {
            child.remove_from_native(&target);
        }
    }

    fn data(&self) -> Option<String> {
        if self.0.ty == NodeType::Text {
            self.0.native.text_content()
        } else {
            None
        }
    }

    fn set_text(&self, content: &str) {
        if self.0.ty == NodeType::Text {
            self.0.native.set_text_content(Some(content));
        } else {
            panic!("can only set text content of text nodes");
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.native_element()
            .and_then(|element| element.get_attribute(name))
    }

    fn attrs(&self) -> Vec<(String, String)> {
        let Some(element) = self.native_element() else {
            return vec![];
        };

        let attributes = element.attributes();
        (0..attributes.length())
            .filter_map(|i| attributes.item(i))
            .map(|attr| (attr.name(), attr.value()))
            .collect()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.native_element()
            .expect("attributes only exist on element nodes")
            .set_attribute(intern(name), value)
            .unwrap();
    }

    fn remove_attr(&self, name: &str) {
        self.native_element()
            .expect("attributes only exist on element nodes")
            .remove_attribute(intern(name))
            .unwrap();
    }
}

impl PartialEq for DomNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for DomNode {}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
    use heading_nodes::Node;
    use wasm_bindgen_test::*;

    use crate::DomNode as N;

    const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn node_behavior() {
        heading_nodes::behavior_tests!(crate::DomNode);
    }

    #[wasm_bindgen_test]
    fn fragment_insertion() {
        let root = N::element(None, "div");

        let last = N::text();
        root.insert(&last, None);

        let outer = N::fragment();
        let inner = N::text();

        root.insert(&outer, Some(&last));
        outer.insert(&inner, None);

        assert_eq!(inner.native().next_sibling(), Some(outer.native().clone()));
        assert_eq!(
            outer.native().next_sibling(),
            Some(last.native().clone())
        );
    }

    #[wasm_bindgen_test]
    #[should_panic(expected = "cannot insert a node into itself or its own descendant")]
    fn insert_ancestor_into_descendant() {
        let outer = N::element(None, "div");
        let inner = N::element(None, "p");
        outer.insert(&inner, None);
        inner.insert(&outer, None);
    }

    #[wasm_bindgen_test]
    fn namespaced_elements() {
        let node = N::element(Some(SVG_NAMESPACE), "circle");

        assert_eq!(node.name().as_deref(), Some("circle"));
        assert_eq!(
            node.native_element().unwrap().namespace_uri().as_deref(),
            Some(SVG_NAMESPACE)
        );
    }

    #[wasm_bindgen_test]
    fn attributes_mirror_the_dom() {
        let node = N::element(None, "h1");
        node.set_attr("id", "title");
        node.set_attr("class", "big");

        assert_eq!(
            node.attrs(),
            vec![
                ("id".to_string(), "title".to_string()),
                ("class".to_string(), "big".to_string()),
            ]
        );
        assert_eq!(node.name().as_deref(), Some("h1"));

        let element = node.native_element().unwrap();
        assert_eq!(element.outer_html(), "<h1 id=\"title\" class=\"big\"></h1>");
    }
}
