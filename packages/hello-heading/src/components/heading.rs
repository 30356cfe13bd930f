use ::heading::prelude::*;

/// A top-level `<h1>` holding `content` as given.
///
/// ```
/// use heading::render::NodeRef;
/// use hello_heading::components::heading;
///
/// let node: NodeRef = heading("Hello world!");
/// assert_eq!(node.to_string(), "<h1>\n  Hello world!\n</h1>");
/// ```
///
/// Content is required, and there is no empty value to stand in for it:
///
/// ```compile_fail
/// use heading::render::NodeRef;
///
/// let node: NodeRef = hello_heading::components::heading();
/// ```
///
/// ```compile_fail
/// use heading::render::NodeRef;
///
/// let node: NodeRef = hello_heading::components::heading(None::<&str>);
/// ```
pub fn heading<N: Node>(content: impl IntoNode<N>) -> N {
    let node: N = h1!(content);
    debug_assert!(
        node.children().iter().any(has_content),
        "heading rendered without content"
    );
    node
}

fn has_content<N: Node>(node: &N) -> bool {
    match node.ty() {
        NodeType::Element => true,
        NodeType::Text => node.data().is_some_and(|data| !data.is_empty()),
        NodeType::Fragment => node.children().iter().any(has_content),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use ::heading::{prelude::*, render::NodeRef};

    use super::heading;

    #[test]
    fn wraps_text_in_h1() {
        let node: NodeRef = heading("Hello world!");

        assert_eq!(node.name().as_deref(), Some("h1"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.text_content(), "Hello world!");
        assert!(node.attrs().is_empty());
    }

    #[test]
    fn keeps_text_verbatim() {
        for content in ["  padded  ", "<b>bold</b>", "émoji 🎉", "a\nb"] {
            let node: NodeRef = heading(content);
            assert_eq!(node.text_content(), content);
        }
    }

    #[test]
    fn escapes_markup() {
        let node: NodeRef = heading("<b>Tom & Jerry</b>");
        assert_eq!(
            node.to_string(),
            "<h1>\n  &lt;b&gt;Tom &amp; Jerry&lt;/b&gt;\n</h1>"
        );
    }

    #[test]
    fn accepts_node_content() {
        let content: NodeRef = fragment!("Hello, "; em!("world"));
        let node: NodeRef = heading(content);

        assert_eq!(node.text_content(), "Hello, world");
        assert_eq!(
            node.to_string(),
            "<h1>\n  Hello, \n  <em>\n    world\n  </em>\n</h1>"
        );
    }

    #[test]
    fn owned_content() {
        let name = String::from("Hello");
        let node: NodeRef = heading(format!("{name} world!"));
        assert_eq!(node.text_content(), "Hello world!");

        let node: NodeRef = heading('!');
        assert_eq!(node.text_content(), "!");

        let node: NodeRef = heading(&name);
        assert_eq!(node.text_content(), "Hello");

        let node: NodeRef = heading(Cow::Borrowed("Borrowed"));
        assert_eq!(node.text_content(), "Borrowed");
    }

    #[test]
    fn sequence_content() {
        let node: NodeRef = heading(["Hello, ", "world"]);

        assert_eq!(node.text_content(), "Hello, world");
        assert_eq!(
            node.to_string(),
            "<h1>\n  Hello, \n  world\n</h1>"
        );
    }

    #[test]
    fn fresh_node_per_call() {
        let first: NodeRef = heading("Same");
        let second: NodeRef = heading("Same");

        assert_ne!(first, second);
        assert!(first.same_structure(&second));
        assert_eq!(first.to_string(), second.to_string());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "heading rendered without content")]
    fn empty_text_is_rejected() {
        let _: NodeRef = heading("");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "heading rendered without content")]
    fn empty_fragment_is_rejected() {
        let _: NodeRef = heading(Vec::<&str>::new());
    }
}
