use std::borrow::Cow;

use crate::Node;

/// Displayable content: anything that can become a node of backend `N`.
///
/// Not implemented for `()` or `Option<T>`: a component taking
/// `impl IntoNode<N>` always receives content.
pub trait IntoNode<N: Node> {
    fn into_node(self) -> N;
}

impl<N: Node> IntoNode<N> for N {
    fn into_node(self) -> N {
        self
    }
}

fn text<N: Node>(content: &str) -> N {
    let node = N::text();
    node.set_text(content);
    node
}

impl<N: Node> IntoNode<N> for &str {
    fn into_node(self) -> N {
        text(self)
    }
}

impl<N: Node> IntoNode<N> for String {
    fn into_node(self) -> N {
        text(&self)
    }
}

impl<N: Node> IntoNode<N> for &String {
    fn into_node(self) -> N {
        text(self)
    }
}

impl<N: Node> IntoNode<N> for Cow<'_, str> {
    fn into_node(self) -> N {
        text(&self)
    }
}

impl<N: Node> IntoNode<N> for char {
    fn into_node(self) -> N {
        text(self.encode_utf8(&mut [0; 4]))
    }
}

impl<N, T> IntoNode<N> for Vec<T>
where
    N: Node,
    T: IntoNode<N>,
{
    fn into_node(self) -> N {
        self.into_iter().fold(N::fragment(), |fragment, item| {
            fragment.insert(&item.into_node(), None);
            fragment
        })
    }
}

impl<N, T, const LEN: usize> IntoNode<N> for [T; LEN]
where
    N: Node,
    T: IntoNode<N>,
{
    fn into_node(self) -> N {
        IntoNode::<N>::into_node(Vec::from(self))
    }
}
