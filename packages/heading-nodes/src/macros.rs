heading_macros::create_tagged_macros!(heading_nodes::element);

#[macro_export]
macro_rules! element {
    ($name:expr $(, $($body:tt)*)?) => {{
        let element = $crate::Node::element(::std::option::Option::None, $name);

        let parent = $crate::__private::node_body!(&element, $($($body)*)?);
        if let ::std::option::Option::Some(parent) = parent {
            $crate::Node::insert(parent, &element, ::std::option::Option::None);
        }

        element
    }};
}

#[macro_export]
macro_rules! fragment {
    ($($body:tt)*) => {{
        let fragment = $crate::Node::fragment();

        let parent = $crate::__private::node_body!(&fragment, $($body)*);
        if let ::std::option::Option::Some(parent) = parent {
            $crate::Node::insert(parent, &fragment, ::std::option::Option::None);
        }

        fragment
    }};
}
