use ::heading::{prelude::*, render::MemoryDocument};

use crate::components::heading;

/// Id of the element the app is mounted into.
pub const MOUNT_ID: &str = "root";

pub const GREETING: &str = "Hello world!";

pub fn app<N: Node>() -> N {
    heading(GREETING)
}

/// Mounts [`app`] into the element with id [`MOUNT_ID`].
///
/// Strictness follows [`MountOptions::default`], so debug builds render twice.
pub fn bootstrap<D: Document>(document: &D) -> Result<D::Node, MountError> {
    mount(document, MOUNT_ID, MountOptions::default(), app::<D::Node>)
}

/// Renders the page body server side, into an in-memory copy of `index.html`.
pub fn render_page() -> Result<String, MountError> {
    let document = MemoryDocument::with_mount_point(MOUNT_ID);
    bootstrap(&document)?;

    Ok(document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_markup() {
        assert_eq!(
            render_page().unwrap(),
            "<body>\n  <div id=\"root\">\n    <h1>\n      Hello world!\n    </h1>\n  </div>\n</body>"
        );
    }

    #[test]
    fn app_is_repeatable() {
        let first: ::heading::render::NodeRef = app();
        assert!(first.same_structure(&app()));
    }
}
