use thiserror::Error;

use crate::{Document, Node};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("mount point `#{id}` not found in document")]
    MissingMountPoint { id: String },

    #[error("render into `#{id}` is not repeatable: strict mode built two different trees")]
    ImpureRender { id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountOptions {
    /// Build the tree twice and require both builds to match.
    pub strict: bool,
}

impl MountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            strict: cfg!(debug_assertions),
        }
    }
}

/// Builds `f` and appends it to the element with the given `id`.
///
/// A missing mount point is returned before `f` runs. Returns the mounted node.
pub fn mount<D, F>(
    document: &D,
    id: &str,
    options: MountOptions,
    f: F,
) -> Result<D::Node, MountError>
where
    D: Document,
    F: Fn() -> D::Node,
{
    log::debug!("mounting into `#{id}` (strict: {})", options.strict);

    let root = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingMountPoint { id: id.to_string() })?;

    let node = f();
    if options.strict && !node.same_structure(&f()) {
        return Err(MountError::ImpureRender { id: id.to_string() });
    }

    root.insert(&node, None);

    log::info!("mounted into `#{id}`");
    Ok(node)
}
