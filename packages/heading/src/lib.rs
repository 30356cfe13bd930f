pub use heading_nodes as nodes;

#[cfg(feature = "web")]
pub use heading_web as web;

#[cfg(feature = "render")]
pub use heading_render as render;

pub use nodes::{mount, MountError, MountOptions};

pub mod prelude {
    #[doc(hidden)]
    pub use heading_nodes;

    pub use crate::nodes::{
        query::{ByRole, Role},
        *,
    };
}
