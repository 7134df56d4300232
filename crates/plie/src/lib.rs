//! Plie - cross-browser flexbox styling for virtual-DOM trees.
//!
//! Plie turns semantic layout parameters into vendor-prefixed CSS
//! declaration runs and builds styled container nodes around them:
//!
//! ```
//! use plie::prelude::*;
//!
//! let arena = Bump::new();
//! let page = column(
//!     &arena,
//!     [
//!         text("header"),
//!         flex_n(&arena, 8, row(&arena, [text("nav"), text("content")])),
//!         text("footer"),
//!     ],
//! );
//! let html = render(&page);
//! assert!(html.contains("flex-direction: column"));
//! ```
//!
//! The mixin layer is available on its own via [`mixins`] for callers that
//! assemble style attributes by hand.

pub use plie_dom as dom;
pub use plie_mixins::mixins;

pub use plie_dom::{
    node, render, render_with_options, style_attribute, text, Attribute, Bump, ElementNode, Node,
    RenderOptions, TextNode,
};
pub use plie_mixins::{
    Alignment, Declaration, Declarations, Direction, Engine, UnknownEngine, WrapMode,
};

/// Everything a tree-building call site needs.
pub mod prelude {
    pub use plie_dom::containers::{
        column, column_reverse, flex_child, flex_div, flex_n, flex_node, fullbleed, layout, row,
        row_reverse,
    };
    pub use plie_dom::{node, render, style_attribute, text, Attribute, Bump, Node};
    pub use plie_mixins::{Alignment, Declarations, Direction, Engine, WrapMode};
}
