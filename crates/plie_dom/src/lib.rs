//! Arena-allocated node tree and flex container builders.
//!
//! This crate provides the tree side of Plie: a minimal element/text node
//! model allocated in a [`bumpalo`] arena, an HTML renderer for it, and the
//! ready-made flex containers (`row`, `column`, `layout`, `fullbleed`, and
//! friends) that stitch [`plie_mixins`] declaration runs onto nodes.
//!
//! Trees are built against an arena owned by the caller:
//!
//! ```
//! use bumpalo::Bump;
//! use plie_dom::containers::{flex_n, row};
//! use plie_dom::{render, text};
//!
//! let arena = Bump::new();
//! let tree = row(&arena, [flex_n(&arena, 2, text("left")), text("right")]);
//! let html = render(&tree);
//! assert!(html.starts_with("<div style=\"display: -webkit-box"));
//! ```

pub mod ast;
pub mod containers;
pub mod render;

pub use ast::{node, style_attribute, text, Attribute, ElementNode, Node, TextNode};
pub use render::{render, render_with_options, RenderOptions};

// Re-export the arena type so downstream callers need no direct bumpalo dep.
pub use bumpalo::Bump;
