//! Cross-browser flexbox style mixins.
//!
//! This crate translates a small set of semantic layout parameters into
//! ordered runs of CSS `(property, value)` pairs covering the 2009 box
//! draft, the prefixed intermediate syntaxes, and the standard flexbox
//! properties. Vendor fallbacks are always emitted before the standard
//! spelling so that the cascade resolves in favor of the newest syntax an
//! engine understands.
//!
//! Every mixin is a pure function of its input: same parameters, identical
//! output, no ambient reads. The one engine-dependent choice (which
//! `display` keyword to emit) is parameterized by [`Engine`] rather than
//! probed from the environment.

pub mod declaration;
pub mod engine;
pub mod mixins;
pub mod params;

pub use declaration::{Declaration, Declarations};
pub use engine::{Engine, UnknownEngine};
pub use params::{Alignment, Direction, WrapMode};
