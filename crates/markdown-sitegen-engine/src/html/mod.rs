//! # HTML Node Tree
//!
//! The output model of the conversion pipeline: a tree of [`Node`]s that
//! serializes itself to an HTML string.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered name/value list
//! - **`node`**: `Node` (Leaf / Container) and `render()`
//!
//! ## Key Invariants
//!
//! - Containers are validated when rendered, not when built
//! - Text is emitted verbatim: no escaping, no whitespace normalization

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::Node;

/// A container node that cannot be serialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("Container node has no tag")]
    MissingTag,
    #[error("Container <{tag}> has no children")]
    NoChildren { tag: String },
}
