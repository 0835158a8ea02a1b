//! # Inline Kinds
//!
//! Inline constructs that own their syntax.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD_ITALIC = "***"`, `BOLD = "**"`, `ITALIC = "*"`
//! - **`CodeSpan`**: `TICK = "`"`
//! - **`Link`** / **`Image`**: `[label](target)` and `![alt](src)` patterns
//!
//! Delimiters and patterns live here; the passes in `delimiter`, `links` and
//! `parser` never hardcode them.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
