//! # Inline Parsing
//!
//! Turns a run of block text into typed [`TextSpan`]s, then into HTML nodes.
//!
//! ## Architecture
//!
//! Tokenization is a sequence of passes over a `Vec<TextSpan>`. Every pass
//! only rewrites `Plain` spans; anything already classified passes through
//! untouched, so a resolved region is never tokenized twice.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan`, `SpanKind`, `InlineStyle`
//! - **`kinds`**: Inline constructs with owned delimiters (Emphasis, CodeSpan, Link, Image)
//! - **`delimiter`**: `split_by_delimiter()` for paired literal markers
//! - **`links`**: `split_images()` / `split_links()` for `[label](target)` syntax
//! - **`parser`**: `text_to_spans()` main entry point and pass ordering
//! - **`convert`**: `span_to_node()` mapping spans to HTML nodes
//!
//! ## Pass Precedence
//!
//! Longer delimiters run first (`***`, `**`, `*`, then `` ` ``) so that a
//! shorter marker never eats half of a longer one. Images run before links
//! because `![alt](src)` contains a link-shaped `[alt](src)`.

pub mod convert;
pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use convert::{span_to_node, spans_to_nodes};
pub use delimiter::split_by_delimiter;
pub use links::{split_images, split_links};
pub use parser::{DELIMITER_PRIORITY, text_to_nodes, text_to_spans};
pub use types::{InlineStyle, SpanKind, TextSpan};
