//! # Block Parsing
//!
//! Three steps per document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut into blocks on blank
//!    lines. Each block is a `String` of trimmed lines joined by `\n`.
//! 2. **Classification** (`classify`): each block gets a `BlockKind` from its
//!    raw text, first matching rule wins.
//! 3. **Conversion** (`convert`): each block becomes an HTML subtree, with
//!    inline parsing for its text. Quotes re-enter the whole pipeline.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific syntax (Heading, CodeFence, BlockQuote, lists)
//! - **`segment`**: `markdown_to_blocks()` and its two-state machine
//! - **`classify`**: `block_to_block_kind()`
//! - **`convert`**: one `*_to_node()` routine per block kind
//!
//! ## Key Invariants
//!
//! - Blocks never contain blank lines
//! - Code block content is raw: no inline parsing inside
//! - Quote nesting is bounded by `MAX_QUOTE_DEPTH`

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_kind;
pub use convert::block_to_node;
pub use segment::markdown_to_blocks;
pub use types::BlockKind;
