//! # Inline Parsing
//!
//! Inline parsing runs over the text of paragraphs, headings, list items,
//! table cells and link text.
//!
//! ## Architecture
//!
//! Parsing happens in two steps:
//! 1. The scanner (`parser`) walks the reader and emits tokens: finished
//!    nodes (text, code spans, links, images, line breaks) and unresolved
//!    emphasis delimiter runs.
//! 2. `normalize` pairs delimiter runs into styled nodes, turns unmatched
//!    runs back into text and coalesces adjacent text.
//!
//! ## Modules
//!
//! - **`types`**: `FormattedText` and `InlineNode`
//! - **`kinds`**: inline constructs with owned delimiters (code span,
//!   emphasis, link, image)
//! - **`parser`**: `parse_inline()` entry point and `InlineOptions`
//! - **`normalize`**: delimiter pairing and text coalescing
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[not](a link)` `` parses as a single code
//! span. Link targets are kept unresolved until rendering, so a reference
//! may come before its declaration.

pub mod kinds;
mod normalize;
pub mod parser;
pub mod types;

pub use kinds::{Image, Link, LinkTarget};
pub use parser::{InlineOptions, parse_inline};
pub use types::{FormattedText, InlineNode, Style};
