//! Markdown to HTML conversion.
//!
//! [`MarkdownParser`] is the entry point. Parsing never fails: anything that
//! does not match a construct degrades to paragraph or plain text. Modifiers
//! registered on the parser rewrite the HTML of chosen constructs, and the
//! [`render::Renderer`] trait lets callers render parsed blocks to their own
//! output type.

pub mod models;
pub mod modifiers;
pub mod parser;
pub mod parsing;
pub mod render;

pub use models::Markdown;
pub use modifiers::{Input, Modifier, ModifierCollection, ModifierTarget};
pub use parser::MarkdownParser;
pub use parsing::{ParsedDoc, metadata::Metadata};
