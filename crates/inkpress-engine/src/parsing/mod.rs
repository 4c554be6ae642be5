//! # Parsing
//!
//! Markdown text is parsed in one forward pass into [`ParsedBlock`]s. URL
//! declarations are collected on the way and resolved only when rendering.
//!
//! ## Modules
//!
//! - **`reader`**: the character cursor with backtracking
//! - **`blocks`**: block dispatch, constructs and the block loop
//! - **`inline`**: formatted text inside blocks
//! - **`metadata`**: leading front matter
//! - **`urls`**: `[name]: url` declarations

pub mod blocks;
pub mod error;
pub mod inline;
pub mod metadata;
pub mod reader;
pub mod span;
pub mod urls;

#[cfg(test)]
mod tests;

use log::debug;
use serde::Serialize;

use crate::modifiers::ModifierCollection;

use blocks::{Block, BlockBuilder, ParsedBlock, kinds::Heading};
use metadata::Metadata;
use reader::Reader;
use urls::NamedUrlCollection;

/// Everything read from one document, before rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<ParsedBlock>,
    pub metadata: Metadata,
    pub urls: NamedUrlCollection,
    /// The first top-level `#` heading.
    pub title_heading: Option<Heading>,
}

pub fn parse_document(text: &str) -> ParsedDoc {
    parse_document_with(text, &ModifierCollection::new())
}

/// Parses `text`, running metadata modifiers over the front matter.
pub fn parse_document_with(text: &str, modifiers: &ModifierCollection) -> ParsedDoc {
    let mut reader = Reader::new(text);
    let mut urls = NamedUrlCollection::new();
    let (blocks, metadata) = BlockBuilder::new(&mut urls)
        .with_front_matter(modifiers)
        .run(&mut reader);

    let title_heading = blocks.iter().find_map(|parsed| match &parsed.block {
        Block::Heading(heading) if heading.level == 1 => Some(heading.clone()),
        _ => None,
    });
    debug!(
        "parsed {} chars into {} blocks, {} url declarations",
        reader.len(),
        blocks.len(),
        urls.len()
    );

    ParsedDoc {
        blocks,
        metadata: metadata.unwrap_or_default(),
        urls,
        title_heading,
    }
}
