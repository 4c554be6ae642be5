use log::{debug, trace};

use crate::{
    modifiers::ModifierCollection,
    parsing::{
        metadata::Metadata,
        reader::Reader,
        span::Span,
        urls::{NamedUrlCollection, UrlDeclaration},
    },
};

use super::{
    classify::BlockKind,
    kinds::{HorizontalLine, Paragraph},
    types::{Block, ParsedBlock},
};

/// Drives the block loop over a reader.
///
/// Each iteration skips blank space, then tries in order: front matter (only
/// before the first block), a URL declaration (on `[`), and the construct the
/// dispatcher picks. A construct that fails to read is re-read as a
/// paragraph, which always succeeds, so every iteration makes progress.
pub struct BlockBuilder<'a> {
    urls: &'a mut NamedUrlCollection,
    /// Set when front matter may be read; its modifiers rewrite the entries.
    front_matter: Option<&'a ModifierCollection>,
    metadata: Option<Metadata>,
    out: Vec<ParsedBlock>,
}

impl<'a> BlockBuilder<'a> {
    /// A builder for nested content: declarations are collected, front
    /// matter is not recognised.
    pub fn new(urls: &'a mut NamedUrlCollection) -> Self {
        Self {
            urls,
            front_matter: None,
            metadata: None,
            out: vec![],
        }
    }

    /// Allows a leading front-matter block, read with `modifiers`.
    #[must_use]
    pub fn with_front_matter(self, modifiers: &'a ModifierCollection) -> Self {
        Self {
            front_matter: Some(modifiers),
            ..self
        }
    }

    /// Reads blocks until the end of input.
    pub fn run(mut self, reader: &mut Reader) -> (Vec<ParsedBlock>, Option<Metadata>) {
        loop {
            reader.discard_whitespace_and_newlines();
            let Some(current) = reader.current_char() else {
                break;
            };

            if current == Metadata::DELIMITER && self.try_front_matter(reader) {
                continue;
            }
            if current == UrlDeclaration::OPEN && self.try_declaration(reader) {
                continue;
            }
            self.push_block(reader, current);
        }
        (self.out, self.metadata)
    }

    fn try_front_matter(&mut self, reader: &mut Reader) -> bool {
        let Some(modifiers) = self.front_matter else {
            return false;
        };
        if !self.out.is_empty() || self.metadata.is_some() {
            return false;
        }
        match reader.attempt(|r| Metadata::read(r, modifiers)) {
            Ok(metadata) => {
                trace!("front matter with {} entries", metadata.len());
                self.metadata = Some(metadata);
                true
            }
            Err(error) => {
                debug!("leading --- is not front matter: {error}");
                false
            }
        }
    }

    fn try_declaration(&mut self, reader: &mut Reader) -> bool {
        match reader.attempt(UrlDeclaration::read) {
            Ok(declaration) => {
                trace!("url declaration [{}]", declaration.name);
                self.urls.insert(declaration);
                true
            }
            Err(error) => {
                trace!("[ at {} is not a url declaration: {error}", reader.pos());
                false
            }
        }
    }

    fn push_block(&mut self, reader: &mut Reader, current: char) {
        let start = reader.pos();
        let line = Span::new(start, reader.line_end());
        let kind = if HorizontalLine::matches(reader.chars(line)) {
            BlockKind::HorizontalLine
        } else {
            BlockKind::classify(current, reader.next_char())
        };

        let urls = &mut *self.urls;
        let block = match reader.attempt(|r| Block::read(kind, r, urls)) {
            Ok(block) => block,
            Err(error) => {
                debug!("{kind:?} at {start} read as paragraph: {error}");
                Block::Paragraph(Paragraph::read(reader))
            }
        };

        let end = reader.pos();
        self.out.push(ParsedBlock {
            block,
            span: Span::new(start, end),
            raw: reader.slice(start, end),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<BlockKind> {
        let mut urls = NamedUrlCollection::new();
        let mut reader = Reader::new(text);
        let (blocks, _) = BlockBuilder::new(&mut urls).run(&mut reader);
        blocks.iter().map(|b| b.block.kind()).collect()
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(kinds("").is_empty());
        assert!(kinds(" \n\n\t\n").is_empty());
    }

    #[test]
    fn failed_constructs_fall_back_to_paragraphs() {
        assert_eq!(
            kinds("#hashtag\n\n<div>open\n\n|\n\n-not a list"),
            vec![
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph
            ]
        );
    }

    #[test]
    fn spaced_marker_line_is_a_horizontal_line() {
        assert_eq!(kinds("- - -"), vec![BlockKind::HorizontalLine]);
        assert_eq!(kinds("* * *"), vec![BlockKind::HorizontalLine]);
    }

    #[test]
    fn paragraph_is_interrupted_by_blocks() {
        assert_eq!(
            kinds("text\n# Heading\nmore\n> quote"),
            vec![
                BlockKind::Paragraph,
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::Blockquote
            ]
        );
    }

    #[test]
    fn declarations_produce_no_blocks() {
        let mut urls = NamedUrlCollection::new();
        let mut reader = Reader::new("[a]: https://a\ntext\n[b]: https://b");
        let (blocks, _) = BlockBuilder::new(&mut urls).run(&mut reader);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].raw, "text");
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn front_matter_only_when_allowed_and_first() {
        let modifiers = ModifierCollection::new();
        let text = "---\nk: v\n---\n\n---\nk: v\n---";

        let mut urls = NamedUrlCollection::new();
        let (blocks, metadata) = BlockBuilder::new(&mut urls)
            .with_front_matter(&modifiers)
            .run(&mut Reader::new(text));
        assert_eq!(metadata.unwrap().get("k"), Some("v"));
        assert_eq!(
            blocks.iter().map(|b| b.block.kind()).collect::<Vec<_>>(),
            vec![
                BlockKind::HorizontalLine,
                BlockKind::Paragraph,
                BlockKind::HorizontalLine
            ]
        );

        let (_, metadata) = BlockBuilder::new(&mut urls).run(&mut Reader::new(text));
        assert_eq!(metadata, None);
    }

    #[test]
    fn spans_cover_the_raw_text() {
        let mut urls = NamedUrlCollection::new();
        let mut reader = Reader::new("# One\n\n  para\n");
        let (blocks, _) = BlockBuilder::new(&mut urls).run(&mut reader);
        assert_eq!(blocks[0].span, Span::new(0, 5));
        assert_eq!(blocks[1].span, Span::new(9, 13));
        assert_eq!(blocks[1].raw, "para");
    }
}
