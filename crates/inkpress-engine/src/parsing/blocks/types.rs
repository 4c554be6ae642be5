use serde::Serialize;

use crate::{
    modifiers::ModifierTarget,
    parsing::{
        error::{ReadResult, require},
        inline::Image,
        reader::Reader,
        span::Span,
        urls::NamedUrlCollection,
    },
};

use super::{
    classify::BlockKind,
    kinds::{Blockquote, CodeBlock, Heading, HorizontalLine, Html, List, Paragraph, Table},
};

/// A parsed block-level construct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    Blockquote(Blockquote),
    CodeBlock(CodeBlock),
    List(List),
    Table(Table),
    HorizontalLine,
    Html(Html),
    /// An image standing alone on its line.
    Image(Image),
}

/// A block together with the source it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedBlock {
    pub block: Block,
    /// Character span in the reader the block was parsed from.
    pub span: Span,
    /// The matched source text, handed to modifiers.
    pub raw: String,
}

impl Block {
    /// Speculatively reads a construct of `kind`.
    ///
    /// On failure the reader may have moved; callers go through
    /// [`Reader::attempt`].
    pub fn read(
        kind: BlockKind,
        reader: &mut Reader,
        urls: &mut NamedUrlCollection,
    ) -> ReadResult<Self> {
        Ok(match kind {
            BlockKind::Heading => Block::Heading(Heading::read(reader)?),
            BlockKind::Image => {
                let image = Image::read(reader)?;
                require(reader.rest_of_line_is_blank(), "block image")?;
                reader.skip_to(reader.line_end());
                Block::Image(image)
            }
            BlockKind::Html => Block::Html(Html::read(reader)?),
            BlockKind::Blockquote => Block::Blockquote(Blockquote::read(reader, urls)?),
            BlockKind::CodeBlock => Block::CodeBlock(CodeBlock::read(reader)?),
            BlockKind::HorizontalLine => {
                HorizontalLine::read(reader)?;
                Block::HorizontalLine
            }
            BlockKind::List => Block::List(List::read(reader)?),
            BlockKind::Table => Block::Table(Table::read(reader)?),
            BlockKind::Paragraph => Block::Paragraph(Paragraph::read(reader)),
        })
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading(_) => BlockKind::Heading,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Blockquote(_) => BlockKind::Blockquote,
            Block::CodeBlock(_) => BlockKind::CodeBlock,
            Block::List(_) => BlockKind::List,
            Block::Table(_) => BlockKind::Table,
            Block::HorizontalLine => BlockKind::HorizontalLine,
            Block::Html(_) => BlockKind::Html,
            Block::Image(_) => BlockKind::Image,
        }
    }

    pub fn modifier_target(&self) -> ModifierTarget {
        match self {
            Block::Heading(_) => ModifierTarget::Headings,
            Block::Paragraph(_) => ModifierTarget::Paragraphs,
            Block::Blockquote(_) => ModifierTarget::Blockquotes,
            Block::CodeBlock(_) => ModifierTarget::CodeBlocks,
            Block::List(_) => ModifierTarget::Lists,
            Block::Table(_) => ModifierTarget::Tables,
            Block::HorizontalLine => ModifierTarget::HorizontalLines,
            Block::Html(_) => ModifierTarget::Html,
            Block::Image(_) => ModifierTarget::Images,
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading(heading) => heading.plain_text(),
            Block::Paragraph(paragraph) => paragraph.plain_text(),
            Block::Blockquote(quote) => quote.plain_text(),
            Block::CodeBlock(code) => code.plain_text(),
            Block::List(list) => list.plain_text(),
            Block::Table(table) => table.plain_text(),
            Block::HorizontalLine => String::new(),
            Block::Html(html) => html.raw.clone(),
            Block::Image(image) => image.alt_text(),
        }
    }
}

impl ParsedBlock {
    pub fn plain_text(&self) -> String {
        self.block.plain_text()
    }
}
