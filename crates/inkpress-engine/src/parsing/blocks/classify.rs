use serde::Serialize;

use crate::parsing::{reader::Reader, urls::UrlDeclaration};

use super::kinds::{Blockquote, CodeBlock, Heading, HorizontalLine, List, Table};

/// The construct the dispatcher will try at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    Heading,
    Image,
    Html,
    Blockquote,
    CodeBlock,
    HorizontalLine,
    List,
    Table,
    Paragraph,
}

impl BlockKind {
    /// Picks a candidate construct from the current and next character.
    ///
    /// This only chooses what to try; the candidate's reader may still fail,
    /// in which case the text is read as a paragraph.
    pub fn classify(current: char, next: Option<char>) -> Self {
        match current {
            '#' => BlockKind::Heading,
            '!' => BlockKind::Image,
            '<' => BlockKind::Html,
            '>' => BlockKind::Blockquote,
            '`' => BlockKind::CodeBlock,
            '-' | '*' if next == Some(current) => BlockKind::HorizontalLine,
            '-' | '*' | '+' => BlockKind::List,
            c if c.is_ascii_digit() => BlockKind::List,
            '|' => BlockKind::Table,
            _ => BlockKind::Paragraph,
        }
    }
}

/// Returns the construct a line would open if it appeared inside a paragraph.
///
/// `line` must already have its indentation stripped.
pub fn opens_block(line: &[char]) -> Option<BlockKind> {
    if Heading::opens(line) {
        Some(BlockKind::Heading)
    } else if CodeBlock::opens(line) {
        Some(BlockKind::CodeBlock)
    } else if Blockquote::opens(line) {
        Some(BlockKind::Blockquote)
    } else if HorizontalLine::matches(line) {
        Some(BlockKind::HorizontalLine)
    } else if List::opens(line) {
        Some(BlockKind::List)
    } else if Table::opens(line) {
        Some(BlockKind::Table)
    } else if UrlDeclaration::opens(line) {
        // Declarations are not constructs, but they still end the paragraph.
        Some(BlockKind::Paragraph)
    } else {
        None
    }
}

/// Whether the line after the reader's current `'\n'` continues paragraph text.
pub fn continues_paragraph(reader: &Reader) -> bool {
    let Some(next) = reader.next_line() else {
        return false;
    };
    let content = strip_indentation(reader.chars(next));
    !content.is_empty() && opens_block(content).is_none()
}

pub fn strip_indentation(line: &[char]) -> &[char] {
    let indent = line.iter().take_while(|c| matches!(c, ' ' | '\t')).count();
    &line[indent..]
}

/// Column width of leading whitespace, counting a tab as four columns.
pub fn indentation_width(line: &[char]) -> usize {
    line.iter()
        .take_while(|c| matches!(c, ' ' | '\t'))
        .map(|&c| if c == '\t' { 4 } else { 1 })
        .sum()
}
