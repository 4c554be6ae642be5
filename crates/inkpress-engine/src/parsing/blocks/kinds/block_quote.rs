use serde::Serialize;

use crate::parsing::{
    blocks::{BlockBuilder, ParsedBlock, classify::strip_indentation},
    error::{ReadResult, require},
    reader::Reader,
    span::Span,
    urls::NamedUrlCollection,
};

/// A run of consecutive `>` lines.
///
/// The prefix is stripped from every line and the remaining text is parsed as
/// a full block sequence. Spans of the nested blocks refer to that stripped
/// text, not to the enclosing document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blockquote {
    pub blocks: Vec<ParsedBlock>,
}

impl Blockquote {
    pub const PREFIX: char = '>';

    pub fn opens(line: &[char]) -> bool {
        line.first() == Some(&Self::PREFIX)
    }

    /// Strips one `>` prefix (and one following space) from a line.
    ///
    /// Returns `None` when the line is not part of a blockquote.
    pub fn strip_prefix(line: &[char]) -> Option<&[char]> {
        let rest = strip_indentation(line).strip_prefix(&[Self::PREFIX])?;
        Some(rest.strip_prefix(&[' ']).unwrap_or(rest))
    }

    pub fn read(reader: &mut Reader, urls: &mut NamedUrlCollection) -> ReadResult<Self> {
        let first = Span::new(reader.pos(), reader.line_end());
        require(
            Self::strip_prefix(reader.chars(first)).is_some(),
            "blockquote",
        )?;

        let mut inner = String::new();
        let mut line = first;
        loop {
            if let Some(content) = Self::strip_prefix(reader.chars(line)) {
                if line != first {
                    inner.push('\n');
                }
                inner.extend(content);
            }
            reader.skip_to(line.end);

            match reader.next_line() {
                Some(next) if Self::strip_prefix(reader.chars(next)).is_some() => line = next,
                _ => break,
            }
        }

        let mut nested = Reader::new(&inner);
        let (blocks, _) = BlockBuilder::new(urls).run(&mut nested);
        Ok(Self { blocks })
    }

    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(ParsedBlock::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
