use serde::Serialize;

use crate::{
    parsing::{
        error::{ReadError, ReadResult, require},
        inline::{FormattedText, InlineOptions, parse_inline},
        reader::Reader,
        span::Span,
    },
    render::RenderContext,
};

/// An ATX heading: `#` to `######` followed by whitespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: FormattedText,
}

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    pub fn opens(line: &[char]) -> bool {
        let level = line.iter().take_while(|&&c| c == Self::MARKER).count();
        (1..=usize::from(Self::MAX_LEVEL)).contains(&level)
            && line.get(level).is_none_or(|c| matches!(c, ' ' | '\t'))
    }

    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        let level = u8::try_from(reader.read_count(Self::MARKER))
            .ok()
            .filter(|level| (1..=Self::MAX_LEVEL).contains(level))
            .ok_or(ReadError::Malformed {
                construct: "heading",
            })?;
        require(
            matches!(reader.current_char(), None | Some(' ' | '\t' | '\n')),
            "heading",
        )?;
        reader.discard_whitespace();

        let line_end = reader.line_end();
        let content = reader.chars(Span::new(reader.pos(), line_end));
        let end = reader.pos() + Self::content_len(content);
        let text = parse_inline(reader, InlineOptions::single_line().until(end));
        reader.skip_to(line_end);

        Ok(Self { level, text })
    }

    /// Length of the heading text once an optional closing `#` run is dropped.
    ///
    /// The closing run only counts when it is the whole line or follows
    /// whitespace, so `# C#` keeps its hash.
    fn content_len(line: &[char]) -> usize {
        let is_space = |c: &char| matches!(c, ' ' | '\t');
        let trimmed = line.len() - line.iter().rev().take_while(|c| is_space(c)).count();
        let without_hashes = trimmed
            - line[..trimmed]
                .iter()
                .rev()
                .take_while(|&&c| c == Self::MARKER)
                .count();

        if without_hashes == trimmed {
            return trimmed;
        }
        match without_hashes.checked_sub(1).map(|i| line[i]) {
            None => 0,
            Some(c) if is_space(&c) => {
                without_hashes
                    - line[..without_hashes]
                        .iter()
                        .rev()
                        .take_while(|c| is_space(c))
                        .count()
            }
            Some(_) => trimmed,
        }
    }

    pub fn html(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "<h{level}>{}</h{level}>",
            self.text.html(ctx),
            level = self.level
        )
    }

    pub fn plain_text(&self) -> String {
        self.text.plain_text()
    }
}
