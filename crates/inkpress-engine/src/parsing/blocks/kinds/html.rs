use serde::Serialize;

use crate::parsing::{
    error::{ReadError, ReadResult, require},
    reader::Reader,
};

/// Raw HTML emitted verbatim: an element (with its matching close tag), a
/// void or self-closing element, or a comment. The rest of the line the
/// element ends on is included.
///
/// Only block-level elements may span blank lines. Any other element, and
/// every tag, must close before the next blank line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Html {
    pub raw: String,
}

impl Html {
    pub const OPEN: char = '<';
    pub const CLOSE: char = '>';
    const COMMENT_OPEN: &'static str = "<!--";
    const COMMENT_CLOSE: &'static str = "-->";
    const VOID_ELEMENTS: &'static [&'static str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ];
    const BLOCK_ELEMENTS: &'static [&'static str] = &[
        "address", "article", "aside", "blockquote", "details", "dialog", "div", "dl",
        "fieldset", "figure", "footer", "form", "header", "main", "nav", "ol", "pre", "script",
        "section", "style", "table", "ul",
    ];

    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        let start = reader.snapshot();
        if reader.starts_with(Self::COMMENT_OPEN) {
            Self::skip_past(reader, Self::COMMENT_CLOSE)?;
        } else {
            Self::read_element(reader)?;
        }
        reader.skip_to(reader.line_end());
        Ok(Self {
            raw: reader.consumed_since(start),
        })
    }

    fn read_element(reader: &mut Reader) -> ReadResult<()> {
        reader.read(Self::OPEN)?;
        let name = Self::read_tag_name(reader)?;
        let self_closing = Self::read_tag_end(reader)?;
        if self_closing || Self::VOID_ELEMENTS.contains(&name.as_str()) {
            return Ok(());
        }

        let spans_blank_lines = Self::BLOCK_ELEMENTS.contains(&name.as_str());
        let open = format!("{}{name}", Self::OPEN);
        let close = format!("{}/{name}", Self::OPEN);
        let mut depth = 1usize;
        while depth > 0 {
            if reader.did_reach_end() {
                return Err(ReadError::UnexpectedEndOfInput);
            }
            if !spans_blank_lines && Self::at_blank_line(reader) {
                return Err(ReadError::Malformed {
                    construct: "html element",
                });
            }
            if reader.starts_with_ignore_case(&close) && Self::ends_name(reader, close.len()) {
                depth -= 1;
                reader.skip_to(reader.pos() + close.len());
                Self::read_tag_end(reader)?;
            } else if reader.starts_with_ignore_case(&open) && Self::ends_name(reader, open.len()) {
                depth += 1;
                reader.skip_to(reader.pos() + open.len());
                if Self::read_tag_end(reader)? {
                    depth -= 1;
                }
            } else {
                reader.advance();
            }
        }
        Ok(())
    }

    fn read_tag_name(reader: &mut Reader) -> ReadResult<String> {
        require(
            reader.current_char().is_some_and(|c| c.is_ascii_alphabetic()),
            "html tag",
        )?;
        Ok(reader
            .read_while(|c| c.is_ascii_alphanumeric() || c == '-')
            .to_ascii_lowercase())
    }

    /// Consumes the rest of a tag through its `>`, returning whether it was
    /// self-closing.
    fn read_tag_end(reader: &mut Reader) -> ReadResult<bool> {
        loop {
            match reader.current_char() {
                None => return Err(ReadError::UnexpectedEndOfInput),
                Some('\n') if Self::at_blank_line(reader) => {
                    return Err(ReadError::Malformed {
                        construct: "html tag",
                    });
                }
                Some(Self::CLOSE) => {
                    let self_closing = reader.previous_char() == Some('/');
                    reader.advance();
                    return Ok(self_closing);
                }
                Some(_) => reader.advance(),
            }
        }
    }

    /// Whether the tag name matched at the current position ends after `len`
    /// characters, so `<b` does not match `<br`.
    fn ends_name(reader: &Reader, len: usize) -> bool {
        reader
            .char_at(reader.pos() + len)
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-'))
    }

    /// Whether the reader is on a line break followed by a blank line.
    fn at_blank_line(reader: &Reader) -> bool {
        reader.current_char() == Some('\n')
            && reader
                .next_line()
                .is_some_and(|line| reader.chars(line).iter().all(|c| matches!(c, ' ' | '\t')))
    }

    fn skip_past(reader: &mut Reader, pattern: &str) -> ReadResult<()> {
        while !reader.starts_with(pattern) {
            if reader.did_reach_end() {
                return Err(ReadError::UnexpectedEndOfInput);
            }
            reader.advance();
        }
        reader.skip_to(reader.pos() + pattern.chars().count());
        Ok(())
    }

    pub fn html(&self) -> &str {
        &self.raw
    }
}
