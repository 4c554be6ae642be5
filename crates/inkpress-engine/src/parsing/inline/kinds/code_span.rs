use crate::parsing::{
    error::{ReadError, ReadResult, require},
    reader::Reader,
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Reads a code span and returns its content.
    ///
    /// The closing run must have the same length as the opening run and sit on
    /// the same line. The reader is left wherever the search stopped on
    /// failure, so call this through [`Reader::attempt`].
    pub fn read(reader: &mut Reader) -> ReadResult<String> {
        let ticks = reader.read_count(Self::TICK);
        require(ticks > 0, "code span")?;
        let start = reader.pos();

        loop {
            match reader.current_char() {
                None | Some('\n') => {
                    return Err(ReadError::UnterminatedSpan {
                        terminators: vec![Self::TICK],
                    });
                }
                Some(Self::TICK) => {
                    let end = reader.pos();
                    if reader.read_count(Self::TICK) == ticks {
                        return Ok(Self::strip_padding(&reader.slice(start, end)));
                    }
                }
                Some(_) => reader.advance(),
            }
        }
    }

    /// One space of padding on each side is dropped so `` ` `` `` can hold a tick.
    fn strip_padding(content: &str) -> String {
        let padded = content.len() >= 2
            && content.starts_with(' ')
            && content.ends_with(' ')
            && !content.trim().is_empty();
        if padded {
            content[1..content.len() - 1].to_string()
        } else {
            content.to_string()
        }
    }
}
