use crate::parsing::{inline::types::Style, reader::Reader};

/// A run of identical emphasis delimiters as found by the scanner.
///
/// Pairing happens later, once the whole inline run has been scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRun {
    pub marker: char,
    pub start: usize,
    pub count: usize,
    pub can_open: bool,
    pub can_close: bool,
}

/// Emphasis inline type owning the delimiter characters and pairing rules.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: char = '*';
    pub const UNDERSCORE: char = '_';
    pub const TILDE: char = '~';

    pub fn is_marker(c: char) -> bool {
        matches!(c, Self::STAR | Self::UNDERSCORE | Self::TILDE)
    }

    /// Reads a delimiter run starting at the current position.
    ///
    /// A run can open when followed by non-whitespace and close when preceded
    /// by non-whitespace. Underscores additionally refuse to open or close
    /// inside a word, so `snake_case_name` stays literal.
    pub fn read_run(reader: &mut Reader) -> Option<DelimiterRun> {
        let marker = reader.current_char().filter(|&c| Self::is_marker(c))?;
        let before = reader.previous_char();
        let start = reader.pos();
        let count = reader.read_count(marker);
        let after = reader.current_char();

        let mut can_open = after.is_some_and(|c| !c.is_whitespace());
        let mut can_close = before.is_some_and(|c| !c.is_whitespace());
        if marker == Self::UNDERSCORE {
            can_open &= !before.is_some_and(char::is_alphanumeric);
            can_close &= !after.is_some_and(char::is_alphanumeric);
        }

        Some(DelimiterRun {
            marker,
            start,
            count,
            can_open,
            can_close,
        })
    }

    /// How many delimiters a closer of `closer` length consumes from an opener
    /// of `opener` length, or `None` when the two can't pair.
    pub fn pairing(marker: char, opener: usize, closer: usize) -> Option<usize> {
        if marker == Self::TILDE {
            return (opener >= 2 && closer >= 2).then_some(2);
        }
        if opener == 0 || closer == 0 {
            return None;
        }
        Some(if opener >= 2 && closer >= 2 { 2 } else { 1 })
    }

    pub fn style(marker: char, used: usize) -> Style {
        match (marker, used) {
            (Self::TILDE, _) => Style::Strikethrough,
            (_, 1) => Style::Emphasis,
            _ => Style::Strong,
        }
    }
}
