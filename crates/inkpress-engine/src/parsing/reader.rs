use super::{
    error::{ReadError, ReadResult},
    span::Span,
};

/// A cursor for character-by-character parsing with backtracking.
///
/// Owns the (newline-normalised) input as a `Vec<char>` and a position that is
/// always within `[0, len]`. Every speculative parser either succeeds or leaves
/// the position exactly where it found it; [`Reader::attempt`] packages that
/// discipline.
#[derive(Debug, Clone)]
pub struct Reader {
    chars: Vec<char>,
    pos: usize,
}

/// An opaque saved position, produced by [`Reader::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot(usize);

impl Reader {
    /// Creates a reader at the start of `text`. `\r\n` and lone `\r` become `\n`.
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut it = text.chars().peekable();
        while let Some(c) = it.next() {
            if c == '\r' {
                if it.peek() == Some(&'\n') {
                    it.next();
                }
                chars.push('\n');
            } else {
                chars.push(c);
            }
        }
        Self { chars, pos: 0 }
    }

    /// Current offset in characters.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn did_reach_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn current_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn next_char(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    pub fn previous_char(&self) -> Option<char> {
        self.pos.checked_sub(1).and_then(|i| self.chars.get(i).copied())
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Advances by one character. A no-op at the end of input.
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Moves forward to `index`, clamped to the end of input. Never moves back.
    pub fn skip_to(&mut self, index: usize) {
        self.pos = self.pos.max(index.min(self.chars.len()));
    }

    /// Consumes `expected` or fails without moving.
    pub fn read(&mut self, expected: char) -> ReadResult<()> {
        match self.current_char() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            found => Err(ReadError::UnexpectedCharacter { expected, found }),
        }
    }

    /// Consumes everything up to, but not including, the first terminator.
    ///
    /// A line break ends the search unless `'\n'` is itself a terminator.
    /// Fails with [`ReadError::UnterminatedSpan`] (position untouched) when no
    /// terminator is found.
    pub fn read_until(&mut self, terminators: &[char]) -> ReadResult<String> {
        let start = self.pos;
        let mut i = start;
        while let Some(&c) = self.chars.get(i) {
            if terminators.contains(&c) {
                self.pos = i;
                return Ok(self.slice(start, i));
            }
            if c == '\n' {
                break;
            }
            i += 1;
        }
        Err(ReadError::UnterminatedSpan {
            terminators: terminators.to_vec(),
        })
    }

    /// Consumes a run of `c`, returning its length.
    pub fn read_count(&mut self, c: char) -> usize {
        let start = self.pos;
        while self.current_char() == Some(c) {
            self.advance();
        }
        self.pos - start
    }

    /// Consumes characters while `predicate` holds.
    pub fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.current_char().is_some_and(&predicate) {
            self.advance();
        }
        self.slice(start, self.pos)
    }

    /// Consumes the rest of the current line, leaving the `'\n'` unread.
    pub fn read_line_content(&mut self) -> String {
        let end = self.line_end();
        let line = self.slice(self.pos, end);
        self.pos = end;
        line
    }

    /// Discards spaces and tabs.
    pub fn discard_whitespace(&mut self) {
        while matches!(self.current_char(), Some(' ' | '\t')) {
            self.advance();
        }
    }

    pub fn discard_whitespace_and_newlines(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Offset of the `'\n'` ending the current line, or the end of input.
    pub fn line_end(&self) -> usize {
        self.line_end_from(self.pos)
    }

    pub fn line_end_from(&self, index: usize) -> usize {
        self.chars[index.min(self.chars.len())..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.chars.len(), |offset| index + offset)
    }

    /// Offset of the first character of the current line.
    pub fn line_start(&self) -> usize {
        self.chars[..self.pos]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1)
    }

    /// The characters of the line following the current one, if there is one.
    pub fn next_line(&self) -> Option<Span> {
        let end = self.line_end();
        (end < self.chars.len()).then(|| Span::new(end + 1, self.line_end_from(end + 1)))
    }

    /// True when only spaces and tabs remain before the end of the line.
    pub fn rest_of_line_is_blank(&self) -> bool {
        self.chars(Span::new(self.pos, self.line_end()))
            .iter()
            .all(|c| matches!(c, ' ' | '\t'))
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        let mut i = self.pos;
        for expected in pattern.chars() {
            if self.chars.get(i) != Some(&expected) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn starts_with_ignore_case(&self, pattern: &str) -> bool {
        let mut i = self.pos;
        for expected in pattern.chars() {
            match self.chars.get(i) {
                Some(c) if c.eq_ignore_ascii_case(&expected) => i += 1,
                _ => return false,
            }
        }
        true
    }

    pub fn chars(&self, span: Span) -> &[char] {
        let end = span.end.min(self.chars.len());
        &self.chars[span.start.min(end)..end]
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars(Span::new(start, end)).iter().collect()
    }

    /// Everything consumed since `snapshot` was taken.
    pub fn consumed_since(&self, snapshot: Snapshot) -> String {
        self.slice(snapshot.0, self.pos)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.pos)
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.0.min(self.chars.len());
    }

    /// Runs `read`, rewinding to the starting position if it fails.
    pub fn attempt<T>(&mut self, read: impl FnOnce(&mut Self) -> ReadResult<T>) -> ReadResult<T> {
        let snapshot = self.snapshot();
        let result = read(self);
        if result.is_err() {
            self.restore(snapshot);
        }
        result
    }
}
