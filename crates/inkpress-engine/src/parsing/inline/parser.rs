use crate::parsing::{blocks::classify::continues_paragraph, reader::Reader, span::Span};

use super::{
    kinds::{CodeSpan, Emphasis, Image, Link},
    normalize::{self, Token},
    types::{FormattedText, InlineNode},
};

/// Where an inline run stops and what it may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Characters that end the run without being consumed.
    pub terminators: &'static [char],
    /// Whether a line break may continue the run (paragraph text) or ends it.
    pub multi_line: bool,
    /// Absolute position the run must not read past.
    pub limit: Option<usize>,
    /// Whether `[` may start a nested link.
    pub links: bool,
}

impl InlineOptions {
    /// Paragraph text: runs across lines until a blank line or a block opener.
    pub fn paragraph() -> Self {
        Self {
            terminators: &[],
            multi_line: true,
            limit: None,
            links: true,
        }
    }

    pub fn single_line() -> Self {
        Self {
            multi_line: false,
            ..Self::paragraph()
        }
    }

    #[must_use]
    pub fn terminated_by(self, terminators: &'static [char]) -> Self {
        Self {
            terminators,
            ..self
        }
    }

    #[must_use]
    pub fn until(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    #[must_use]
    pub fn without_links(self) -> Self {
        Self {
            links: false,
            ..self
        }
    }
}

/// Parses inline content from the reader's current position.
///
/// Never fails: malformed constructs are kept as literal text. The reader is
/// left on the terminator, line break or limit that ended the run.
pub fn parse_inline(reader: &mut Reader, options: InlineOptions) -> FormattedText {
    let start = reader.pos();
    let mut scanner = Scanner {
        reader,
        options,
        tokens: Vec::new(),
        pending: String::new(),
        pending_start: None,
    };
    scanner.run();
    let end = scanner.reader.pos();
    let tokens = scanner.tokens;

    FormattedText {
        nodes: normalize::build(tokens),
        span: Span::new(start, end),
    }
}

struct Scanner<'r> {
    reader: &'r mut Reader,
    options: InlineOptions,
    tokens: Vec<Token>,
    /// Literal text read since the last token.
    pending: String,
    pending_start: Option<usize>,
}

impl Scanner<'_> {
    fn run(&mut self) {
        while let Some(c) = self.reader.current_char() {
            if self.options.limit.is_some_and(|limit| self.reader.pos() >= limit)
                || self.options.terminators.contains(&c)
            {
                break;
            }

            match c {
                '\n' => {
                    if !self.line_break() {
                        break;
                    }
                }
                '\\' => self.escape(),
                CodeSpan::TICK => self.code_span(),
                Emphasis::STAR | Emphasis::UNDERSCORE => self.delimiter_run(),
                Emphasis::TILDE if self.reader.next_char() == Some(Emphasis::TILDE) => {
                    self.delimiter_run();
                }
                Link::OPEN if self.options.links => self.link(),
                Image::MARKER if self.reader.next_char() == Some(Link::OPEN) => self.image(),
                _ => self.push_literal(c, 1),
            }
        }
        self.flush();
    }

    /// Consumes `consumed` characters as the literal text `c`.
    fn push_literal(&mut self, c: char, consumed: usize) {
        self.pending_start.get_or_insert(self.reader.pos());
        self.pending.push(c);
        for _ in 0..consumed {
            self.reader.advance();
        }
    }

    fn push_node(&mut self, node: InlineNode) {
        self.tokens.push(Token::Node(node));
    }

    /// Emits pending literal text, ending at the current position.
    fn flush(&mut self) {
        if let Some(start) = self.pending_start.take() {
            let text = std::mem::take(&mut self.pending);
            self.push_node(InlineNode::Text {
                span: Span::new(start, self.reader.pos()),
                text,
            });
        }
    }

    /// Handles a `'\n'`, returning false when it ends the run.
    fn line_break(&mut self) -> bool {
        if !self.options.multi_line || !continues_paragraph(self.reader) {
            return false;
        }

        let hard = self.pending.ends_with("  ");
        let trimmed = self.pending.trim_end_matches([' ', '\t']).len();
        self.pending.truncate(trimmed);
        self.flush();

        let start = self.reader.pos();
        self.reader.advance();
        self.reader.discard_whitespace();
        self.push_node(InlineNode::LineBreak {
            span: Span::new(start, self.reader.pos()),
            hard,
        });
        true
    }

    fn escape(&mut self) {
        match self.reader.next_char() {
            Some(escaped) if escaped.is_ascii_punctuation() => self.push_literal(escaped, 2),
            _ => self.push_literal('\\', 1),
        }
    }

    fn code_span(&mut self) {
        self.flush();
        let start = self.reader.pos();
        match self.reader.attempt(CodeSpan::read) {
            Ok(code) => {
                let end = self.reader.pos();
                self.push_node(InlineNode::Code {
                    span: Span::new(start, end),
                    raw: self.reader.slice(start, end),
                    code,
                });
            }
            Err(_) => {
                // The whole run is literal, so a shorter run inside it isn't retried.
                let ticks = self.reader.chars(Span::new(start, self.reader.line_end()));
                let count = ticks.iter().take_while(|&&c| c == CodeSpan::TICK).count();
                self.pending_start.get_or_insert(start);
                for _ in 0..count {
                    self.pending.push(CodeSpan::TICK);
                    self.reader.advance();
                }
            }
        }
    }

    fn delimiter_run(&mut self) {
        self.flush();
        if let Some(run) = Emphasis::read_run(self.reader) {
            self.tokens.push(Token::Delimiter(run));
        }
    }

    fn link(&mut self) {
        self.flush();
        let start = self.reader.pos();
        match self.reader.attempt(Link::read) {
            Ok(link) => {
                let end = self.reader.pos();
                self.push_node(InlineNode::Link {
                    span: Span::new(start, end),
                    raw: self.reader.slice(start, end),
                    link,
                });
            }
            Err(_) => self.push_literal(Link::OPEN, 1),
        }
    }

    fn image(&mut self) {
        self.flush();
        let start = self.reader.pos();
        match self.reader.attempt(Image::read) {
            Ok(image) => {
                let end = self.reader.pos();
                self.push_node(InlineNode::Image {
                    span: Span::new(start, end),
                    raw: self.reader.slice(start, end),
                    image,
                });
            }
            Err(_) => self.push_literal(Image::MARKER, 1),
        }
    }
}
