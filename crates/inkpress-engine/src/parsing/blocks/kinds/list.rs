use serde::Serialize;

use crate::{
    parsing::{
        blocks::classify::{indentation_width, strip_indentation},
        error::{ReadError, ReadResult},
        inline::{FormattedText, InlineOptions, parse_inline},
        reader::Reader,
        span::Span,
    },
    render::RenderContext,
};

use super::HorizontalLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Unordered,
    Ordered { start: u64 },
}

impl ListKind {
    /// Items of one list share ordered-ness; the bullet or number may vary.
    fn continues(self, other: ListKind) -> bool {
        matches!(
            (self, other),
            (ListKind::Unordered, ListKind::Unordered)
                | (ListKind::Ordered { .. }, ListKind::Ordered { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub text: FormattedText,
    /// Lists indented deeper than this item, in document order.
    pub children: Vec<List>,
}

/// An ordered or unordered list, possibly with nested sub-lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    kind: ListKind,
    /// Characters taken by the bullet or number and its delimiter.
    len: usize,
}

/// What the next non-blank line means for the list being read.
enum Continuation {
    /// A deeper item: starts a list nested in the current item.
    Nested {
        at: usize,
        indent: usize,
        marker: Marker,
    },
    /// Another item of the current list.
    Sibling { at: usize, marker: Marker },
    End,
}

impl List {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_DELIMITERS: [char; 2] = ['.', ')'];
    const MAX_DIGITS: usize = 9;

    pub fn opens(line: &[char]) -> bool {
        Self::marker(line).is_some()
    }

    fn marker(line: &[char]) -> Option<Marker> {
        if HorizontalLine::matches(line) {
            return None;
        }
        let first = *line.first()?;
        let (kind, len) = if Self::BULLETS.contains(&first) {
            (ListKind::Unordered, 1)
        } else {
            let digits = line.iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            if !Self::ORDERED_DELIMITERS.contains(line.get(digits)?) {
                return None;
            }
            let start = line[..digits].iter().collect::<String>().parse().ok()?;
            (ListKind::Ordered { start }, digits + 1)
        };
        matches!(line.get(len), Some(' ' | '\t')).then_some(Marker { kind, len })
    }

    /// Reads a list whose first marker is at the reader's position.
    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        let leading = Span::new(reader.line_start(), reader.pos());
        let indent = indentation_width(reader.chars(leading));
        let marker = Self::marker(reader.chars(Span::new(reader.pos(), reader.line_end())))
            .ok_or(ReadError::Malformed {
                construct: "list item",
            })?;
        Ok(Self::read_at(reader, indent, marker))
    }

    /// Reads items at `indent` until a line that is neither an item of this
    /// list nor nested deeper. The reader must be on `marker`.
    fn read_at(reader: &mut Reader, indent: usize, mut marker: Marker) -> Self {
        let kind = marker.kind;
        let mut items = Vec::new();

        loop {
            reader.skip_to(reader.pos() + marker.len);
            reader.discard_whitespace();
            let mut item = ListItem {
                text: parse_inline(reader, InlineOptions::paragraph()),
                children: Vec::new(),
            };

            let next = loop {
                match Self::peek_continuation(reader, indent, kind) {
                    Continuation::Nested {
                        at,
                        indent: nested,
                        marker,
                    } => {
                        reader.skip_to(at);
                        item.children.push(Self::read_at(reader, nested, marker));
                    }
                    Continuation::Sibling { at, marker } => {
                        reader.skip_to(at);
                        break Some(marker);
                    }
                    Continuation::End => break None,
                }
            };
            items.push(item);

            match next {
                Some(sibling) => marker = sibling,
                None => return Self { kind, items },
            }
        }
    }

    /// Looks past blank lines for the next item, without moving the reader.
    fn peek_continuation(reader: &Reader, indent: usize, kind: ListKind) -> Continuation {
        let mut next = reader.next_line();
        while let Some(line) = next {
            let chars = reader.chars(line);
            let content = strip_indentation(chars);
            if content.is_empty() {
                next = (line.end < reader.len())
                    .then(|| Span::new(line.end + 1, reader.line_end_from(line.end + 1)));
                continue;
            }

            let Some(marker) = Self::marker(content) else {
                return Continuation::End;
            };
            let width = indentation_width(chars);
            let at = line.start + (chars.len() - content.len());
            return if width > indent {
                Continuation::Nested {
                    at,
                    indent: width,
                    marker,
                }
            } else if width == indent && kind.continues(marker.kind) {
                Continuation::Sibling { at, marker }
            } else {
                Continuation::End
            };
        }
        Continuation::End
    }

    pub fn html(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = match self.kind {
            ListKind::Unordered => String::from("<ul>"),
            ListKind::Ordered { start: 1 } => String::from("<ol>"),
            ListKind::Ordered { start } => format!("<ol start=\"{start}\">"),
        };
        for item in &self.items {
            out.push_str("<li>");
            out.push_str(&item.text.html(ctx));
            for child in &item.children {
                out.push_str(&child.html(ctx));
            }
            out.push_str("</li>");
        }
        out.push_str(match self.kind {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered { .. } => "</ol>",
        });
        out
    }

    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for item in &self.items {
            lines.push(item.text.plain_text());
            lines.extend(item.children.iter().map(List::plain_text));
        }
        lines.join("\n")
    }
}
