use serde::Serialize;

use crate::{
    parsing::{
        blocks::classify::strip_indentation,
        error::{ReadResult, require},
        inline::{FormattedText, InlineOptions, parse_inline},
        reader::Reader,
        span::Span,
    },
    render::RenderContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    fn attribute(self) -> &'static str {
        match self {
            Alignment::Left => " align=\"left\"",
            Alignment::Center => " align=\"center\"",
            Alignment::Right => " align=\"right\"",
        }
    }
}

/// A pipe table. Every row holds exactly `column_count()` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Present when the second line is a delimiter row.
    pub header: Option<Vec<FormattedText>>,
    pub alignments: Vec<Option<Alignment>>,
    pub rows: Vec<Vec<FormattedText>>,
}

impl Table {
    pub const SEPARATOR: char = '|';
    const CELL_TERMINATORS: &'static [char] = &[Self::SEPARATOR];

    pub fn opens(line: &[char]) -> bool {
        line.first() == Some(&Self::SEPARATOR)
    }

    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        let first = Self::read_row(reader)?;
        require(!first.is_empty(), "table row")?;

        let mut alignments = None;
        let mut rows = vec![first];
        while let Some(line) = reader.next_line() {
            let content = strip_indentation(reader.chars(line));
            if !Self::opens(content) {
                break;
            }
            let at = line.end - content.len();

            if rows.len() == 1 && alignments.is_none() {
                if let Some(parsed) = Self::read_alignments(content) {
                    alignments = Some(parsed);
                    reader.skip_to(line.end);
                    continue;
                }
            }
            reader.skip_to(at);
            rows.push(Self::read_row(reader)?);
        }

        let header = alignments.is_some().then(|| rows.remove(0));
        let columns = match &header {
            Some(header) => header.len(),
            None => rows.iter().map(Vec::len).max().unwrap_or_default(),
        };
        for row in &mut rows {
            row.resize_with(columns, FormattedText::default);
        }
        let mut alignments = alignments.unwrap_or_default();
        alignments.resize(columns, None);

        Ok(Self {
            header,
            alignments,
            rows,
        })
    }

    /// Reads one `|`-separated row starting on its leading pipe.
    fn read_row(reader: &mut Reader) -> ReadResult<Vec<FormattedText>> {
        reader.read(Self::SEPARATOR)?;
        let mut cells = Vec::new();
        loop {
            reader.discard_whitespace();
            if reader.rest_of_line_is_blank() {
                break;
            }
            cells.push(parse_inline(
                reader,
                InlineOptions::single_line().terminated_by(Self::CELL_TERMINATORS),
            ));
            if reader.read(Self::SEPARATOR).is_err() {
                break;
            }
        }
        reader.skip_to(reader.line_end());
        Ok(cells)
    }

    /// Parses a delimiter row such as `| :--- | :-: | --: |`.
    fn read_alignments(line: &[char]) -> Option<Vec<Option<Alignment>>> {
        let line: String = line.iter().collect();
        let inner = line.trim().strip_prefix(Self::SEPARATOR)?;
        let inner = inner.strip_suffix(Self::SEPARATOR).unwrap_or(inner);

        inner
            .split(Self::SEPARATOR)
            .map(|cell| {
                let cell = cell.trim();
                let left = cell.starts_with(':');
                let right = cell.ends_with(':');
                let dashes = cell.trim_matches(':');
                if dashes.is_empty() || !dashes.chars().all(|c| c == '-') {
                    return None;
                }
                Some(match (left, right) {
                    (true, true) => Some(Alignment::Center),
                    (true, false) => Some(Alignment::Left),
                    (false, true) => Some(Alignment::Right),
                    (false, false) => None,
                })
            })
            .collect()
    }

    pub fn column_count(&self) -> usize {
        self.alignments.len()
    }

    pub fn html(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::from("<table>");
        if let Some(header) = &self.header {
            out.push_str("<thead>");
            self.write_row(&mut out, header, "th", ctx);
            out.push_str("</thead>");
        }
        if !self.rows.is_empty() {
            out.push_str("<tbody>");
            for row in &self.rows {
                self.write_row(&mut out, row, "td", ctx);
            }
            out.push_str("</tbody>");
        }
        out.push_str("</table>");
        out
    }

    fn write_row(
        &self,
        out: &mut String,
        cells: &[FormattedText],
        tag: &str,
        ctx: &RenderContext<'_>,
    ) {
        out.push_str("<tr>");
        for (cell, alignment) in cells.iter().zip(&self.alignments) {
            let align = alignment.map(Alignment::attribute).unwrap_or_default();
            out.push_str(&format!("<{tag}{align}>{}</{tag}>", cell.html(ctx)));
        }
        out.push_str("</tr>");
    }

    pub fn plain_text(&self) -> String {
        self.header
            .iter()
            .chain(&self.rows)
            .map(|row| {
                row.iter()
                    .map(FormattedText::plain_text)
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn read(text: &str) -> Table {
        let mut reader = Reader::new(text);
        reader.attempt(Table::read).unwrap()
    }

    fn texts(row: &[FormattedText]) -> Vec<String> {
        row.iter().map(FormattedText::plain_text).collect()
    }

    #[test]
    fn header_and_alignments() {
        let table = read("| Name | Qty | Note |\n| :--- | ---: | :-: |\n| apple | 3 | *fresh* |");
        assert_eq!(
            texts(table.header.as_deref().unwrap()),
            vec!["Name", "Qty", "Note"]
        );
        assert_eq!(
            table.alignments,
            vec![
                Some(Alignment::Left),
                Some(Alignment::Right),
                Some(Alignment::Center)
            ]
        );
        assert_eq!(texts(&table.rows[0]), vec!["apple", "3", "fresh"]);
    }

    #[test]
    fn without_delimiter_row_there_is_no_header() {
        let table = read("| a | b |\n| c | d |");
        assert_eq!(table.header, None);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.alignments, vec![None, None]);
    }

    #[test]
    fn rows_are_padded_and_truncated_to_the_header() {
        let table = read("| a | b |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |");
        assert_eq!(texts(&table.rows[0]), vec!["1", ""]);
        assert_eq!(texts(&table.rows[1]), vec!["1", "2"]);
    }

    #[test]
    fn missing_trailing_pipe() {
        let table = read("| a | b");
        assert_eq!(texts(&table.rows[0]), vec!["a", "b"]);
    }

    #[test]
    fn escaped_pipe_stays_in_the_cell() {
        let table = read(r"| a \| b | c |");
        assert_eq!(texts(&table.rows[0]), vec!["a | b", "c"]);
    }

    #[test]
    fn ends_at_first_non_table_line() {
        let mut reader = Reader::new("| a |\nafter");
        let table = Table::read(&mut reader).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(reader.pos(), 5);
    }

    #[test]
    fn lone_pipe_is_not_a_table() {
        let mut reader = Reader::new("|");
        assert!(reader.attempt(Table::read).is_err());
        assert_eq!(reader.pos(), 0);
    }

    #[test]
    fn html_output() {
        let ctx = RenderContext::empty();
        let table = read("| h |\n|:-:|\n| d |");
        assert_eq!(
            table.html(&ctx),
            "<table><thead><tr><th align=\"center\">h</th></tr></thead>\
             <tbody><tr><td align=\"center\">d</td></tr></tbody></table>"
        );
    }
}
