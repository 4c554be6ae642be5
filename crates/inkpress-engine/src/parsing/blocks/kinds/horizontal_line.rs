use crate::parsing::{
    error::{ReadResult, require},
    reader::Reader,
    span::Span,
};

/// A thematic break: three or more `-` or `*` alone on a line.
pub struct HorizontalLine;

impl HorizontalLine {
    pub const MARKERS: [char; 2] = ['-', '*'];
    pub const MIN_MARKERS: usize = 3;

    /// Spaces between markers are allowed, mixing markers is not.
    pub fn matches(line: &[char]) -> bool {
        let mut markers = line.iter().filter(|c| !matches!(c, ' ' | '\t'));
        let Some(&first) = markers.next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && markers.clone().all(|&c| c == first)
            && markers.count() + 1 >= Self::MIN_MARKERS
    }

    pub fn read(reader: &mut Reader) -> ReadResult<()> {
        let line_end = reader.line_end();
        require(
            Self::matches(reader.chars(Span::new(reader.pos(), line_end))),
            "horizontal line",
        )?;
        reader.skip_to(line_end);
        Ok(())
    }

    pub fn html() -> &'static str {
        "<hr>"
    }
}
