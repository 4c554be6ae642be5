use serde::Serialize;

use crate::{
    parsing::{
        inline::{FormattedText, InlineOptions, parse_inline},
        reader::Reader,
    },
    render::RenderContext,
};

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// construct matches, and reading one never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: FormattedText,
}

impl Paragraph {
    pub fn read(reader: &mut Reader) -> Self {
        Self {
            text: parse_inline(reader, InlineOptions::paragraph()),
        }
    }

    pub fn html(&self, ctx: &RenderContext<'_>) -> String {
        format!("<p>{}</p>", self.text.html(ctx))
    }

    pub fn plain_text(&self) -> String {
        self.text.plain_text()
    }
}
