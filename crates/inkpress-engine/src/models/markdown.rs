use serde::Serialize;

use crate::parsing::{blocks::kinds::Heading, metadata::Metadata};

/// The result of converting one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Markdown {
    pub html: String,
    /// The first level-1 heading, if the document has one
    pub title_heading: Option<Heading>,
    /// Front-matter entries, empty when there was no front matter
    pub metadata: Metadata,
}

impl Markdown {
    /// Plain text of the title heading
    pub fn title(&self) -> Option<String> {
        self.title_heading.as_ref().map(Heading::plain_text)
    }
}
