use serde::Serialize;

use crate::{
    parsing::{error::ReadResult, reader::Reader},
    render::{RenderContext, escape_attribute},
};

use super::link::Link;

/// `![alt](src)`: a link whose text is the alt text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub link: Link,
}

impl Image {
    pub const MARKER: char = '!';

    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        reader.read(Self::MARKER)?;
        Ok(Self {
            link: Link::read(reader)?,
        })
    }

    pub fn alt_text(&self) -> String {
        self.link.plain_text()
    }

    pub fn html(&self, ctx: &RenderContext<'_>) -> String {
        let src = escape_attribute(self.link.target.resolve(ctx.urls));
        let alt = self.alt_text();
        let alt = if alt.is_empty() {
            String::new()
        } else {
            format!(" alt=\"{}\"", escape_attribute(&alt))
        };
        let title = self
            .link
            .title
            .as_deref()
            .map(|title| format!(" title=\"{}\"", escape_attribute(title)))
            .unwrap_or_default();
        format!("<img src=\"{src}\"{alt}{title}/>")
    }
}
