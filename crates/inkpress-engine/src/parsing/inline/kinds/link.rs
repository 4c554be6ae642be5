use serde::Serialize;

use crate::{
    parsing::{
        error::{ReadError, ReadResult},
        inline::{FormattedText, InlineOptions, parse_inline},
        reader::Reader,
        urls::NamedUrlCollection,
    },
    render::{RenderContext, escape_attribute},
};

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    /// `[text](url)`
    Url(String),
    /// `[text][name]`, resolved against the document's declarations at render time.
    Reference(String),
}

impl LinkTarget {
    /// Resolves the target. Unknown references fall back to the reference name.
    pub fn resolve<'a>(&'a self, urls: &'a NamedUrlCollection) -> &'a str {
        match self {
            LinkTarget::Url(url) => url.as_str(),
            LinkTarget::Reference(name) => urls.url(name).unwrap_or(name.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub target: LinkTarget,
    pub title: Option<String>,
    pub text: FormattedText,
}

impl Link {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
    pub const TITLE_QUOTE: char = '"';

    /// Reads `[text](url)`, `[text](url "title")`, `[text][name]` or `[text][]`.
    ///
    /// Link text is a single line and may contain images but not other links.
    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        reader.read(Self::OPEN)?;
        let text = parse_inline(
            reader,
            InlineOptions::single_line()
                .terminated_by(&[Self::CLOSE])
                .without_links(),
        );
        reader.read(Self::CLOSE)?;

        match reader.current_char() {
            Some(Self::URL_OPEN) => {
                reader.advance();
                reader.discard_whitespace();
                let url = reader.read_until(&[Self::URL_CLOSE, ' ', '\t'])?;
                reader.discard_whitespace();
                let title = Self::read_title(reader)?;
                reader.read(Self::URL_CLOSE)?;
                Ok(Self {
                    target: LinkTarget::Url(url),
                    title,
                    text,
                })
            }
            Some(Self::OPEN) => {
                reader.advance();
                let name = reader.read_until(&[Self::CLOSE])?;
                reader.advance();
                let name = if name.trim().is_empty() {
                    text.plain_text()
                } else {
                    name
                };
                Ok(Self {
                    target: LinkTarget::Reference(name),
                    title: None,
                    text,
                })
            }
            Some(found) => Err(ReadError::UnexpectedCharacter {
                expected: Self::URL_OPEN,
                found: Some(found),
            }),
            None => Err(ReadError::UnexpectedEndOfInput),
        }
    }

    fn read_title(reader: &mut Reader) -> ReadResult<Option<String>> {
        if reader.current_char() != Some(Self::TITLE_QUOTE) {
            return Ok(None);
        }
        reader.advance();
        let title = reader.read_until(&[Self::TITLE_QUOTE])?;
        reader.advance();
        reader.discard_whitespace();
        Ok(Some(title))
    }

    pub fn html(&self, ctx: &RenderContext<'_>) -> String {
        let url = escape_attribute(self.target.resolve(ctx.urls));
        let title = self
            .title
            .as_deref()
            .map(|title| format!(" title=\"{}\"", escape_attribute(title)))
            .unwrap_or_default();
        format!("<a href=\"{url}\"{title}>{}</a>", self.text.html(ctx))
    }

    pub fn plain_text(&self) -> String {
        self.text.plain_text()
    }
}
