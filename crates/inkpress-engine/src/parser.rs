use crate::{
    models::Markdown,
    modifiers::{Modifier, ModifierCollection},
    parsing::{self, ParsedDoc},
    render::{HtmlRenderer, RenderContext},
};

/// Converts Markdown to HTML.
///
/// A parser is configuration only: its modifiers are never mutated while
/// parsing, so one instance can be shared between threads and reused for
/// any number of documents.
///
/// ```
/// use inkpress_engine::MarkdownParser;
///
/// let parser = MarkdownParser::new();
/// let markdown = parser.parse("# Title\n\nHello *world*");
/// assert_eq!(markdown.html, "<h1>Title</h1><p>Hello <em>world</em></p>");
/// assert_eq!(markdown.title().as_deref(), Some("Title"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    modifiers: ModifierCollection,
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
        }
    }

    /// Registers a modifier after any already registered for its target.
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.insert(modifier);
    }

    pub fn modifiers(&self) -> &ModifierCollection {
        &self.modifiers
    }

    /// Converts `markdown` to HTML, discarding metadata and title.
    pub fn html(&self, markdown: &str) -> String {
        self.parse(markdown).html
    }

    /// Converts `markdown`. Never fails: text that matches no construct is
    /// rendered as a paragraph.
    pub fn parse(&self, markdown: &str) -> Markdown {
        let doc = self.parse_document(markdown);
        let html = self.render(&doc);
        Markdown {
            html,
            title_heading: doc.title_heading,
            metadata: doc.metadata,
        }
    }

    /// Parses without rendering, for callers bringing their own
    /// [`Renderer`](crate::render::Renderer).
    pub fn parse_document(&self, markdown: &str) -> ParsedDoc {
        parsing::parse_document_with(markdown, &self.modifiers)
    }

    /// Renders a parsed document to HTML with this parser's modifiers.
    pub fn render(&self, doc: &ParsedDoc) -> String {
        HtmlRenderer::new(RenderContext::new(&doc.urls, &self.modifiers)).render(&doc.blocks)
    }
}
