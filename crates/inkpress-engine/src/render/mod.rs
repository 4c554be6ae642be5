//! # Rendering
//!
//! Parsed blocks are turned into output by a [`Renderer`]. [`HtmlRenderer`]
//! is the built-in one; other targets implement the trait and walk the same
//! blocks with [`render_blocks`].
//!
//! Link and image targets are resolved here, against the document's
//! [`NamedUrlCollection`], never while parsing.

use std::borrow::Cow;

use crate::{
    modifiers::{ModifierCollection, ModifierTarget},
    parsing::{
        blocks::{
            Block, ParsedBlock,
            kinds::{CodeBlock, Heading, Html, List, Paragraph, Table},
        },
        inline::Image,
        urls::NamedUrlCollection,
    },
};

pub mod html;

pub use html::HtmlRenderer;

static NO_URLS: NamedUrlCollection = NamedUrlCollection::new();
static NO_MODIFIERS: ModifierCollection = ModifierCollection::new();

/// What rendering a construct needs besides the construct itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub urls: &'a NamedUrlCollection,
    pub modifiers: &'a ModifierCollection,
}

impl<'a> RenderContext<'a> {
    pub fn new(urls: &'a NamedUrlCollection, modifiers: &'a ModifierCollection) -> Self {
        Self { urls, modifiers }
    }

    /// Passes `html` through the modifiers registered for `target`.
    pub fn modify(&self, target: ModifierTarget, html: String, markdown: &str) -> String {
        self.modifiers.apply(target, html, markdown)
    }
}

impl RenderContext<'static> {
    /// A context without declarations or modifiers.
    pub fn empty() -> Self {
        Self::new(&NO_URLS, &NO_MODIFIERS)
    }
}

/// Escapes `<`, `>` and `&` in text content.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escapes text for use inside a double-quoted attribute value.
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// One method per block construct.
///
/// Each method gets the parsed construct and the source text it was read
/// from. Blockquotes are rendered bottom-up: the nested blocks are rendered
/// first and handed over as `children`.
pub trait Renderer {
    type Output;

    fn heading(&mut self, heading: &Heading, raw: &str) -> Self::Output;
    fn paragraph(&mut self, paragraph: &Paragraph, raw: &str) -> Self::Output;
    fn blockquote(&mut self, children: Vec<Self::Output>, raw: &str) -> Self::Output;
    fn code_block(&mut self, code: &CodeBlock, raw: &str) -> Self::Output;
    fn list(&mut self, list: &List, raw: &str) -> Self::Output;
    fn table(&mut self, table: &Table, raw: &str) -> Self::Output;
    fn horizontal_line(&mut self, raw: &str) -> Self::Output;
    fn html(&mut self, html: &Html, raw: &str) -> Self::Output;
    fn image(&mut self, image: &Image, raw: &str) -> Self::Output;
}

pub fn render_block<R: Renderer>(renderer: &mut R, parsed: &ParsedBlock) -> R::Output {
    let raw = parsed.raw.as_str();
    match &parsed.block {
        Block::Heading(heading) => renderer.heading(heading, raw),
        Block::Paragraph(paragraph) => renderer.paragraph(paragraph, raw),
        Block::Blockquote(quote) => {
            let children = render_blocks(renderer, &quote.blocks);
            renderer.blockquote(children, raw)
        }
        Block::CodeBlock(code) => renderer.code_block(code, raw),
        Block::List(list) => renderer.list(list, raw),
        Block::Table(table) => renderer.table(table, raw),
        Block::HorizontalLine => renderer.horizontal_line(raw),
        Block::Html(html) => renderer.html(html, raw),
        Block::Image(image) => renderer.image(image, raw),
    }
}

pub fn render_blocks<R: Renderer>(renderer: &mut R, blocks: &[ParsedBlock]) -> Vec<R::Output> {
    blocks
        .iter()
        .map(|block| render_block(renderer, block))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    /// Collects the shape of a document, to check the traversal order.
    struct Outline;

    impl Renderer for Outline {
        type Output = String;

        fn heading(&mut self, heading: &Heading, _: &str) -> String {
            format!("h{}", heading.level)
        }
        fn paragraph(&mut self, _: &Paragraph, _: &str) -> String {
            "p".into()
        }
        fn blockquote(&mut self, children: Vec<String>, _: &str) -> String {
            format!("quote({})", children.join(","))
        }
        fn code_block(&mut self, _: &CodeBlock, _: &str) -> String {
            "code".into()
        }
        fn list(&mut self, list: &List, _: &str) -> String {
            format!("list{}", list.items.len())
        }
        fn table(&mut self, _: &Table, _: &str) -> String {
            "table".into()
        }
        fn horizontal_line(&mut self, _: &str) -> String {
            "hr".into()
        }
        fn html(&mut self, _: &Html, raw: &str) -> String {
            raw.into()
        }
        fn image(&mut self, _: &Image, _: &str) -> String {
            "img".into()
        }
    }

    #[test]
    fn custom_renderer_walks_blocks_in_order() {
        let doc = parse_document("## Sub\n\n> para\n> > # deep\n\n- a\n- b\n\n***\n\n<br>");
        let outline = render_blocks(&mut Outline, &doc.blocks);
        assert_eq!(outline, vec!["h2", "quote(p,quote(h1))", "list2", "hr", "<br>"]);
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
    }
}
