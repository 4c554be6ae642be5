use crate::{
    modifiers::ModifierTarget,
    parsing::{
        blocks::{
            ParsedBlock,
            kinds::{CodeBlock, Heading, HorizontalLine, Html, List, Paragraph, Table},
        },
        inline::Image,
    },
};

use super::{RenderContext, Renderer, render_blocks};

/// Renders blocks to HTML strings, running the modifiers for each construct.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Renders `blocks` and concatenates the result.
    pub fn render(&mut self, blocks: &[ParsedBlock]) -> String {
        render_blocks(self, blocks).concat()
    }

    fn finish(&self, target: ModifierTarget, html: String, raw: &str) -> String {
        self.ctx.modify(target, html, raw)
    }
}

impl Renderer for HtmlRenderer<'_> {
    type Output = String;

    fn heading(&mut self, heading: &Heading, raw: &str) -> String {
        self.finish(ModifierTarget::Headings, heading.html(&self.ctx), raw)
    }

    fn paragraph(&mut self, paragraph: &Paragraph, raw: &str) -> String {
        self.finish(ModifierTarget::Paragraphs, paragraph.html(&self.ctx), raw)
    }

    fn blockquote(&mut self, children: Vec<String>, raw: &str) -> String {
        let html = format!("<blockquote>{}</blockquote>", children.concat());
        self.finish(ModifierTarget::Blockquotes, html, raw)
    }

    fn code_block(&mut self, code: &CodeBlock, raw: &str) -> String {
        self.finish(ModifierTarget::CodeBlocks, code.html(), raw)
    }

    fn list(&mut self, list: &List, raw: &str) -> String {
        self.finish(ModifierTarget::Lists, list.html(&self.ctx), raw)
    }

    fn table(&mut self, table: &Table, raw: &str) -> String {
        self.finish(ModifierTarget::Tables, table.html(&self.ctx), raw)
    }

    fn horizontal_line(&mut self, raw: &str) -> String {
        self.finish(
            ModifierTarget::HorizontalLines,
            HorizontalLine::html().to_string(),
            raw,
        )
    }

    fn html(&mut self, html: &Html, raw: &str) -> String {
        self.finish(ModifierTarget::Html, html.html().to_string(), raw)
    }

    fn image(&mut self, image: &Image, raw: &str) -> String {
        self.finish(ModifierTarget::Images, image.html(&self.ctx), raw)
    }
}
