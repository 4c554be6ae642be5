use serde::Serialize;

use crate::{
    modifiers::ModifierTarget,
    parsing::span::Span,
    render::{RenderContext, escape_text},
};

use super::kinds::{Image, Link};

/// Inline content: an ordered run of [`InlineNode`]s.
///
/// The top-level nodes tile `span` exactly, so slicing the source with each
/// node's span and concatenating reproduces the inline text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattedText {
    pub nodes: Vec<InlineNode>,
    /// Extent of the inline text in the reader it was parsed from.
    pub span: Span,
}

/// The style applied by a matched pair of emphasis delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Style {
    Emphasis,
    Strong,
    Strikethrough,
}

/// A parsed inline node with the character span it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InlineNode {
    /// Literal text. `text` has escapes resolved, so it may be shorter than `span`.
    Text { span: Span, text: String },
    /// A line break inside a paragraph. Hard breaks came from two or more
    /// trailing spaces.
    LineBreak { span: Span, hard: bool },
    /// A backtick code span. No other inline parsing happens inside it.
    Code {
        span: Span,
        raw: String,
        code: String,
    },
    /// Content wrapped in a matched delimiter pair.
    Styled {
        span: Span,
        style: Style,
        children: Vec<InlineNode>,
    },
    Link { span: Span, raw: String, link: Link },
    Image { span: Span, raw: String, image: Image },
}

impl InlineNode {
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text { span, .. }
            | InlineNode::LineBreak { span, .. }
            | InlineNode::Code { span, .. }
            | InlineNode::Styled { span, .. }
            | InlineNode::Link { span, .. }
            | InlineNode::Image { span, .. } => *span,
        }
    }

    fn write_html(&self, ctx: &RenderContext<'_>, out: &mut String) {
        match self {
            InlineNode::Text { text, .. } => out.push_str(&escape_text(text)),
            InlineNode::LineBreak { hard: true, .. } => out.push_str("<br>"),
            InlineNode::LineBreak { hard: false, .. } => out.push(' '),
            InlineNode::Code { raw, code, .. } => {
                let html = format!("<code>{}</code>", escape_text(code));
                out.push_str(&ctx.modify(ModifierTarget::InlineCode, html, raw));
            }
            InlineNode::Styled {
                style, children, ..
            } => {
                let tag = match style {
                    Style::Emphasis => "em",
                    Style::Strong => "strong",
                    Style::Strikethrough => "s",
                };
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for child in children {
                    child.write_html(ctx, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            InlineNode::Link { raw, link, .. } => {
                out.push_str(&ctx.modify(ModifierTarget::Links, link.html(ctx), raw));
            }
            InlineNode::Image { raw, image, .. } => {
                out.push_str(&ctx.modify(ModifierTarget::Images, image.html(ctx), raw));
            }
        }
    }

    fn write_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { text, .. } => out.push_str(text),
            InlineNode::LineBreak { .. } => out.push(' '),
            InlineNode::Code { code, .. } => out.push_str(code),
            InlineNode::Styled { children, .. } => {
                for child in children {
                    child.write_plain_text(out);
                }
            }
            InlineNode::Link { link, .. } => out.push_str(&link.plain_text()),
            InlineNode::Image { image, .. } => out.push_str(&image.alt_text()),
        }
    }
}

impl FormattedText {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn html(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(ctx, &mut out);
        }
        out
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_plain_text(&mut out);
        }
        out
    }
}
