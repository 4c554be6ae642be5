//! Post-scan normalisation of inline tokens.
//!
//! The scanner emits nodes and unpaired delimiter runs in document order.
//! This pass pairs delimiters into [`InlineNode::Styled`] wrappers, turns
//! leftovers back into literal text, and coalesces adjacent text nodes.

use crate::parsing::span::Span;

use super::{
    kinds::{DelimiterRun, Emphasis},
    types::InlineNode,
};

#[derive(Debug)]
pub(crate) enum Token {
    Node(InlineNode),
    Delimiter(DelimiterRun),
}

/// An opener still waiting for its closer, with everything read since.
struct OpenFrame {
    marker: char,
    start: usize,
    count: usize,
    children: Vec<InlineNode>,
}

impl OpenFrame {
    fn into_literal(self, into: &mut Vec<InlineNode>) {
        into.push(literal(self.marker, self.start, self.count));
        into.extend(self.children);
    }
}

pub(crate) fn build(tokens: Vec<Token>) -> Vec<InlineNode> {
    let mut root = Vec::new();
    let mut open: Vec<OpenFrame> = Vec::new();

    for token in tokens {
        match token {
            Token::Node(node) => children(&mut root, &mut open).push(node),
            Token::Delimiter(run) => close_or_open(&mut root, &mut open, run),
        }
    }

    while let Some(frame) = open.pop() {
        frame.into_literal(children(&mut root, &mut open));
    }

    let mut nodes = coalesce(root);
    if let Some(InlineNode::Text { text, .. }) = nodes.last_mut() {
        let trimmed = text.trim_end().len();
        text.truncate(trimmed);
    }
    nodes
}

fn children<'a>(
    root: &'a mut Vec<InlineNode>,
    open: &'a mut [OpenFrame],
) -> &'a mut Vec<InlineNode> {
    match open.last_mut() {
        Some(frame) => &mut frame.children,
        None => root,
    }
}

fn close_or_open(root: &mut Vec<InlineNode>, open: &mut Vec<OpenFrame>, mut run: DelimiterRun) {
    if run.can_close {
        while run.count > 0 {
            let Some(index) = open.iter().rposition(|frame| {
                frame.marker == run.marker
                    && Emphasis::pairing(run.marker, frame.count, run.count).is_some()
            }) else {
                break;
            };

            // Openers between the match and this closer can never close now.
            while open.len() > index + 1 {
                if let Some(frame) = open.pop() {
                    frame.into_literal(children(root, open));
                }
            }

            let Some(frame) = open.last_mut() else { break };
            let Some(used) = Emphasis::pairing(run.marker, frame.count, run.count) else {
                break;
            };

            frame.count -= used;
            let node = InlineNode::Styled {
                span: Span::new(frame.start + frame.count, run.start + used),
                style: Emphasis::style(run.marker, used),
                children: coalesce(std::mem::take(&mut frame.children)),
            };
            run.start += used;
            run.count -= used;

            if frame.count == 0 {
                open.pop();
                children(root, open).push(node);
            } else {
                frame.children.push(node);
            }
        }
    }

    if run.count == 0 {
        return;
    }
    if run.can_open {
        open.push(OpenFrame {
            marker: run.marker,
            start: run.start,
            count: run.count,
            children: Vec::new(),
        });
    } else {
        children(root, open).push(literal(run.marker, run.start, run.count));
    }
}

fn literal(marker: char, start: usize, count: usize) -> InlineNode {
    InlineNode::Text {
        span: Span::new(start, start + count),
        text: marker.to_string().repeat(count),
    }
}

fn coalesce(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out: Vec<InlineNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let (
            InlineNode::Text { span, text },
            Some(InlineNode::Text {
                span: previous_span,
                text: previous_text,
            }),
        ) = (&node, out.last_mut())
        {
            previous_span.end = span.end;
            previous_text.push_str(text);
            continue;
        }
        out.push(node);
    }
    out
}
