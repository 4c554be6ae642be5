//! Integration tests for the parsing module.
//!
//! Fixture-based tests render each `fixtures/<name>.md` and compare it with
//! `fixtures/<name>.html`; every fixture is also run through the invariant
//! checks.


use pretty_assertions::assert_eq;

use crate::{
    modifiers::ModifierCollection,
    parsing::{
        blocks::{Block, BlockKind},
        inline::InlineNode,
        parse_document,
    },
    render::{HtmlRenderer, RenderContext},
};

// Fixture-based tests

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_nested_quote_fence() {
    assert_fixture("nested_quote_fence");
}

#[test]
fn fixture_reference_links() {
    assert_fixture("reference_links");
}

#[test]
fn fixture_lists_and_tables() {
    assert_fixture("lists_and_tables");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let doc = parse_document(&md);
    invariants::check(&md, &doc);

    let modifiers = ModifierCollection::new();
    let html = HtmlRenderer::new(RenderContext::new(&doc.urls, &modifiers)).render(&doc.blocks);
    assert_eq!(html, expected.trim_end());
}

// Structure tests

#[test]
fn block_outline() {
    let md = "# Title\n\n> quote\n> > deeper";
    let doc = parse_document(md);
    invariants::check(md, &doc);
    insta::assert_snapshot!(normalize::outline(&doc), @r##"
    Heading 0..7 "# Title"
    Blockquote 9..27 "> quote\n> > deeper"
      Paragraph 0..5 "quote"
      Blockquote 6..14 "> deeper"
        Paragraph 0..6 "deeper"
    "##);
}

#[test]
fn fallbacks_keep_the_original_text() {
    let md = "#nope\n\n<div>unclosed\n\n[dangling]: \n\n```inline```";
    let doc = parse_document(md);
    invariants::check(md, &doc);
    insta::assert_snapshot!(normalize::outline(&doc), @r##"
    Paragraph 0..5 "#nope"
    Paragraph 7..20 "<div>unclosed"
    Paragraph 22..34 "[dangling]: "
    Paragraph 36..48 "```inline```"
    "##);
}

/// Code spans are raw zones: nothing inside them is parsed.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let md = "`[not](a link) *or emphasis*`";
    let doc = parse_document(md);
    assert_eq!(doc.blocks.len(), 1);

    let Block::Paragraph(paragraph) = &doc.blocks[0].block else {
        panic!("expected a paragraph, got {:?}", doc.blocks[0].block);
    };
    assert_eq!(paragraph.text.nodes.len(), 1);
    assert!(matches!(paragraph.text.nodes[0], InlineNode::Code { .. }));
}

/// Unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let md = "[unclosed and `also unclosed";
    let doc = parse_document(md);
    invariants::check(md, &doc);

    let Block::Paragraph(paragraph) = &doc.blocks[0].block else {
        panic!("expected a paragraph, got {:?}", doc.blocks[0].block);
    };
    assert_eq!(paragraph.text.nodes.len(), 1);
    assert_eq!(paragraph.plain_text(), md);
}

#[test]
fn multibyte_text_keeps_character_spans() {
    let md = "# Café ☕\n\nnaïve *über* text";
    let doc = parse_document(md);
    invariants::check(md, &doc);
    assert_eq!(doc.blocks[1].raw, "naïve *über* text");
}

#[test]
fn carriage_returns_are_line_breaks() {
    let md = "# Title\r\n\r\ntext";
    let doc = parse_document(md);
    assert_eq!(
        doc.blocks.iter().map(|b| b.block.kind()).collect::<Vec<_>>(),
        vec![BlockKind::Heading, BlockKind::Paragraph]
    );
}

#[test]
fn empty_document() {
    let doc = parse_document("");
    assert!(doc.blocks.is_empty());
    assert!(doc.metadata.is_empty());
    assert_eq!(doc.title_heading, None);
}

/// Blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n \t\n");
    assert!(doc.blocks.is_empty());
}

#[test]
fn title_is_the_first_top_level_h1() {
    let doc = parse_document("> # Quoted\n\n## Second level\n\n# First\n\n# Second");
    let title = doc.title_heading.unwrap();
    assert_eq!(title.plain_text(), "First");
}
