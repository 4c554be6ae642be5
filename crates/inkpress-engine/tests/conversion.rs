use std::sync::Arc;

use inkpress_engine::{
    MarkdownParser, Modifier, ModifierTarget,
    parsing::{
        blocks::kinds::{CodeBlock, Heading, Html, List, Paragraph, Table},
        inline::Image,
    },
    render::{Renderer, render_blocks},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parser() -> MarkdownParser {
    let _ = env_logger::builder().is_test(true).try_init();
    MarkdownParser::new()
}

#[test]
fn heading_and_paragraph() {
    let markdown = parser().parse("# Title\n\nHello *world*");
    assert_eq!(markdown.html, "<h1>Title</h1><p>Hello <em>world</em></p>");
    let title = markdown.title_heading.as_ref().unwrap();
    assert_eq!(title.level, 1);
    assert_eq!(markdown.title().as_deref(), Some("Title"));
}

#[test]
fn reference_link_declaration_is_hidden() {
    let html = parser().html("[ref]: http://example.com\n[text][ref]");
    assert_eq!(html, "<p><a href=\"http://example.com\">text</a></p>");
}

#[test]
fn reference_links_resolve_forwards_and_backwards() {
    let parser = parser();
    let before = parser.html("[Site]: https://example.com\n\nVisit [the site][site].");
    let after = parser.html("Visit [the site][site].\n\n[Site]: https://example.com");
    assert_eq!(before, after);
    insta::assert_snapshot!(after, @r#"<p>Visit <a href="https://example.com">the site</a>.</p>"#);
}

#[test]
fn reference_images_resolve_forwards_and_backwards() {
    let parser = parser();
    let before = parser.html("[logo]: /img/logo.png\n\n![Logo][logo]");
    let after = parser.html("![Logo][logo]\n\n[logo]: /img/logo.png");
    assert_eq!(before, after);
    insta::assert_snapshot!(after, @r#"<img src="/img/logo.png" alt="Logo"/>"#);
}

#[test]
fn unresolved_reference_uses_its_name() {
    let html = parser().html("[text][nowhere]");
    insta::assert_snapshot!(html, @r#"<p><a href="nowhere">text</a></p>"#);
}

#[test]
fn front_matter_becomes_metadata() {
    let markdown = parser().parse("---\nkey: value\n---\n# Title");
    assert_eq!(markdown.metadata.get("key"), Some("value"));
    assert_eq!(markdown.metadata.len(), 1);
    assert_eq!(markdown.html, "<h1>Title</h1>");
}

#[test]
fn front_matter_later_in_the_document_is_content() {
    let markdown = parser().parse("# T\n\n---\nkey: value\n---");
    assert!(markdown.metadata.is_empty());
    assert_eq!(markdown.html, "<h1>T</h1><hr><p>key: value</p><hr>");
}

#[test]
fn malformed_front_matter_is_content() {
    let markdown = parser().parse("---\nnot metadata\n---");
    assert!(markdown.metadata.is_empty());
    assert_eq!(markdown.html, "<hr><p>not metadata</p><hr>");
}

#[rstest]
#[case("***", "<hr>")]
#[case("* item", "<ul><li>item</li></ul>")]
#[case("[broken(url)", "<p>[broken(url)</p>")]
#[case("[text](url", "<p>[text](url</p>")]
#[case("a < b && c > d", "<p>a &lt; b &amp;&amp; c &gt; d</p>")]
#[case("<div>\nno end", "<p>&lt;div&gt; no end</p>")]
#[case("~~gone~~", "<p><s>gone</s></p>")]
#[case(r"\*literal\*", "<p>*literal*</p>")]
#[case("one  \ntwo", "<p>one<br>two</p>")]
#[case("one\ntwo", "<p>one two</p>")]
#[case("`a < b`", "<p><code>a &lt; b</code></p>")]
#[case("snake_case_name", "<p>snake_case_name</p>")]
#[case("**unclosed", "<p>**unclosed</p>")]
#[case("### Closed ###", "<h3>Closed</h3>")]
#[case("####### seven", "<p>####### seven</p>")]
#[case("![](a.png)", "<img src=\"a.png\"/>")]
#[case("![A \"cat\"](cat.png)", "<img src=\"cat.png\" alt=\"A &quot;cat&quot;\"/>")]
#[case("![logo][l]\n\n[l]: /l.png", "<img src=\"/l.png\" alt=\"logo\"/>")]
#[case("[L]: /l.png\n![logo][l]", "<img src=\"/l.png\" alt=\"logo\"/>")]
#[case("![logo][]\n\n[logo]: /l.png", "<img src=\"/l.png\" alt=\"logo\"/>")]
#[case("Look: ![logo][l]\n\n[l]: /l.png", "<p>Look: <img src=\"/l.png\" alt=\"logo\"/></p>")]
#[case("<b>bold\n\ntext</b>", "<p>&lt;b&gt;bold</p><p>text&lt;/b&gt;</p>")]
#[case("[a](/b \"The B\")", "<p><a href=\"/b\" title=\"The B\">a</a></p>")]
#[case("<div class=\"x\">\n*raw*\n</div>", "<div class=\"x\">\n*raw*\n</div>")]
#[case("<!-- note -->", "<!-- note -->")]
#[case("```swift\nlet x = 1\n```", "<pre><code class=\"language-swift\">let x = 1\n</code></pre>")]
#[case("> quoted **text**", "<blockquote><p>quoted <strong>text</strong></p></blockquote>")]
#[case("3. c\n4. d", "<ol start=\"3\"><li>c</li><li>d</li></ol>")]
fn converts(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parser().html(input), expected);
}

#[rstest]
#[case("x")]
#[case("# Heading")]
#[case("   \n\n  text  \n\n")]
#[case("<")]
#[case("|")]
#[case("---")]
#[case("- ")]
#[case("```")]
#[case("]:[")]
fn non_empty_input_gives_non_empty_html(#[case] input: &str) {
    assert!(!parser().html(input).is_empty(), "{input:?}");
}

#[rstest]
#[case("")]
#[case("  \n\t\n ")]
fn blank_input_gives_empty_html(#[case] input: &str) {
    assert_eq!(parser().html(input), "");
}

#[test]
fn title_is_the_first_level_one_heading() {
    let markdown = parser().parse("## Intro\n\n# First\n\n# Second");
    assert_eq!(markdown.title().as_deref(), Some("First"));

    let markdown = parser().parse("## Only a subheading");
    assert_eq!(markdown.title_heading, None);
}

#[test]
fn inline_modifiers_receive_the_fragment_source() {
    let parser = MarkdownParser::with_modifiers([
        Modifier::new(ModifierTarget::Links, |input| {
            format!("{}|{}", input.html, input.markdown)
        }),
        Modifier::new(ModifierTarget::InlineCode, |_| "<code>redacted</code>".into()),
    ]);
    assert_eq!(
        parser.html("see [a](b) and `secret`"),
        "<p>see <a href=\"b\">a</a>|[a](b) and <code>redacted</code></p>"
    );
}

#[test]
fn block_modifiers_receive_the_block_source() {
    let mut parser = parser();
    parser.add_modifier(Modifier::new(ModifierTarget::Headings, |input| {
        let anchor = input.markdown.trim_start_matches('#').trim().to_lowercase();
        input.html.replacen("<h2>", &format!("<h2 id=\"{anchor}\">"), 1)
    }));
    assert_eq!(
        parser.html("## Getting started"),
        "<h2 id=\"getting started\">Getting started</h2>"
    );
}

#[test]
fn metadata_modifiers_rewrite_front_matter() {
    let parser = MarkdownParser::with_modifiers([
        Modifier::new(ModifierTarget::MetadataKeys, |input| input.html.to_lowercase()),
        Modifier::new(ModifierTarget::MetadataValues, |input| input.html.to_uppercase()),
    ]);
    let markdown = parser.parse("---\nAuthor: ada\n---\nText");
    assert_eq!(markdown.metadata.get("author"), Some("ADA"));
    assert_eq!(markdown.html, "<p>Text</p>");
}

#[test]
fn one_parser_serves_many_threads() {
    let parser = Arc::new(MarkdownParser::with_modifiers([Modifier::new(
        ModifierTarget::Paragraphs,
        |input| format!("<div>{}</div>", input.html),
    )]));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = Arc::clone(&parser);
                scope.spawn(move || parser.html(&format!("# Doc {i}\n\nbody {i}")))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(
                handle.join().unwrap(),
                format!("<h1>Doc {i}</h1><div><p>body {i}</p></div>")
            );
        }
    });
}

#[test]
fn result_serializes() {
    let markdown = parser().parse("---\nlayout: post\n---\nBody");
    insta::assert_yaml_snapshot!(markdown.metadata, @"layout: post");
    assert_eq!(markdown.html, "<p>Body</p>");
}

/// Renders to a plain-text table of contents.
struct Contents;

impl Renderer for Contents {
    type Output = Option<String>;

    fn heading(&mut self, heading: &Heading, _: &str) -> Option<String> {
        let indent = "  ".repeat(usize::from(heading.level) - 1);
        Some(format!("{indent}{}", heading.plain_text()))
    }
    fn paragraph(&mut self, _: &Paragraph, _: &str) -> Option<String> {
        None
    }
    fn blockquote(&mut self, children: Vec<Option<String>>, _: &str) -> Option<String> {
        let quoted: Vec<_> = children.into_iter().flatten().collect();
        (!quoted.is_empty()).then(|| quoted.join("\n"))
    }
    fn code_block(&mut self, _: &CodeBlock, _: &str) -> Option<String> {
        None
    }
    fn list(&mut self, _: &List, _: &str) -> Option<String> {
        None
    }
    fn table(&mut self, _: &Table, _: &str) -> Option<String> {
        None
    }
    fn horizontal_line(&mut self, _: &str) -> Option<String> {
        None
    }
    fn html(&mut self, _: &Html, _: &str) -> Option<String> {
        None
    }
    fn image(&mut self, _: &Image, _: &str) -> Option<String> {
        None
    }
}

#[test]
fn custom_renderer_sees_parsed_blocks() {
    let doc = parser().parse_document(
        "# Guide\n\nIntro.\n\n## Install\n\n> ## Quoted\n\n```\n# not a heading\n```",
    );
    let contents: Vec<String> = render_blocks(&mut Contents, &doc.blocks)
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(contents, vec!["Guide", "  Install", "  Quoted"]);
}
