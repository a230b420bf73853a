//! Splitter tests over whole documents.
//!
//! Each case runs the invariant checks before asserting on the tagged
//! blocks, summarised one line per block for readability.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{Block, BlockKind, BlockTag},
    parse_document, tag_blocks,
};

fn split(md: &str) -> Vec<Block> {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    invariants::check(&rope, &doc.blocks);
    tag_blocks(&rope, &doc)
}

fn summary(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| {
            let tag = match &b.tag {
                BlockTag::Heading { level } => format!("h{level}"),
                BlockTag::Quote => "quote".to_string(),
                BlockTag::Code { language } => {
                    format!("code({})", language.as_deref().unwrap_or("-"))
                }
                BlockTag::OrderedList => "ol".to_string(),
                BlockTag::UnorderedList => "ul".to_string(),
                BlockTag::Table => "table".to_string(),
                BlockTag::Image { path, .. } => format!("image({path})"),
                BlockTag::Rule => "rule".to_string(),
                BlockTag::Paragraph => "p".to_string(),
            };
            format!("{tag}: {:?}", b.text)
        })
        .collect()
}

#[test]
fn empty_document() {
    assert!(split("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(split("\n\n  \n\t\n").is_empty());
}

#[test]
fn blank_lines_separate_paragraphs() {
    let blocks = split("one\ntwo\n\n\nthree\n");
    assert_eq!(
        summary(&blocks),
        vec![r#"p: "one\ntwo""#, r#"p: "three""#]
    );
}

#[test]
fn crlf_lines_are_split_like_lf() {
    let blocks = split("one\r\ntwo\r\n\r\nthree");
    assert_eq!(
        summary(&blocks),
        vec![r#"p: "one\r\ntwo""#, r#"p: "three""#]
    );
}

#[test]
fn fence_keeps_internal_blank_lines() {
    let md = "Intro\n```rust\nfn a() {}\n\nfn b() {}\n```\nAfter";
    let blocks = split(md);
    assert_eq!(
        summary(&blocks),
        vec![
            r#"p: "Intro""#,
            r#"code(rust): "fn a() {}\n\nfn b() {}""#,
            r#"p: "After""#,
        ]
    );
}

#[test]
fn markdown_inside_fence_is_not_classified() {
    let md = "```\n# not a heading\n> not a quote\n- not a list\n```";
    let blocks = split(md);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].tag, BlockTag::Code { language: None });
    assert_eq!(blocks[0].text, "# not a heading\n> not a quote\n- not a list");
}

#[test]
fn unclosed_fence_runs_to_end_of_input() {
    let rope = Rope::from("text\n```py\nprint(1)\n\nprint(2)\n");
    let doc = parse_document(&rope);
    invariants::check(&rope, &doc.blocks);

    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(
        doc.blocks[1].kind,
        BlockKind::FencedCode {
            info: Some("py".to_string()),
            closed: false,
        }
    );
    let blocks = tag_blocks(&rope, &doc);
    assert_eq!(blocks[1].text, "print(1)\n\nprint(2)");
}

#[test]
fn empty_fence_is_still_a_block() {
    let blocks = split("```\n```");
    assert_eq!(summary(&blocks), vec![r#"code(-): """#]);
}

#[test]
fn single_line_blocks_split_from_surrounding_text() {
    let md = "before\n## Heading\n> quoted\n![alt](a.png)\nafter";
    let blocks = split(md);
    assert_eq!(
        summary(&blocks),
        vec![
            r#"p: "before""#,
            "h2: \"## Heading\"",
            r#"quote: "> quoted""#,
            r#"image(a.png): "![alt](a.png)""#,
            r#"p: "after""#,
        ]
    );
}

#[test]
fn mixed_document() {
    let md = "\
# Title

Some **bold** text.

- one
- two

1. first
2. second

| a | b |
|---|---|
| 1 | 2 |

---

```
plain
```
";
    let blocks = split(md);
    assert_eq!(
        summary(&blocks),
        vec![
            "h1: \"# Title\"",
            r#"p: "Some **bold** text.""#,
            r#"ul: "- one\n- two""#,
            r#"ol: "1. first\n2. second""#,
            r#"table: "| a | b |\n|---|---|\n| 1 | 2 |""#,
            r#"rule: "---""#,
            r#"code(-): "plain""#,
        ]
    );
}

#[rstest]
#[case("- a\n- b")]
#[case("- a\n* b")]
#[case("1. a\n2. b\n3. c")]
#[case("para\ncontinued")]
fn multi_line_text_stays_one_block(#[case] md: &str) {
    assert_eq!(split(md).len(), 1);
}

#[test]
fn any_line_starting_with_a_hash_is_its_own_block() {
    let blocks = split("para\n#tag\nmore\n####### seven");
    assert_eq!(
        summary(&blocks),
        vec![
            r#"p: "para""#,
            "p: \"#tag\"",
            r#"p: "more""#,
            "p: \"####### seven\"",
        ]
    );
}

#[test]
fn each_quote_line_is_its_own_block() {
    let blocks = split("> a\n> b");
    assert_eq!(summary(&blocks), vec![r#"quote: "> a""#, r#"quote: "> b""#]);
}

#[test]
fn spans_slice_back_to_source() {
    let md = "# Title\n\nBody line\n```\ncode\n```\n";
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    let slices: Vec<String> = doc
        .blocks
        .iter()
        .map(|b| String::from(rope.slice_to_cow(b.span.start..b.span.end)))
        .collect();
    assert_eq!(slices, vec!["# Title\n", "Body line\n", "```\ncode\n```\n"]);
}
