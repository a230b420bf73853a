use std::path::Path;

use insta::assert_snapshot;
use markdown_article_engine::{
    Article, RenderOptions, convert, parsing::inline::rewrite_inline, prepare,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn convert_default(md: &str) -> Article {
    convert(md, Path::new("/docs"), &RenderOptions::default())
}

#[test]
fn h1_becomes_title_and_is_not_rendered() {
    let article = convert_default("# Hello\n\nBody text");
    assert_eq!(article.title, "Hello");
    assert_snapshot!(&article.html, @"<p>Body text</p>");
    assert_eq!(article.total_blocks, 1);
}

#[test]
fn h2_becomes_title_and_is_still_rendered() {
    let article = convert_default("## Section\n\nBody");
    assert_eq!(article.title, "Section");
    assert_snapshot!(&article.html, @"<h2>Section</h2><p>Body</p>");
    assert_eq!(article.total_blocks, 2);
}

#[test]
fn plain_first_line_is_title_and_kept() {
    let article = convert_default("Just a sentence.\nSecond line.");
    assert_eq!(article.title, "Just a sentence.");
    assert_snapshot!(&article.html, @"<p>Just a sentence.<br>Second line.</p>");
}

#[test]
fn empty_document_uses_placeholder_title() {
    let article = convert_default("");
    assert_eq!(article.title, "Untitled");
    assert_eq!(article.html, "");
    assert_eq!(article.total_blocks, 0);
    assert_eq!(article.cover_image, None);
    assert!(article.content_images.is_empty());
}

#[test]
fn images_are_extracted_with_positions() {
    let article = convert_default("Intro\n\n![alt](img1.png)\n\nMore\n\n![alt2](img2.png)");

    assert_eq!(article.cover_image.as_deref(), Some("/docs/img1.png"));
    assert_eq!(article.content_images.len(), 1);
    let image = &article.content_images[0];
    assert_eq!(image.path, "/docs/img2.png");
    assert_eq!(image.alt, "alt2");
    assert_eq!(image.block_index, 1);
    assert!(!image.leading);
    assert_eq!(image.after_text, "More");

    assert_snapshot!(&article.html, @"<p>Intro</p><p>More</p>");
    assert_eq!(article.total_blocks, 2);
}

#[test]
fn title_skips_leading_cover_image() {
    let article = convert_default("![cover](c.png)\n\n# Real Title\n\nText");
    assert_eq!(article.title, "Real Title");
    assert_eq!(article.cover_image.as_deref(), Some("/docs/c.png"));
    assert_snapshot!(&article.html, @"<p>Text</p>");
}

#[test]
fn leading_image_is_flagged_apart_from_one_after_block_zero() {
    let article = convert_default("![c](c.png)\n\n![l](l.png)\n\nIntro\n\n![a](a.png)\n\nMore");
    let seen: Vec<_> = article
        .content_images
        .iter()
        .map(|i| (i.block_index, i.leading))
        .collect();
    assert_eq!(seen, vec![(0, true), (0, false)]);
}

#[test]
fn remote_image_paths_pass_through() {
    let article = convert_default("Intro\n\n![a](https://example.com/a.png)");
    assert_eq!(
        article.cover_image.as_deref(),
        Some("https://example.com/a.png")
    );
}

#[test]
fn list_is_all_or_nothing() {
    let article = convert_default("Title\n\n- one\nnot a bullet\n- two");
    assert_snapshot!(&article.html, @"<p>Title</p><p>- one<br>not a bullet<br>- two</p>");
}

#[test]
fn bold_is_resolved_before_italic() {
    let article = convert_default("Title\n\n**_not italic marker_** plain *em*");
    assert_snapshot!(
        &article.html,
        @"<p>Title</p><p><strong>_not italic marker_</strong> plain <em>em</em></p>"
    );
}

#[test]
fn hash_lines_split_paragraphs() {
    let article = convert_default("Intro\n\npara\n#tag\nmore");
    assert_eq!(article.total_blocks, 4);
    assert_snapshot!(&article.html, @"<p>Intro</p><p>para</p><p>#tag</p><p>more</p>");
}

#[test]
fn hash_line_shifts_following_image_index() {
    let article = convert_default("Intro\n\n![c](c.png)\n\npara\n#tag\n\n![i](i.png)");
    assert_eq!(article.content_images.len(), 1);
    assert_eq!(article.content_images[0].block_index, 2);
    assert_eq!(article.content_images[0].after_text, "#tag");
}

#[test]
fn triple_stars_nest_properly() {
    let article = convert_default("Title\n\n***x*** and *a **b* c**");
    assert_snapshot!(
        &article.html,
        @"<p>Title</p><p><em><strong>x</strong></em> and *a <strong>b* c</strong></p>"
    );
}

#[test]
fn table_renders_as_paragraph() {
    let article = convert_default("Title\n\n| a | b |\n|---|---|\n| 1 | 2 |");
    assert_snapshot!(
        &article.html,
        @"<p>Title</p><p><strong>a</strong> | <strong>b</strong><br>--------------------<br>1 | 2<br></p>"
    );
    assert!(!article.html.contains("<table"));
}

#[test]
fn fenced_block_keeps_internal_blank_line() {
    let article = convert_default("Title\n\n```\nx = 1\n\ny = 2\n```");
    assert_eq!(article.total_blocks, 2);
    assert_snapshot!(
        &article.html,
        @"<p>Title</p><blockquote><pre><code>x = 1<br><br>y = 2</code></pre></blockquote>"
    );
}

#[test]
fn fence_language_is_labelled() {
    let article = convert_default("Title\n\n```python\nprint(1)\n```");
    assert_snapshot!(
        &article.html,
        @r#"<p>Title</p><p><strong>python</strong></p><blockquote><pre><code class="language-python">print(1)</code></pre></blockquote>"#
    );
}

#[test]
fn language_labels_can_be_disabled() {
    let opts = RenderOptions {
        code_language_labels: false,
        ..RenderOptions::default()
    };
    let article = convert("Title\n\n```python\nprint(1)\n```", Path::new("/docs"), &opts);
    assert_snapshot!(
        &article.html,
        @r#"<p>Title</p><blockquote><pre><code class="language-python">print(1)</code></pre></blockquote>"#
    );
}

#[rstest]
#[case("# T\n\nA\n\nB\n\n![i](i.png)\n\nC")]
#[case("Intro\n\n```\ncode\n\nmore\n```\n\n- a\n- b\n\n> q\n> r")]
#[case("![only](image.png)")]
#[case("---\n\n#### Deep\n\n1. x\n2. y")]
fn one_fragment_per_remaining_block(#[case] md: &str) {
    let opts = RenderOptions::default();
    let prepared = prepare(&xi_rope::Rope::from(md), Path::new("."), &opts);
    let fragments = prepared.fragments(&opts);
    let article = prepared.into_article(&opts);

    assert_eq!(fragments.len(), article.total_blocks);
    assert_eq!(fragments.concat(), article.html);
    for image in &article.content_images {
        assert!(image.block_index < article.total_blocks.max(1));
    }
}

#[rstest]
#[case("**bold** and *em*")]
#[case("`code` with [link](https://x.y)")]
#[case("**`x`** *a* [**b**](c)")]
fn rewriting_rendered_output_is_stable(#[case] input: &str) {
    let opts = RenderOptions::default().inline();
    let once = rewrite_inline(input, opts);
    assert_eq!(rewrite_inline(&once, opts), once);
}

#[test]
fn article_serialises_to_json() {
    let article = convert_default("# Post\n\nIntro\n\n![a](a.png)\n\nMiddle\n\n![b](b.png)");
    let value = serde_json::to_value(&article).unwrap();

    assert_eq!(value["title"], "Post");
    assert_eq!(value["cover_image"], "/docs/a.png");
    assert_eq!(value["total_blocks"], 2);
    assert_eq!(value["html"], "<p>Intro</p><p>Middle</p>");
    assert_eq!(
        value["content_images"],
        serde_json::json!([{
            "path": "/docs/b.png",
            "alt": "b",
            "block_index": 1,
            "leading": false,
            "after_text": "Middle",
        }])
    );
}
