use std::fs;

use markdown_sitegen_engine::{
    Template, copy_static, generate_pages_recursive, markdown_to_html, reset_output_dir,
};
use pretty_assertions::assert_eq;

const TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head><title>{{ Title }}</title></head>
<body><article>{{ Content }}</article></body>
</html>";

/// Builds a small site the way the CLI does: reset, copy static, generate.
#[test]
fn builds_a_site() {
    let site = tempfile::tempdir().unwrap();
    let root = site.path();

    fs::create_dir_all(root.join("static/images")).unwrap();
    fs::write(root.join("static/index.css"), "body { margin: 0 }").unwrap();
    fs::write(root.join("static/images/logo.png"), "png").unwrap();

    fs::create_dir_all(root.join("content/blog/tom")).unwrap();
    fs::write(
        root.join("content/index.md"),
        "# Tolkien Fan Club\n\nHere's the deal, **I like Tolkien**.\n\n* [Tom](/blog/tom)\n",
    )
    .unwrap();
    fs::write(
        root.join("content/blog/tom/index.md"),
        "# Why Tom Bombadil Was a Mistake\n\n> He is.\n\n1. Power\n2. Plot\n",
    )
    .unwrap();

    let public = root.join("public");
    fs::create_dir_all(&public).unwrap();
    fs::write(public.join("stale.html"), "old").unwrap();

    reset_output_dir(&public).unwrap();
    let copied = copy_static(&root.join("static"), &public).unwrap();
    let pages =
        generate_pages_recursive(&root.join("content"), &Template::new(TEMPLATE), &public)
            .unwrap();

    assert_eq!(copied, 2);
    assert_eq!(pages.len(), 2);
    assert!(!public.join("stale.html").exists());
    assert!(public.join("images/logo.png").exists());

    let index = fs::read_to_string(public.join("index.html")).unwrap();
    assert!(index.contains("<title>Tolkien Fan Club</title>"));
    assert!(index.contains(
        r#"<article><div><h1>Tolkien Fan Club</h1><p>Here's the deal, <strong>I like Tolkien</strong>.</p><ul><li><a href="/blog/tom">Tom</a></li></ul></div></article>"#
    ));

    let tom = fs::read_to_string(public.join("blog/tom/index.html")).unwrap();
    assert!(tom.contains(
        "<blockquote><div><p>He is.</p></div></blockquote><ol><li>Power</li><li>Plot</li></ol>"
    ));
}

#[test]
fn one_bad_page_fails_the_build() {
    let site = tempfile::tempdir().unwrap();
    let content = site.path().join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("a.md"), "# Good").unwrap();
    fs::write(content.join("b.md"), "No title here").unwrap();

    let result = generate_pages_recursive(
        &content,
        &Template::new(TEMPLATE),
        &site.path().join("public"),
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("b.md"));
}

#[test]
fn headings_and_inline_media_render() {
    assert_eq!(markdown_to_html("# Title").unwrap(), "<div><h1>Title</h1></div>");
    assert_eq!(
        markdown_to_html("See ![alt](img.png) and [link](url)").unwrap(),
        r#"<div><p>See <img src="img.png" alt="alt"></img> and <a href="url">link</a></p></div>"#
    );
}
