// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\nA [link](https://example.com) and ![an image](/img.png).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> Quoted *text*\n>\n> > Nested quote\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_quotes(depth: usize) -> String {
    let mut content = String::new();
    for level in 1..=depth {
        let prefix = "> ".repeat(level);
        content.push_str(&format!("{prefix}Level {level}\n"));
        content.push_str(prefix.trim_end());
        content.push('\n');
    }
    content
}
