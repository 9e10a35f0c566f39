// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, `code` and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n1. First\n2. Second\n\n> Quoted *text*\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize, width: usize) -> String {
    let mut content = String::new();
    for _ in 0..width {
        for level in 0..depth {
            content.push_str(&"  ".repeat(level));
            content.push_str(&format!("- item at level {level}\n"));
        }
    }
    content
}
