// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_markdown(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\nA second line with a [link](https://example.com/a_b).\n\n- Bullet point\n- Another item\n1. First\n2. Second\n\n> A quote\n\n| Key | Value |\n|-----|-------|\n| a | 1 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_diagram_source(edges: usize) -> String {
    let mut source = String::from("```mermaid\n%%{init: {\"theme\": \"dark\"}}%%\ndiagram LR\n");
    for i in 0..edges {
        source.push_str(&format!("  N{i} --> N{}\n", i + 1));
    }
    source.push_str("```");
    source
}
