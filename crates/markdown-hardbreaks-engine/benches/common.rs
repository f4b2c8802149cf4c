// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_prose(paragraphs: usize) -> String {
    let base = "# Notes\n\nFirst line of a paragraph\nwith a soft break\nand another one\n\n> quoted line\n> second quoted line\n\n- list item\n  continued item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\nInline `code\nspan` across lines\nends here\n\n";
    base.repeat(paragraphs)
}

#[allow(dead_code)]
pub fn generate_converted(paragraphs: usize) -> String {
    let mut content = String::new();
    for i in 0..paragraphs {
        content.push_str(&format!("Paragraph {i} line one  \nline two\\\nline three\n\n"));
    }
    content
}
