// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_content(size: usize) -> String {
    let base = "# Answer\n\nThe **area** of a circle is $\\pi r^2$, and *circumference* is $2\\pi r$.\n\n- first `step`\n- second step\n\n1. solve $x^2 = 4$\n2. check $\\sqrt{4} = 2$\n\n```rust\nfn area(r: f64) -> f64 {\n    std::f64::consts::PI * r * r\n}\n```\n\n$$\n\\sum_{i=1}^{n} i = \\frac{n(n+1)}{2}\n$$\n\n---\n";
    base.repeat(size)
}

/// One long paragraph full of delimiters that never close.
#[allow(dead_code)]
pub fn generate_hostile_content(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "line {i} has `one tick, **one pair, a lone * star and $$ cost\n"
        ));
    }
    content
}
