// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_response(sections: usize) -> String {
    let base = "## Finding\n\nThe **handler** calls `unwrap()` on *user* input.\n\n1. Validate input\n2. Return a 400\n- note: __blocking__\n\n```rust\nlet body = req.body()?;\nlet _x = parse(&body)?;\n```\n\n---\n";
    base.repeat(sections)
}
