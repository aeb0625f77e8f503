// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_nested(open: &str, close: &str, depth: usize) -> String {
    format!("{}x{}", open.repeat(depth), close.repeat(depth))
}

#[allow(dead_code)]
pub fn generate_flat(open: &str, close: &str, pairs: usize) -> String {
    let mut content = String::from(open);
    for i in 0..pairs {
        content.push_str(&format!("text {i} {open}inner{close} "));
    }
    content.push_str(close);
    content
}
