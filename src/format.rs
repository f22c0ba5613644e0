/// Renders one output line.
///
/// Plain mode returns the text untouched; the sink appends the terminator.
/// Numbered mode produces the exact byte sequence downstream consumers
/// expect: the 1-based line number in green, a colon, the ANSI reset, the
/// line text, and a trailing newline. The escapes are written literally
/// rather than through a tty-aware color crate so the bytes are identical
/// whether stdout is a terminal or a pipe.
pub fn render(index: usize, text: &str, numbered: bool) -> String {
    if numbered {
        format!("\x1b[32m{}:\x1b[0m{}\n", index + 1, text)
    } else {
        text.to_string()
    }
}
