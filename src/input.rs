use std::io::{self, BufRead};

/// Reads every line from the reader into memory, stripping terminators.
///
/// The engine needs the full stream up front so windows can be clamped at
/// the real end of input. A read failure anywhere aborts the whole
/// invocation rather than searching a truncated stream.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_newlines_and_strips_them() {
        let lines = read_lines(Cursor::new("line1\nline2\nline3\n")).unwrap();
        assert_eq!(lines, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn last_line_without_terminator_is_kept() {
        let lines = read_lines(Cursor::new("a\nb")).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_stream_is_empty_not_an_error() {
        let lines = read_lines(Cursor::new("")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let lines = read_lines(Cursor::new("a\r\nb\r\n")).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
