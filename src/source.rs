//! Reading the input text.
//!
//! Input is UTF-8, one record per `\n`. A `\r` directly before the `\n` is part
//! of the terminator and dropped; a lone `\r` is ordinary text. A byte-order mark
//! at the very start is dropped. Bytes that aren't valid UTF-8 are replaced with
//! U+FFFD and reported, rather than aborting the whole conversion.

use std::io::{self, BufRead};

const BOM: char = '\u{FEFF}';

/// Lazily yields the lines of a reader, terminators stripped
pub struct SourceLines<R> {
    reader: R,
    source: String,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> SourceLines<R> {
    /// `source` names the input in warnings
    pub fn new<S: ToString>(reader: R, source: S) -> SourceLines<R> {
        SourceLines {
            reader,
            source: source.to_string(),
            line_number: 0,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(err) => return Some(Err(err)),
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        let mut line = match String::from_utf8(std::mem::take(&mut self.buffer)) {
            Ok(line) => line,
            Err(err) => {
                log::warn!(
                    "line {} in {} is not valid UTF-8, replacing invalid bytes",
                    self.line_number,
                    self.source
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        if self.line_number == 1 && line.starts_with(BOM) {
            line.remove(0);
        }

        Some(Ok(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[u8]) -> Vec<String> {
        SourceLines::new(input, "test.txt")
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn strips_unix_and_windows_terminators() {
        assert_eq!(lines(b"a\nb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_terminator_adds_no_line() {
        assert_eq!(lines(b"a\nb\n"), vec!["a", "b"]);
        assert_eq!(lines(b"\n"), vec![""]);
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn lone_carriage_return_is_text() {
        assert_eq!(lines(b"a\rb\n"), vec!["a\rb"]);
    }

    #[test]
    fn blank_lines_survive() {
        assert_eq!(lines(b"a\n\n\nb\n"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn byte_order_mark_is_dropped() {
        assert_eq!(lines("\u{FEFF}hello\n\u{FEFF}x".as_bytes()), vec!["hello", "\u{FEFF}x"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(lines(b"ok\nbad \xff byte\n"), vec!["ok", "bad \u{FFFD} byte"]);
    }
}
