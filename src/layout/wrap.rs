use crate::error::ConvertError;
use std::io;

/// Hard-wraps a stream of input lines at a fixed character count.
///
/// Lines no longer than `width` characters pass through untouched. Longer lines
/// are cut into consecutive chunks of exactly `width` characters, the last chunk
/// holding whatever remains, and one warning is logged per wrapped input line
/// (not per chunk). Characters are Unicode scalar values, so a chunk never splits
/// a code point.
///
/// The wrapper is lazy: it pulls one input line at a time and never holds more
/// than the line currently being cut up.
pub struct LineWrapper<I> {
    lines: I,
    width: usize,
    source: String,
    line_number: usize,
    wrapped: usize,
    emitted: usize,
    // the line being chunked and the byte offset of its next chunk
    pending: Option<(String, usize)>,
}

impl<I> LineWrapper<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// `source` names the input in warnings, usually the file path
    pub fn new<S: ToString>(lines: I, width: usize, source: S) -> LineWrapper<I> {
        LineWrapper {
            lines,
            width: width.max(1),
            source: source.to_string(),
            line_number: 0,
            wrapped: 0,
            emitted: 0,
            pending: None,
        }
    }

    /// How many input lines were too long and had to be wrapped so far
    pub fn wrapped_lines(&self) -> usize {
        self.wrapped
    }

    /// How many output lines have been produced so far
    pub fn emitted_lines(&self) -> usize {
        self.emitted
    }

    fn next_chunk(&mut self, line: String, start: usize) -> String {
        let rest = &line[start..];
        match rest.char_indices().nth(self.width) {
            Some((offset, _)) => {
                let chunk = rest[..offset].to_string();
                self.pending = Some((line, start + offset));
                chunk
            }
            None if start == 0 => line,
            None => rest.to_string(),
        }
    }
}

impl<I> Iterator for LineWrapper<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<String, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = match self.pending.take() {
            Some((line, start)) => self.next_chunk(line, start),
            None => {
                let line = match self.lines.next()? {
                    Ok(line) => line,
                    Err(source) => {
                        return Some(Err(ConvertError::Input {
                            path: self.source.clone().into(),
                            source,
                        }))
                    }
                };
                self.line_number += 1;

                if line.chars().nth(self.width).is_some() {
                    self.wrapped += 1;
                    log::warn!("wrapping line {} in {}", self.line_number, self.source);
                    self.next_chunk(line, 0)
                } else {
                    line
                }
            }
        };

        self.emitted += 1;
        Some(Ok(chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects log records on the current thread so tests can assert on them
    mod capture {
        use std::cell::RefCell;
        use std::sync::Once;

        thread_local! {
            static RECORDS: RefCell<Vec<(log::Level, String)>> = RefCell::new(Vec::new());
        }

        struct Capture;

        impl log::Log for Capture {
            fn enabled(&self, _: &log::Metadata) -> bool {
                true
            }

            fn log(&self, record: &log::Record) {
                RECORDS.with(|records| {
                    records
                        .borrow_mut()
                        .push((record.level(), record.args().to_string()))
                });
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture;
        static INSTALL: Once = Once::new();

        pub fn start() {
            INSTALL.call_once(|| {
                log::set_logger(&CAPTURE).expect("only logger in unit tests");
                log::set_max_level(log::LevelFilter::Trace);
            });
            RECORDS.with(|records| records.borrow_mut().clear());
        }

        pub fn warnings() -> Vec<String> {
            RECORDS.with(|records| {
                records
                    .borrow()
                    .iter()
                    .filter(|(level, _)| *level == log::Level::Warn)
                    .map(|(_, message)| message.clone())
                    .collect()
            })
        }
    }

    fn wrap(lines: &[&str], width: usize) -> (Vec<String>, usize) {
        let input = lines.iter().map(|l| Ok(l.to_string())).collect::<Vec<_>>();
        let mut wrapper = LineWrapper::new(input.into_iter(), width, "test.txt");
        let out = wrapper
            .by_ref()
            .collect::<Result<Vec<_>, _>>()
            .expect("no read errors");
        (out, wrapper.wrapped_lines())
    }

    #[test]
    fn long_line_is_chunked() {
        let (out, warnings) = wrap(&["abcdefgh"], 5);
        assert_eq!(out, vec!["abcde", "fgh"]);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn warnings_name_the_input_line_and_source() {
        capture::start();
        let input = ["short", "abcdefgh", "ok", "123456789012"]
            .iter()
            .map(|l| Ok(l.to_string()))
            .collect::<Vec<_>>();
        let out = LineWrapper::new(input.into_iter(), 5, "notes.txt")
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(out.len(), 7);
        assert_eq!(
            capture::warnings(),
            vec!["wrapping line 2 in notes.txt", "wrapping line 4 in notes.txt"]
        );
    }

    #[test]
    fn short_lines_pass_through() {
        let (out, warnings) = wrap(&["abc", "", "abcde", "x"], 5);
        assert_eq!(out, vec!["abc", "", "abcde", "x"]);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn exact_multiple_has_no_empty_tail() {
        let (out, warnings) = wrap(&["abcdefghij"], 5);
        assert_eq!(out, vec!["abcde", "fghij"]);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn one_warning_per_input_line() {
        let (out, warnings) = wrap(&["aaaaaaaaaaa", "bb", "ccccccc"], 3);
        assert_eq!(
            out,
            vec!["aaa", "aaa", "aaa", "aa", "bb", "ccc", "ccc", "c"]
        );
        assert_eq!(warnings, 2);
    }

    #[test]
    fn chunks_reassemble_the_line() {
        let line = "the quick brown fox jumps over the lazy dog";
        for width in 1..=line.len() + 1 {
            let (out, warnings) = wrap(&[line], width);
            assert_eq!(out.concat(), line);
            assert_eq!(out.len(), line.len().div_ceil(width));
            assert!(out.iter().all(|chunk| chunk.chars().count() <= width));
            assert_eq!(warnings, usize::from(line.len() > width));
        }
    }

    #[test]
    fn rewrapping_is_a_no_op() {
        let (first, _) = wrap(&["abcdefghijklm"], 4);
        let again: Vec<&str> = first.iter().map(String::as_str).collect();
        let (second, warnings) = wrap(&again, 4);
        assert_eq!(first, second);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn splits_on_character_boundaries() {
        let (out, warnings) = wrap(&["żółćęśąźń"], 4);
        assert_eq!(out, vec!["żółć", "ęśąź", "ń"]);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn counts_output_lines() {
        let input = vec![Ok("abcdefg".to_string()), Ok("hi".to_string())];
        let mut wrapper = LineWrapper::new(input.into_iter(), 3, "test.txt");
        assert_eq!(wrapper.by_ref().count(), 4);
        assert_eq!(wrapper.emitted_lines(), 4);
    }

    #[test]
    fn read_errors_are_passed_on() {
        let input = vec![
            Ok("fine".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "boom")),
        ];
        let mut wrapper = LineWrapper::new(input.into_iter(), 10, "broken.txt");
        assert_eq!(wrapper.next().unwrap().unwrap(), "fine");
        assert!(matches!(
            wrapper.next(),
            Some(Err(ConvertError::Input { .. }))
        ));
    }
}
