use crate::error::ConvertError;

/// The page primitives the [Paginator] drives. Whatever sits behind this trait
/// owns the document; the paginator only decides when pages start and end.
pub trait PageSink {
    /// Open a fresh, empty page with the document's text settings applied
    fn begin_page(&mut self) -> Result<(), ConvertError>;
    /// Append one line of text below the previous one on the open page
    fn append_line(&mut self, line: &str) -> Result<(), ConvertError>;
    /// Finalize the open page and add it to the document
    fn commit_page(&mut self) -> Result<(), ConvertError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    NoPageOpen,
    PageOpen,
}

/// Groups a stream of lines into pages of at most `lines_per_page` lines.
///
/// Pages are opened lazily, when a line arrives that has nowhere to go, so an
/// empty input or an input that exactly fills its last page never produces a
/// blank trailing page.
pub struct Paginator<'s, S: PageSink + ?Sized> {
    sink: &'s mut S,
    lines_per_page: usize,
    lines_on_page: usize,
    committed: usize,
    state: PageState,
}

impl<'s, S: PageSink + ?Sized> Paginator<'s, S> {
    pub fn new(sink: &'s mut S, lines_per_page: usize) -> Paginator<'s, S> {
        Paginator {
            sink,
            lines_per_page: lines_per_page.max(1),
            lines_on_page: 0,
            committed: 0,
            state: PageState::NoPageOpen,
        }
    }

    /// 1-based number of the page currently being filled (or about to be)
    pub fn page_number(&self) -> usize {
        self.committed + 1
    }

    /// Number of pages handed to the sink so far
    pub fn committed_pages(&self) -> usize {
        self.committed
    }

    pub fn push_line(&mut self, line: &str) -> Result<(), ConvertError> {
        if self.lines_on_page == self.lines_per_page {
            self.commit()?;
        }
        if self.state == PageState::NoPageOpen {
            self.sink.begin_page()?;
            self.state = PageState::PageOpen;
            self.lines_on_page = 0;
        }

        self.sink.append_line(line)?;
        self.lines_on_page += 1;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), ConvertError> {
        self.sink.commit_page()?;
        log::debug!(
            "committed page {} with {} lines",
            self.page_number(),
            self.lines_on_page
        );
        self.committed += 1;
        self.lines_on_page = 0;
        self.state = PageState::NoPageOpen;
        Ok(())
    }

    /// Commit the last page if anything was written to it and return the
    /// total number of committed pages
    pub fn finish(mut self) -> Result<usize, ConvertError> {
        if self.state == PageState::PageOpen && self.lines_on_page > 0 {
            self.commit()?;
        }
        Ok(self.committed)
    }

    /// Pull every line from `lines`, one at a time, then [finish](Paginator::finish)
    pub fn paginate<I>(mut self, lines: I) -> Result<usize, ConvertError>
    where
        I: IntoIterator<Item = Result<String, ConvertError>>,
    {
        for line in lines {
            self.push_line(&line?)?;
        }
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every page it is given
    #[derive(Default)]
    struct Recorder {
        open: Option<Vec<String>>,
        pages: Vec<Vec<String>>,
        begun: usize,
    }

    impl PageSink for Recorder {
        fn begin_page(&mut self) -> Result<(), ConvertError> {
            assert!(self.open.is_none(), "page begun twice");
            self.begun += 1;
            self.open = Some(Vec::new());
            Ok(())
        }

        fn append_line(&mut self, line: &str) -> Result<(), ConvertError> {
            self.open
                .as_mut()
                .ok_or(ConvertError::NoOpenPage)?
                .push(line.to_string());
            Ok(())
        }

        fn commit_page(&mut self) -> Result<(), ConvertError> {
            let page = self.open.take().ok_or(ConvertError::NoOpenPage)?;
            self.pages.push(page);
            Ok(())
        }
    }

    fn paginate(lines: &[&str], per_page: usize) -> (Recorder, usize) {
        let mut recorder = Recorder::default();
        let count = Paginator::new(&mut recorder, per_page)
            .paginate(lines.iter().map(|l| Ok(l.to_string())))
            .unwrap();
        (recorder, count)
    }

    #[test]
    fn splits_into_pages() {
        let (recorder, count) = paginate(&["a", "b", "c", "d"], 3);
        assert_eq!(count, 2);
        assert_eq!(recorder.pages, vec![vec!["a", "b", "c"], vec!["d"]]);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let (recorder, count) = paginate(&[], 3);
        assert_eq!(count, 0);
        assert_eq!(recorder.begun, 0);
        assert!(recorder.pages.is_empty());
    }

    #[test]
    fn exactly_one_full_page() {
        let (recorder, count) = paginate(&["a", "b", "c"], 3);
        assert_eq!(count, 1);
        assert_eq!(recorder.begun, 1);
        assert!(recorder.open.is_none());
    }

    #[test]
    fn page_count_is_ceiling_division() {
        for per_page in 1..6 {
            for n in 0usize..20 {
                let lines: Vec<String> = (0..n).map(|i| i.to_string()).collect();
                let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
                let (recorder, count) = paginate(&lines, per_page);

                assert_eq!(count, n.div_ceil(per_page));
                assert_eq!(recorder.pages.len(), count);
                assert_eq!(recorder.begun, count);
                if n > 0 {
                    let last = recorder.pages.last().unwrap().len();
                    let expected = if n % per_page == 0 { per_page } else { n % per_page };
                    assert_eq!(last, expected);
                }
                let flattened: Vec<&str> = recorder
                    .pages
                    .iter()
                    .flatten()
                    .map(String::as_str)
                    .collect();
                assert_eq!(flattened, lines);
            }
        }
    }

    #[test]
    fn page_numbers_advance_on_commit() {
        let mut recorder = Recorder::default();
        let mut paginator = Paginator::new(&mut recorder, 2);
        assert_eq!(paginator.page_number(), 1);
        paginator.push_line("a").unwrap();
        paginator.push_line("b").unwrap();
        assert_eq!(paginator.committed_pages(), 0);
        paginator.push_line("c").unwrap();
        assert_eq!(paginator.committed_pages(), 1);
        assert_eq!(paginator.page_number(), 2);
        assert_eq!(paginator.finish().unwrap(), 2);
    }

    #[test]
    fn errors_stop_pagination() {
        let mut recorder = Recorder::default();
        let lines = vec![
            Ok("a".to_string()),
            Err(ConvertError::NoOpenPage),
            Ok("b".to_string()),
        ];
        let result = Paginator::new(&mut recorder, 5).paginate(lines);
        assert!(result.is_err());
        assert!(recorder.pages.is_empty());
    }
}
