use crate::content::{TextBlock, TextFrame};
use crate::document::Document;
use crate::error::ConvertError;
use crate::layout::{Margins, PageSink};
use crate::page::Page;
use crate::pagesize::PageSize;

/// Builds pages of a [Document] one line at a time. Every page gets the same
/// size, margins and [TextFrame]; the open page lives here until it is committed.
pub struct Typesetter<'d> {
    document: &'d mut Document,
    size: PageSize,
    margins: Margins,
    frame: TextFrame,
    open: Option<TextBlock>,
}

impl<'d> Typesetter<'d> {
    pub fn new(
        document: &'d mut Document,
        size: PageSize,
        margins: Margins,
        frame: TextFrame,
    ) -> Typesetter<'d> {
        Typesetter {
            document,
            size,
            margins,
            frame,
            open: None,
        }
    }

    pub fn has_open_page(&self) -> bool {
        self.open.is_some()
    }
}

impl PageSink for Typesetter<'_> {
    fn begin_page(&mut self) -> Result<(), ConvertError> {
        self.open = Some(TextBlock::new(self.frame));
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> Result<(), ConvertError> {
        self.open
            .as_mut()
            .ok_or(ConvertError::NoOpenPage)?
            .push_line(line);
        Ok(())
    }

    fn commit_page(&mut self) -> Result<(), ConvertError> {
        let block = self.open.take().ok_or(ConvertError::NoOpenPage)?;
        let mut page = Page::new(self.size, Some(&self.margins));
        page.set_text(&block, &self.document.fonts)?;
        self.document.add_page(page);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::layout::Paginator;
    use crate::pagesize;
    use crate::units::Pt;

    fn frame(document: &mut Document) -> TextFrame {
        TextFrame {
            font: document.add_font(Font::builtin("Courier").unwrap()),
            size: Pt(10.0),
            leading: Pt(12.0),
            origin: (Pt(56.0), Pt(775.0)),
            char_spacing: Pt(0.0),
        }
    }

    #[test]
    fn commits_pages_into_the_document() {
        let mut document = Document::new();
        let frame = frame(&mut document);
        let mut typesetter =
            Typesetter::new(&mut document, pagesize::A4, Margins::all(Pt(56.0)), frame);

        let lines = ["one", "two", "three", "four", "five"]
            .iter()
            .map(|l| Ok(l.to_string()));
        let pages = Paginator::new(&mut typesetter, 2).paginate(lines).unwrap();
        assert!(!typesetter.has_open_page());

        assert_eq!(pages, 3);
        assert_eq!(document.page_count(), 3);
        assert!(document.pages.iter().all(|page| !page.is_blank()));
    }

    #[test]
    fn lines_need_an_open_page() {
        let mut document = Document::new();
        let frame = frame(&mut document);
        let mut typesetter = Typesetter::new(&mut document, pagesize::A4, Margins::empty(), frame);

        assert!(matches!(
            typesetter.append_line("orphan"),
            Err(ConvertError::NoOpenPage)
        ));
        assert!(matches!(
            typesetter.commit_page(),
            Err(ConvertError::NoOpenPage)
        ));
    }
}
