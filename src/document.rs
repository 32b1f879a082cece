use crate::{
    error::ConvertError,
    font::Font,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::{
    io::{BufWriter, Write},
    path::Path,
};

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]. It owns the font
/// registry: pages refer to fonts by the `Id` returned from [Document::add_font].
pub struct Document {
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    pub fonts: Arena<Font>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its 0-based index
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Register a font with the document. The returned id stays valid for the
    /// lifetime of the document
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first. This limitation is due
    /// to the underlying pdf-writer implementation.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), ConvertError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        for (id, font) in self.fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, page) in self.pages.iter().enumerate() {
            page.write(&mut refs, page_index, &self.fonts, &mut writer)?;
        }

        let page_refs: Vec<Ref> = (0..self.pages.len())
            .filter_map(|i| refs.get(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice())?;
        w.flush()?;
        Ok(())
    }

    /// Write the document to `path`. The PDF is written to a temporary file next to
    /// the destination and renamed over it once complete, so a failure part-way
    /// never leaves a truncated PDF behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConvertError> {
        let path = path.as_ref();
        let output_error = |source: std::io::Error| ConvertError::Output {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(output_error)?;

        match self.write(BufWriter::new(file.as_file_mut())) {
            Ok(()) => {}
            Err(ConvertError::Io(source)) => return Err(output_error(source)),
            Err(other) => return Err(other),
        }

        file.persist(path).map_err(|err| output_error(err.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn writes_a_pdf_header_and_trailer() {
        let mut doc = Document::new();
        doc.add_font(Font::builtin("Courier").unwrap());
        doc.add_page(Page::new(pagesize::A4, None));

        let mut out = Vec::new();
        doc.write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&out[out.len().saturating_sub(32)..]).to_string();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn save_into_missing_directory_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.pdf");
        let err = Document::new().save(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Output { .. }));
        assert!(!path.exists());
    }
}
