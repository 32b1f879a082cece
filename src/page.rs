use crate::content::{render_text_block, TextBlock};
use crate::error::ConvertError;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::Arena;
use pdf_writer::{Filter, Finish, Name, Pdf};

/// A single committed page: its boxes and its compressed content stream
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Flate-compressed content stream
    content: Vec<u8>,
}

impl Page {
    /// Create a blank page. Without margins the content box covers the whole page
    pub fn new(size: PageSize, margins: Option<&Margins>) -> Page {
        let media_box = Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: size.0,
            y2: size.1,
        };
        let content_box = margins
            .map(|margins| margins.content_box(size))
            .unwrap_or(media_box);

        Page {
            media_box,
            content_box,
            content: Vec::default(),
        }
    }

    /// Render `block` as the contents of this page, replacing anything set before
    pub fn set_text(&mut self, block: &TextBlock, fonts: &Arena<Font>) -> Result<(), ConvertError> {
        let rendered = render_text_block(block, fonts)?;
        self.content = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        Ok(())
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), ConvertError> {
        let id = refs.gen(RefType::Page(page_index));
        let parent = refs
            .get(RefType::PageTree)
            .ok_or_else(|| std::io::Error::other("page tree written before pages"))?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let mut stream = writer.stream(content_id, self.content.as_slice());
        if !self.content.is_empty() {
            stream.filter(Filter::FlateDecode);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TextFrame;
    use crate::pagesize;

    #[test]
    fn content_box_follows_margins() {
        let page = Page::new(pagesize::LETTER, Some(&Margins::all(Pt(72.0))));
        assert_eq!(page.media_box.width(), Pt(612.0));
        assert_eq!(page.content_box.width(), Pt(468.0));
        assert_eq!(page.content_box.height(), Pt(648.0));

        let bare = Page::new(pagesize::LETTER, None);
        assert_eq!(bare.content_box, bare.media_box);
    }

    #[test]
    fn text_is_compressed_into_the_page() {
        let mut fonts = Arena::new();
        let font = fonts.alloc(Font::builtin("Courier").unwrap());
        let mut block = TextBlock::new(TextFrame {
            font,
            size: Pt(10.0),
            leading: Pt(12.0),
            origin: (Pt(0.0), Pt(0.0)),
            char_spacing: Pt(0.0),
        });
        block.push_line("hello");

        let mut page = Page::new(pagesize::A4, None);
        assert!(page.is_blank());
        page.set_text(&block, &fonts).unwrap();
        assert!(!page.is_blank());

        let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(&page.content).unwrap();
        assert_eq!(inflated, render_text_block(&block, &fonts).unwrap());
    }
}
