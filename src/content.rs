//! Text objects and their rendering into PDF content streams.

use crate::font::Font;
use crate::units::Pt;
use id_arena::{Arena, Id};
use std::io::Write;

/// Text-state settings shared by every page of a document: which font, how big,
/// how far apart the baselines are, where the first baseline starts and how much
/// extra room goes between characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFrame {
    pub font: Id<Font>,
    pub size: Pt,
    pub leading: Pt,
    /// Start of the first baseline, i.e. (left margin, top of the grid)
    pub origin: (Pt, Pt),
    pub char_spacing: Pt,
}

/// The lines of a single page, laid out top to bottom in a [TextFrame]
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub frame: TextFrame,
    lines: Vec<String>,
}

impl TextBlock {
    pub fn new(frame: TextFrame) -> TextBlock {
        TextBlock {
            frame,
            lines: Vec::new(),
        }
    }

    pub fn push_line<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Renders a text block to an (uncompressed) content stream: one text object
/// that sets the font, leading, origin and character spacing once, then shows
/// each line and moves down by the leading.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_text_block(
    block: &TextBlock,
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    if block.is_empty() {
        return Ok(Vec::default());
    }

    let TextFrame {
        font,
        size,
        leading,
        origin,
        char_spacing,
    } = block.frame;

    let mut content: Vec<u8> = Vec::default();
    write!(&mut content, "BT\n")?;
    write!(&mut content, "/F{} {} Tf\n", font.index(), size)?;
    write!(&mut content, "{} TL\n", leading)?;
    write!(&mut content, "{} {} Td\n", origin.0, origin.1)?;
    write!(&mut content, "{} Tc\n", char_spacing)?;
    for line in block.lines() {
        fonts[font].encode_hex(line, &mut content)?;
        write!(&mut content, " Tj\nT*\n")?;
    }
    write!(&mut content, "ET\n")?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courier_frame(fonts: &mut Arena<Font>) -> TextFrame {
        let font = fonts.alloc(Font::builtin("Courier").unwrap());
        TextFrame {
            font,
            size: Pt(10.0),
            leading: Pt(12.0),
            origin: (Pt(50.0), Pt(700.0)),
            char_spacing: Pt(0.5),
        }
    }

    #[test]
    fn renders_one_text_object_per_block() {
        let mut fonts = Arena::new();
        let mut block = TextBlock::new(courier_frame(&mut fonts));
        block.push_line("Hi");
        block.push_line("");

        let rendered = String::from_utf8(render_text_block(&block, &fonts).unwrap()).unwrap();
        assert_eq!(
            rendered,
            "BT\n/F0 10 Tf\n12 TL\n50 700 Td\n0.5 Tc\n<4869> Tj\nT*\n<> Tj\nT*\nET\n"
        );
    }

    #[test]
    fn empty_block_renders_nothing() {
        let mut fonts = Arena::new();
        let block = TextBlock::new(courier_frame(&mut fonts));
        assert!(render_text_block(&block, &fonts).unwrap().is_empty());
    }
}
