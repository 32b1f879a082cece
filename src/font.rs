use crate::{
    error::ConvertError,
    layout::GlyphMetrics,
    refs::{ObjectReferences, RefType},
    Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::{collections::HashMap, io::Write, path::Path};

/// The Courier family from the standard 14 fonts every PDF reader ships with.
/// These are referenced by name and never embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    /// Every glyph in the Courier family is 600/1000 em wide
    const ADVANCE: f32 = 600.0;

    pub fn from_name(name: &str) -> Option<StandardFont> {
        [
            StandardFont::Courier,
            StandardFont::CourierBold,
            StandardFont::CourierOblique,
            StandardFont::CourierBoldOblique,
        ]
        .into_iter()
        .find(|font| font.base_font().eq_ignore_ascii_case(name))
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }
}

enum Face {
    Standard(StandardFont),
    Embedded(OwnedFace),
}

/// A font the document can draw text with. Either one of the built-in
/// [StandardFont]s or a TTF / OTF font that is embedded in its entirety in the
/// generated PDF, so large fonts may dramatically increase the size of the output.
///
/// Fonts are registered with a [`Document`](crate::Document) and referred to by
/// their `Id<Font>` from then on.
pub struct Font {
    face: Face,
}

impl Font {
    /// One of the built-in fonts, by its PDF name (case-insensitive)
    pub fn builtin(name: &str) -> Option<Font> {
        StandardFont::from_name(name).map(|font| Font {
            face: Face::Standard(font),
        })
    }

    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, ConvertError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font {
            face: Face::Embedded(face),
        })
    }

    /// Read and parse a font file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, ConvertError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ConvertError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Font::load(bytes)
    }

    /// Resolve a font the way the command line does: built-in names first,
    /// anything else is treated as the path of a font file
    pub fn from_name_or_path(spec: &str) -> Result<Font, ConvertError> {
        match Font::builtin(spec) {
            Some(font) => Ok(font),
            None => Font::open(spec),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.face, Face::Embedded(_))
    }

    /// The full name of the font, or a placeholder if an embedded font doesn't declare one
    pub fn name(&self) -> String {
        match &self.face {
            Face::Standard(font) => font.base_font().to_string(),
            Face::Embedded(face) => face_name(face, owned_ttf_parser::name_id::FULL_NAME)
                .unwrap_or_else(|| "Embedded".to_string()),
        }
    }

    /// Glyph id used for `ch` in an embedded font, falling back to the replacement
    /// character, then to `?`, then to `.notdef`
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        match &self.face {
            Face::Standard(_) => None,
            Face::Embedded(face) => {
                let face = face.as_face_ref();
                Some(
                    face.glyph_index(ch)
                        .or_else(|| face.glyph_index('\u{FFFD}'))
                        .or_else(|| face.glyph_index('?'))
                        .map(|gid| gid.0)
                        .unwrap_or(0),
                )
            }
        }
    }

    /// Write `text` as a hex string operand suitable for `Tj` with this font
    pub(crate) fn encode_hex(&self, text: &str, out: &mut Vec<u8>) -> std::io::Result<()> {
        out.push(b'<');
        match &self.face {
            Face::Standard(_) => {
                for ch in text.chars() {
                    write!(out, "{:02x}", win_ansi_byte(ch))?;
                }
            }
            Face::Embedded(_) => {
                for ch in text.chars() {
                    write!(out, "{:04x}", self.glyph_id(ch).unwrap_or(0))?;
                }
            }
        }
        out.push(b'>');
        Ok(())
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        match &self.face {
            Face::Standard(font) => {
                writer
                    .type1_font(font_id)
                    .base_font(Name(font.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Face::Embedded(face) => {
                let cid_font_id = write_cid(face, refs, font_index, writer);
                let to_unicode_id = write_to_unicode(face, refs, font_index, writer);

                let mut font = writer.type0_font(font_id);
                font.base_font(Name(format!("F{font_index}").as_bytes()));
                font.encoding_predefined(Name(b"Identity-H"));
                font.descendant_font(cid_font_id);
                font.to_unicode(to_unicode_id);
            }
        }
    }
}

impl GlyphMetrics for Font {
    fn advance_width(&self, ch: char, size: Pt) -> Pt {
        match &self.face {
            Face::Standard(_) => size * (StandardFont::ADVANCE / 1000.0),
            Face::Embedded(face) => {
                let face_ref = face.as_face_ref();
                let scaling = size / face_ref.units_per_em() as f32;
                let gid = GlyphId(self.glyph_id(ch).unwrap_or(0));
                scaling * face_ref.glyph_hor_advance(gid).unwrap_or_default() as f32
            }
        }
    }
}

fn face_name(face: &OwnedFace, name_id: u16) -> Option<String> {
    face.as_face_ref()
        .names()
        .into_iter()
        .find(|name| name.name_id == name_id && name.is_unicode())
        .and_then(|name| name.to_string())
}

/// Map a character onto WinAnsiEncoding. Control characters (tabs included)
/// become spaces, anything unencodable becomes `?`
fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        c if c.is_control() => b' ',
        _ => b'?',
    }
}

fn write_cid(
    face: &OwnedFace,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let font_descriptor_id = write_descriptor(face, refs, font_index, writer);
    let face_ref = face.as_face_ref();

    let id = refs.gen(RefType::CidFont(font_index));

    let mut cid_font = writer.cid_font(id);
    cid_font.subtype(CidFontType::Type2);
    cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
    cid_font.system_info(SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    });
    cid_font.font_descriptor(font_descriptor_id);

    let sizing = glyphs_sizing(face, &glyph_ids(face));
    let scaling = 1000.0 / face_ref.units_per_em() as f32;

    // the most frequent advance becomes the default width; for a monospace
    // font that is nearly every glyph
    let mut widths_counts: HashMap<u16, usize> = HashMap::new();
    for &(_, (width, _)) in sizing.values() {
        *widths_counts.entry(width).or_insert(0) += 1;
    }
    let most_common_width = widths_counts
        .iter()
        .max_by_key(|&(&width, &count)| (count, width))
        .map(|(&width, _)| width as f32 * scaling)
        .unwrap_or(1000.0);

    let mut id_widths: Vec<(u16, f32)> = sizing
        .iter()
        .map(|(&cid, &(_, (width, _)))| (cid, width as f32 * scaling))
        .collect();
    id_widths.sort_by_key(|&(cid, _)| cid);

    let mut widths = cid_font.widths();
    // runs of consecutive glyph ids share one entry
    let mut runs = id_widths.into_iter();
    if let Some((first_cid, first_width)) = runs.next() {
        let mut start_cid = first_cid;
        let mut current: Vec<f32> = vec![first_width];
        for (cid, width) in runs {
            if (cid - start_cid) as usize != current.len() {
                widths.consecutive(start_cid, current.clone());
                start_cid = cid;
                current.clear();
            }
            current.push(width);
        }
        widths.consecutive(start_cid, current);
    }
    widths.finish();

    cid_font.default_width(most_common_width);
    cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

    id
}

fn write_font_data(
    face: &OwnedFace,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let id = refs.gen(RefType::FontData(font_index));

    let raw = face.as_slice();
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
        raw,
        miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
    );
    let mut stream = writer.stream(id, compressed.as_slice());
    stream.filter(Filter::FlateDecode);
    stream.pair(Name(b"Length1"), raw.len() as i32);

    id
}

fn write_descriptor(
    face: &OwnedFace,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let font_data_stream_id = write_font_data(face, refs, font_index, writer);
    let face_ref = face.as_face_ref();

    let sizing = glyphs_sizing(face, &glyph_ids(face));
    let max_width = sizing.values().map(|&(_, (w, _))| w).max().unwrap_or_default();
    let max_height = sizing.values().map(|&(_, (_, h))| h).max().unwrap_or_default();
    let sum_width: usize = sizing.values().map(|&(_, (w, _))| w as usize).sum();
    let avg_width = if sizing.is_empty() {
        0.0
    } else {
        sum_width as f32 / sizing.len() as f32
    };

    let id = refs.gen(RefType::FontDescriptor(font_index));
    let full_name = face_name(face, owned_ttf_parser::name_id::FULL_NAME)
        .unwrap_or_else(|| format!("F{font_index}"));
    let family =
        face_name(face, owned_ttf_parser::name_id::FAMILY).unwrap_or_else(|| full_name.clone());

    let mut descriptor = writer.font_descriptor(id);
    descriptor.name(Name(full_name.as_bytes()));
    descriptor.family(Str(family.as_bytes()));
    descriptor.weight(face_ref.weight().to_number());

    let mut flags = FontFlags::NON_SYMBOLIC;
    if face_ref.is_monospaced() {
        flags.set(FontFlags::FIXED_PITCH, true);
    }
    if face_ref.is_italic() {
        flags.set(FontFlags::ITALIC, true);
    }
    descriptor.flags(flags);

    let scaling = 1000.0 / face_ref.units_per_em() as f32;
    descriptor.bbox(pdf_writer::Rect {
        x1: 0.0,
        y1: face_ref.descender() as f32 * scaling,
        x2: max_width as f32 * scaling,
        y2: max_height as f32 * scaling,
    });
    descriptor.italic_angle(face_ref.italic_angle());
    descriptor.ascent(face_ref.ascender() as f32 * scaling);
    descriptor.descent(face_ref.descender() as f32 * scaling);
    descriptor.leading(face_ref.line_gap() as f32 * scaling);
    let cap_height = face_ref
        .capital_height()
        .map(|h| h as f32 * scaling)
        .unwrap_or(1000.0);
    descriptor.cap_height(cap_height);
    descriptor.x_height(
        face_ref
            .x_height()
            .map(|h| h as f32 * scaling)
            .unwrap_or(cap_height),
    );
    // TODO: derive the stem width from the glyph outlines instead of a typical value
    descriptor.stem_v(80.0);
    descriptor.avg_width(avg_width * scaling);
    descriptor.max_width(max_width as f32 * scaling);
    descriptor.missing_width(max_width as f32 * scaling);

    descriptor.font_file2(font_data_stream_id);

    id
}

/// Every glyph reachable from a unicode cmap subtable, with one character that maps to it
fn glyph_ids(face: &OwnedFace) -> HashMap<u16, char> {
    let mut map: HashMap<u16, char> = HashMap::new();
    let Some(cmap) = face.as_face_ref().tables().cmap else {
        return map;
    };

    for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
        subtable.codepoints(|codepoint: u32| {
            if let Ok(ch) = char::try_from(codepoint) {
                if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0) {
                    map.entry(index.0).or_insert(ch);
                }
            }
        });
    }

    map
}

/// glyph id => (char, (advance, height)), in font units
fn glyphs_sizing(face: &OwnedFace, ids: &HashMap<u16, char>) -> HashMap<u16, (char, (u16, i32))> {
    let face_ref = face.as_face_ref();
    let mut sizing = HashMap::new();
    for (&id, &ch) in ids.iter() {
        let gid = GlyphId(id);
        if let Some(h_advance) = face_ref.glyph_hor_advance(gid) {
            let height = face_ref
                .glyph_bounding_box(gid)
                .map(|bbox| bbox.y_max as i32 - bbox.y_min as i32)
                .unwrap_or(1000);
            sizing.insert(id, (ch, (h_advance, height)));
        }
    }
    sizing
}

fn write_to_unicode(
    face: &OwnedFace,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let id = refs.gen(RefType::ToUnicode(font_index));

    let mut map = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo\n\
         << /Registry (Adobe)\n\
         /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    let mut ids: Vec<(u16, char)> = glyph_ids(face).into_iter().collect();
    ids.sort_by_key(|&(id, _)| id);

    // bfchar blocks hold at most 100 entries, all sharing a high byte
    let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
    let mut current: Vec<(u16, char)> = Vec::new();
    let mut high_byte: u8 = 0;
    for &(id, ch) in ids.iter() {
        if (id >> 8) as u8 != high_byte || current.len() >= 100 {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            high_byte = (id >> 8) as u8;
        }
        current.push((id, ch));
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    for block in blocks.into_iter() {
        map.push_str(&format!("{} beginbfchar\n", block.len()));
        for (id, ch) in block.into_iter() {
            let mut utf16 = [0u16; 2];
            let units: String = ch
                .encode_utf16(&mut utf16)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            map.push_str(&format!("<{id:04x}> <{units}>\n"));
        }
        map.push_str("endbfchar\n");
    }

    map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
        map.as_bytes(),
        miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
    );
    let mut stream = writer.stream(id, compressed.as_slice());
    stream.filter(Filter::FlateDecode);

    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_case_insensitive() {
        assert!(Font::builtin("Courier").is_some());
        assert!(Font::builtin("courier-bold").is_some());
        assert!(Font::builtin("Helvetica").is_none());
        assert_eq!(Font::builtin("COURIER-OBLIQUE").unwrap().name(), "Courier-Oblique");
    }

    #[test]
    fn courier_is_six_tenths_of_an_em() {
        let font = Font::builtin("Courier").unwrap();
        assert!((font.advance_width('.', Pt(10.0)).0 - 6.0).abs() < 1e-5);
        assert_eq!(font.advance_width('W', Pt(10.0)), font.advance_width('.', Pt(10.0)));
        assert!(!font.is_embedded());
    }

    #[test]
    fn missing_font_file_is_reported() {
        let err = Font::from_name_or_path("/definitely/not/here.ttf")
            .err()
            .expect("no such font");
        assert!(matches!(err, ConvertError::FontRead { .. }));
    }

    #[test]
    fn garbage_font_file_fails_to_parse() {
        let err = Font::load(b"not a font".to_vec()).err().expect("not a font");
        assert!(matches!(err, ConvertError::FaceParsing(_)));
    }

    const DEJAVU_MONO: &[u8] = include_bytes!("../tests/assets/DejaVuSansMono.ttf");

    #[test]
    fn embedded_font_metrics() {
        let font = Font::load(DEJAVU_MONO.to_vec()).unwrap();
        assert!(font.is_embedded());
        assert_eq!(font.name(), "DejaVu Sans Mono");

        // 1233 / 2048 em
        let dot = font.advance_width('.', Pt(10.0));
        assert!((dot.0 - 6.0205).abs() < 1e-3);
        assert_eq!(font.advance_width('W', Pt(10.0)), dot);
    }

    #[test]
    fn embedded_glyph_fallbacks() {
        let font = Font::load(DEJAVU_MONO.to_vec()).unwrap();
        assert_eq!(font.glyph_id('.'), Some(17));
        assert_eq!(font.glyph_id('A'), Some(36));

        // no CJK in the font, so the replacement character stands in
        let replacement = font.glyph_id('\u{FFFD}');
        assert_eq!(replacement, Some(3261));
        assert_eq!(font.glyph_id('中'), replacement);

        let mut out = Vec::new();
        font.encode_hex("A中", &mut out).unwrap();
        assert_eq!(out, b"<00240cbd>");
    }

    #[test]
    fn builtin_fonts_have_no_glyph_ids() {
        assert_eq!(Font::builtin("Courier").unwrap().glyph_id('A'), None);
    }

    #[test]
    fn win_ansi_encoding() {
        let font = Font::builtin("Courier").unwrap();
        let mut out = Vec::new();
        font.encode_hex("A\té€ж", &mut out).unwrap();
        assert_eq!(out, b"<4120e9803f>");
    }
}
