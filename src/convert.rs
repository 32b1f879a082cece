use crate::content::TextFrame;
use crate::document::Document;
use crate::error::ConvertError;
use crate::font::Font;
use crate::info::Info;
use crate::layout::{LayoutMetrics, LineWrapper, PageGeometry, Paginator};
use crate::options::ConvertOptions;
use crate::source::SourceLines;
use crate::typesetter::Typesetter;
use crate::units::Pt;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// What a finished conversion produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionReport {
    pub metrics: LayoutMetrics,
    /// Committed pages in the document
    pub pages: usize,
    /// Input lines that were longer than a line of the grid
    pub wrapped_lines: usize,
    /// Lines drawn, after wrapping
    pub output_lines: usize,
}

/// Lay out everything `reader` yields into a new document, without writing it
/// anywhere. `source` names the input in diagnostics.
///
/// All configuration is checked (and the font loaded) before the first line is read.
pub fn typeset<R: BufRead>(
    reader: R,
    source: &str,
    options: &ConvertOptions,
) -> Result<(Document, ConversionReport), ConvertError> {
    options.validate()?;
    let geometry = PageGeometry::resolve(&options.media, options.orientation())?;
    let margins = options.margins();
    let font = Font::from_name_or_path(&options.font)?;
    let metrics = LayoutMetrics::compute(&geometry, &margins, &font, &options.spacing())?;

    log::info!(
        "Writing '{}' with {} characters per line and {} lines per page...",
        source,
        metrics.chars_per_line,
        metrics.lines_per_page
    );

    let mut document = Document::new();
    let mut info = Info::new();
    info.title(&options.title).author(&options.author);
    document.set_info(info);

    let frame = TextFrame {
        font: document.add_font(font),
        size: Pt(options.font_size),
        leading: metrics.leading,
        origin: (margins.left, metrics.top),
        char_spacing: Pt(options.kerning),
    };

    let mut wrapper = LineWrapper::new(
        SourceLines::new(reader, source),
        metrics.chars_per_line,
        source,
    );
    let pages = {
        let mut typesetter = Typesetter::new(&mut document, geometry.size(), margins, frame);
        Paginator::new(&mut typesetter, metrics.lines_per_page).paginate(&mut wrapper)?
    };

    let report = ConversionReport {
        metrics,
        pages,
        wrapped_lines: wrapper.wrapped_lines(),
        output_lines: wrapper.emitted_lines(),
    };
    Ok((document, report))
}

/// Convert the file named by `options.input` into a PDF at `options.output`.
///
/// Configuration problems (unknown media, unreadable font, a grid with no room
/// for text) and a missing input file are reported before the output is touched.
pub fn convert(options: &ConvertOptions) -> Result<ConversionReport, ConvertError> {
    let source = options.input.display().to_string();
    let file = File::open(&options.input).map_err(|err| ConvertError::Input {
        path: options.input.clone(),
        source: err,
    })?;

    let (document, report) = typeset(BufReader::new(file), &source, options)?;
    document.save(&options.output)?;

    log::info!("PDF document: {} pages", report.pages);
    Ok(report)
}
