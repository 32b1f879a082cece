use crate::error::ConvertError;
use crate::layout::{Margins, PageGeometry};
use crate::units::Pt;

/// Single-spaced leading, as a multiple of the font size
pub const BASE_LEADING: f64 = 1.2;

/// The glyph whose advance width stands in for every character of a monospace font
pub const REFERENCE_GLYPH: char = '.';

/// The one thing the layout engine needs to know about a font: how far the pen
/// moves after drawing a character at a given size.
pub trait GlyphMetrics {
    fn advance_width(&self, ch: char, size: Pt) -> Pt;
}

/// Text settings that feed into the grid calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Font size in points, must be greater than zero
    pub font_size: Pt,
    /// Extra horizontal space inserted after every character
    pub kerning: Pt,
    /// Added to [BASE_LEADING] before scaling by the font size
    pub extra_vertical_space: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            font_size: Pt(10.0),
            kerning: Pt(0.0),
            extra_vertical_space: 0.0,
        }
    }
}

/// The character grid of every page in the document.
///
/// Both `chars_per_line` and `lines_per_page` are at least 1; [LayoutMetrics::compute]
/// refuses to build anything smaller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub chars_per_line: usize,
    pub lines_per_page: usize,
    /// y-coordinate of the first baseline on each page
    pub top: Pt,
    /// Vertical distance between consecutive baselines
    pub leading: Pt,
    /// Advance width of [REFERENCE_GLYPH] at the chosen size
    pub glyph_width: Pt,
}

impl LayoutMetrics {
    /// Derive the grid from the page, its margins and the font. The font is
    /// asked exactly once, for the width of [REFERENCE_GLYPH].
    pub fn compute<F: GlyphMetrics + ?Sized>(
        geometry: &PageGeometry,
        margins: &Margins,
        font: &F,
        spacing: &Spacing,
    ) -> Result<LayoutMetrics, ConvertError> {
        let Spacing {
            font_size,
            kerning,
            extra_vertical_space,
        } = *spacing;

        let font_size_f64 = f64::from(font_size.0);
        let kerning_f64 = f64::from(kerning.0);
        let content_width = f64::from((geometry.width - margins.horizontal()).0);
        let glyph_width = font.advance_width(REFERENCE_GLYPH, font_size);
        let cell_width = f64::from(glyph_width.0) + kerning_f64;
        let chars_per_line = if cell_width > 0.0 {
            whole_cells(content_width + kerning_f64, cell_width)
        } else {
            0.0
        };

        let top = geometry.height - margins.top - font_size;
        let leading = font_size_f64 * (f64::from(extra_vertical_space) + BASE_LEADING);
        let usable_height = f64::from((geometry.height - margins.vertical()).0);
        let lines_per_page = whole_cells(leading + usable_height - font_size_f64, leading);

        // NaN fails both comparisons and lands here too
        if !(chars_per_line >= 1.0 && lines_per_page >= 1.0) {
            return Err(ConvertError::DegenerateLayout {
                chars_per_line: chars_per_line as i64,
                lines_per_page: lines_per_page as i64,
            });
        }

        Ok(LayoutMetrics {
            chars_per_line: chars_per_line as usize,
            lines_per_page: lines_per_page as usize,
            top,
            leading: Pt(leading as f32),
            glyph_width,
        })
    }
}

/// Relative distance from a whole number under which a quotient counts as that number
const WHOLE_TOLERANCE: f64 = 1e-6;

/// `floor(span / cell)`. Options and glyph widths are single precision, so a
/// quotient that is exactly whole in decimal can come out a hair below it.
fn whole_cells(span: f64, cell: f64) -> f64 {
    let quotient = span / cell;
    let nearest = quotient.round();
    if (quotient - nearest).abs() <= WHOLE_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        quotient.floor()
    }
}
