use crate::error::ConvertError;
use crate::layout::{Margins, Orientation, Spacing};
use crate::units::{Cm, Pt};
use std::path::PathBuf;

/// The built-in font used when none is requested
pub const DEFAULT_FONT: &str = "Courier";

/// Everything a conversion needs to know, in the units the user gives them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// The text file to convert
    pub input: PathBuf,
    /// Where the PDF goes
    pub output: PathBuf,
    /// A built-in font name or the path of a TTF / OTF file
    pub font: String,
    pub font_size: f32,
    /// Extra leading, as a multiple of the font size
    pub extra_vertical_space: f32,
    /// Extra space between characters, in points
    pub kerning: f32,
    /// Standard page size name
    pub media: String,
    pub landscape: bool,
    /// Margins in centimetres
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub author: String,
    pub title: String,
    /// Suppress progress and warning messages
    pub quiet: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            input: PathBuf::new(),
            output: PathBuf::from("output.pdf"),
            font: DEFAULT_FONT.to_string(),
            font_size: 10.0,
            extra_vertical_space: 0.0,
            kerning: 0.0,
            media: "A4".to_string(),
            landscape: false,
            margin_left: 2.0,
            margin_right: 2.0,
            margin_top: 2.0,
            margin_bottom: 2.0,
            author: String::new(),
            title: String::new(),
            quiet: false,
        }
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConvertError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConvertError::InvalidOption {
            name,
            value,
            reason: "must be a finite number no smaller than zero",
        })
    }
}

impl ConvertOptions {
    /// Options for converting `input` with every other setting at its default
    pub fn for_input<P: Into<PathBuf>>(input: P) -> ConvertOptions {
        ConvertOptions {
            input: input.into(),
            ..ConvertOptions::default()
        }
    }

    /// Reject sizes and distances that make no sense before anything is laid out
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConvertError::InvalidOption {
                name: "font size",
                value: self.font_size,
                reason: "must be a finite number greater than zero",
            });
        }
        non_negative("kerning", self.kerning)?;
        non_negative("extra vertical space", self.extra_vertical_space)?;
        non_negative("left margin", self.margin_left)?;
        non_negative("right margin", self.margin_right)?;
        non_negative("top margin", self.margin_top)?;
        non_negative("bottom margin", self.margin_bottom)?;
        Ok(())
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_landscape_flag(self.landscape)
    }

    pub fn margins(&self) -> Margins {
        Margins::trbl(
            Cm(self.margin_top),
            Cm(self.margin_right),
            Cm(self.margin_bottom),
            Cm(self.margin_left),
        )
    }

    pub fn spacing(&self) -> Spacing {
        Spacing {
            font_size: Pt(self.font_size),
            kerning: Pt(self.kerning),
            extra_vertical_space: self.extra_vertical_space,
        }
    }
}
