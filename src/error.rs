use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("unknown media size '{0}'")]
    /// The requested page size isn't in the media table
    UnknownMedia(String),

    #[error("invalid {name}: {value} ({reason})")]
    /// A numeric option is out of its accepted range
    InvalidOption {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error(
        "degenerate layout: {chars_per_line} characters per line and {lines_per_page} lines per page; \
         the margins or the font size are too large for the page"
    )]
    /// The page, margins and font leave no room for at least one character on one line
    DegenerateLayout {
        chars_per_line: i64,
        lines_per_page: i64,
    },

    #[error("failed to read font file {path:?}")]
    /// A custom font could not be read from disk
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input {path:?}")]
    /// The input text could not be opened or read
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output {path:?}")]
    /// The destination PDF could not be created or written
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no page is open")]
    /// A line was appended or a page committed without a page being started first
    NoOpenPage,
}
