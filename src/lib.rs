//! Convert plain text into paginated PDF documents laid out on a monospace grid.
//!
//! The grid (characters per line, lines per page) is derived from the page size,
//! the margins, the font and the spacing options; see [layout]. Input is streamed
//! through the layout engine one line at a time and drawn with a [Font] that is
//! either a built-in Courier or an embedded TrueType / OpenType font.

mod content;
pub use content::*;

mod convert;
pub use convert::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// The monospace grid layout engine
pub mod layout;

mod options;
pub use options::*;

mod page;
pub use page::*;

/// Standard media sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod source;
pub use source::*;

mod typesetter;
pub use typesetter::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export of the PDF writer the backend is built on
pub use pdf_writer;
