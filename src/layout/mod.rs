//! The monospace grid layout engine.
//!
//! Layout happens in four steps, each in its own module:
//!
//! - [`PageGeometry`](crate::layout::PageGeometry) turns a media name and an orientation into a page size
//! - [`LayoutMetrics`](crate::layout::LayoutMetrics) derives how many characters fit on a line and how
//!   many lines fit on a page from that size, the [`Margins`](crate::layout::Margins) and the font
//! - [`LineWrapper`](crate::layout::LineWrapper) hard-wraps input lines that are longer than the grid
//! - [`Paginator`](crate::layout::Paginator) streams the wrapped lines into pages through a
//!   [`PageSink`](crate::layout::PageSink)
//!
//! # Example
//!
//! ```
//! use txt2pdf::layout::{LayoutMetrics, LineWrapper, Margins, Orientation, PageGeometry, Spacing};
//! use txt2pdf::{Cm, Font};
//!
//! let geometry = PageGeometry::resolve("A4", Orientation::Portrait).unwrap();
//! let margins = Margins::all(Cm(2.0));
//! let font = Font::builtin("Courier").unwrap();
//! let metrics = LayoutMetrics::compute(&geometry, &margins, &font, &Spacing::default()).unwrap();
//! assert_eq!(metrics.chars_per_line, 80);
//!
//! let lines = vec![Ok("x".repeat(100))];
//! let wrapped: Vec<String> = LineWrapper::new(lines.into_iter(), metrics.chars_per_line, "doc.txt")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(wrapped.len(), 2);
//! ```

mod geometry;
mod margins;
mod metrics;
mod paginate;
mod wrap;

pub use geometry::*;
pub use margins::*;
pub use metrics::*;
pub use paginate::*;
pub use wrap::*;
