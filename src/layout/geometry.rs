use crate::error::ConvertError;
use crate::pagesize::{self, PageOrientation, PageSize};
use crate::units::Pt;

/// Which way round the sheet is printed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_landscape_flag(landscape: bool) -> Orientation {
        if landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// The absolute size of every page in the document, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
}

impl PageGeometry {
    /// Resolve a media name (see [`pagesize::by_name`]) and an orientation into
    /// a page size. Landscape swaps width and height so that the page is wider
    /// than it is tall; portrait leaves the table entry untouched.
    pub fn resolve(media: &str, orientation: Orientation) -> Result<PageGeometry, ConvertError> {
        let size = pagesize::by_name(media)
            .ok_or_else(|| ConvertError::UnknownMedia(media.to_string()))?;
        let size = match orientation {
            Orientation::Portrait => size,
            Orientation::Landscape => size.landscape(),
        };
        Ok(PageGeometry::from(size))
    }

    pub fn size(&self) -> PageSize {
        (self.width, self.height)
    }
}

impl From<PageSize> for PageGeometry {
    fn from((width, height): PageSize) -> Self {
        PageGeometry { width, height }
    }
}
