use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// Distance between the page edges and the text grid. Margins are given in
/// whatever unit is convenient (the command line uses centimetres) and are
/// converted to [Pt] once, on construction. They are also applied to each
/// [`Page`](crate::Page) to determine the `ArtBox` attribute in the generated PDF
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl<T, R, B, L>(top: T, right: R, bottom: B, left: L) -> Margins
    where
        T: Into<Pt>,
        R: Into<Pt>,
        B: Into<Pt>,
        L: Into<Pt>,
    {
        Margins {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Combined width of the left and right margins
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Combined height of the top and bottom margins
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }

    /// The rectangle left over once these margins are taken off a page of the given size
    pub fn content_box(&self, size: PageSize) -> Rect {
        Rect {
            x1: self.left,
            y1: self.bottom,
            x2: size.0 - self.right,
            y2: size.1 - self.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Cm;

    #[test]
    fn centimetre_margins_convert_once() {
        let margins = Margins::trbl(Cm(1.0), Cm(2.0), Cm(3.0), Cm(4.0));
        let cm: f32 = 72.0 / 2.54;
        assert!((margins.top.0 - cm).abs() < 1e-4);
        assert!((margins.right.0 - 2.0 * cm).abs() < 1e-4);
        assert!((margins.bottom.0 - 3.0 * cm).abs() < 1e-4);
        assert!((margins.left.0 - 4.0 * cm).abs() < 1e-4);
        assert!((margins.horizontal().0 - 6.0 * cm).abs() < 1e-4);
        assert!((margins.vertical().0 - 4.0 * cm).abs() < 1e-4);
    }

    #[test]
    fn content_box_subtracts_every_side() {
        let margins = Margins::trbl(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0));
        let rect = margins.content_box((Pt(200.0), Pt(300.0)));
        assert_eq!(
            rect,
            Rect {
                x1: Pt(40.0),
                y1: Pt(30.0),
                x2: Pt(180.0),
                y2: Pt(290.0),
            }
        );
    }
}
