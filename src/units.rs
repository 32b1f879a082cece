//! Length units. Everything that ends up in the PDF is expressed in [`Pt`]; the
//! other units exist so that user-facing values (margins in centimetres, page
//! sizes in millimetres or inches) can be converted exactly once.

use derive_more::{Add, AddAssign, Deref, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// PDF points, 1/72 of an inch
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

/// Inches
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct In(pub f32);

/// Centimetres
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cm(pub f32);

/// Millimetres
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Cm> for Pt {
    fn from(value: Cm) -> Self {
        Pt(value.0 * 72.0 / 2.54)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}
