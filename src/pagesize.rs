//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! except [`LEDGER`] which is tabloid turned on its side.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between portrait and landscape.
//!
//! # Available Sizes
//!
//! ## North American
//! `LETTER`, `HALF_LETTER`, `JUNIOR_LEGAL`, `LEGAL`, `GOV_LETTER`, `GOV_LEGAL`, `TABLOID`, `LEDGER`, `ELEVEN_SEVENTEEN`
//!
//! ## ANSI
//! `ANSI_A` through `ANSI_E`
//!
//! ## ISO A-, B- and C-Series
//! `A0` through `A10`, `B0` through `B10`, `C0` through `C10`
//!
//! ## Traditional
//! `FOLIO`, `QUARTO`, `OCTAVO`
//!
//! # Example
//!
//! ```
//! use txt2pdf::pagesize::{self, PageOrientation};
//!
//! let a4 = pagesize::by_name("a4").expect("A4 is a known size");
//! assert_eq!(a4, pagesize::A4);
//!
//! let landscape = a4.landscape();
//! assert!(landscape.0 > landscape.1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = (Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const JUNIOR_LEGAL: PageSize = (Pt(5.0 * 72.0), Pt(8.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const GOV_LETTER: PageSize = (Pt(8.0 * 72.0), Pt(10.5 * 72.0));
pub const GOV_LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(13.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));
pub const LEDGER: PageSize = (Pt(17.0 * 72.0), Pt(11.0 * 72.0));
pub const ELEVEN_SEVENTEEN: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// ansi sizes
pub const ANSI_A: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const ANSI_B: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));
pub const ANSI_C: PageSize = (Pt(17.0 * 72.0), Pt(22.0 * 72.0));
pub const ANSI_D: PageSize = (Pt(22.0 * 72.0), Pt(34.0 * 72.0));
pub const ANSI_E: PageSize = (Pt(34.0 * 72.0), Pt(44.0 * 72.0));

// traditional sizes
pub const FOLIO: PageSize = (Pt(12.0 * 72.0), Pt(19.0 * 72.0));
pub const QUARTO: PageSize = (Pt(9.5 * 72.0), Pt(12.0 * 72.0));
pub const OCTAVO: PageSize = (Pt(6.0 * 72.0), Pt(9.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A0: PageSize = (Pt(841.0 * 72.0 / 25.4), Pt(1189.0 * 72.0 / 25.4));
pub const A1: PageSize = (Pt(594.0 * 72.0 / 25.4), Pt(841.0 * 72.0 / 25.4));
pub const A2: PageSize = (Pt(420.0 * 72.0 / 25.4), Pt(594.0 * 72.0 / 25.4));
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));
pub const A7: PageSize = (Pt(74.0 * 72.0 / 25.4), Pt(105.0 * 72.0 / 25.4));
pub const A8: PageSize = (Pt(52.0 * 72.0 / 25.4), Pt(74.0 * 72.0 / 25.4));
pub const A9: PageSize = (Pt(37.0 * 72.0 / 25.4), Pt(52.0 * 72.0 / 25.4));
pub const A10: PageSize = (Pt(26.0 * 72.0 / 25.4), Pt(37.0 * 72.0 / 25.4));

// iso b-series
pub const B0: PageSize = (Pt(1000.0 * 72.0 / 25.4), Pt(1414.0 * 72.0 / 25.4));
pub const B1: PageSize = (Pt(707.0 * 72.0 / 25.4), Pt(1000.0 * 72.0 / 25.4));
pub const B2: PageSize = (Pt(500.0 * 72.0 / 25.4), Pt(707.0 * 72.0 / 25.4));
pub const B3: PageSize = (Pt(353.0 * 72.0 / 25.4), Pt(500.0 * 72.0 / 25.4));
pub const B4: PageSize = (Pt(250.0 * 72.0 / 25.4), Pt(353.0 * 72.0 / 25.4));
pub const B5: PageSize = (Pt(176.0 * 72.0 / 25.4), Pt(250.0 * 72.0 / 25.4));
pub const B6: PageSize = (Pt(125.0 * 72.0 / 25.4), Pt(176.0 * 72.0 / 25.4));
pub const B7: PageSize = (Pt(88.0 * 72.0 / 25.4), Pt(125.0 * 72.0 / 25.4));
pub const B8: PageSize = (Pt(62.0 * 72.0 / 25.4), Pt(88.0 * 72.0 / 25.4));
pub const B9: PageSize = (Pt(44.0 * 72.0 / 25.4), Pt(62.0 * 72.0 / 25.4));
pub const B10: PageSize = (Pt(31.0 * 72.0 / 25.4), Pt(44.0 * 72.0 / 25.4));

// iso c-series (envelopes)
pub const C0: PageSize = (Pt(917.0 * 72.0 / 25.4), Pt(1297.0 * 72.0 / 25.4));
pub const C1: PageSize = (Pt(648.0 * 72.0 / 25.4), Pt(917.0 * 72.0 / 25.4));
pub const C2: PageSize = (Pt(458.0 * 72.0 / 25.4), Pt(648.0 * 72.0 / 25.4));
pub const C3: PageSize = (Pt(324.0 * 72.0 / 25.4), Pt(458.0 * 72.0 / 25.4));
pub const C4: PageSize = (Pt(229.0 * 72.0 / 25.4), Pt(324.0 * 72.0 / 25.4));
pub const C5: PageSize = (Pt(162.0 * 72.0 / 25.4), Pt(229.0 * 72.0 / 25.4));
pub const C6: PageSize = (Pt(114.0 * 72.0 / 25.4), Pt(162.0 * 72.0 / 25.4));
pub const C7: PageSize = (Pt(81.0 * 72.0 / 25.4), Pt(114.0 * 72.0 / 25.4));
pub const C8: PageSize = (Pt(57.0 * 72.0 / 25.4), Pt(81.0 * 72.0 / 25.4));
pub const C9: PageSize = (Pt(40.0 * 72.0 / 25.4), Pt(57.0 * 72.0 / 25.4));
pub const C10: PageSize = (Pt(28.0 * 72.0 / 25.4), Pt(40.0 * 72.0 / 25.4));

/// Every named size, keyed by its normalized name (upper case, no separators)
const NAMED_SIZES: &[(&str, PageSize)] = &[
    ("LETTER", LETTER),
    ("HALFLETTER", HALF_LETTER),
    ("JUNIORLEGAL", JUNIOR_LEGAL),
    ("LEGAL", LEGAL),
    ("GOVLETTER", GOV_LETTER),
    ("GOVLEGAL", GOV_LEGAL),
    ("TABLOID", TABLOID),
    ("LEDGER", LEDGER),
    ("ELEVENSEVENTEEN", ELEVEN_SEVENTEEN),
    ("ANSIA", ANSI_A),
    ("ANSIB", ANSI_B),
    ("ANSIC", ANSI_C),
    ("ANSID", ANSI_D),
    ("ANSIE", ANSI_E),
    ("FOLIO", FOLIO),
    ("QUARTO", QUARTO),
    ("OCTAVO", OCTAVO),
    ("A0", A0),
    ("A1", A1),
    ("A2", A2),
    ("A3", A3),
    ("A4", A4),
    ("A5", A5),
    ("A6", A6),
    ("A7", A7),
    ("A8", A8),
    ("A9", A9),
    ("A10", A10),
    ("B0", B0),
    ("B1", B1),
    ("B2", B2),
    ("B3", B3),
    ("B4", B4),
    ("B5", B5),
    ("B6", B6),
    ("B7", B7),
    ("B8", B8),
    ("B9", B9),
    ("B10", B10),
    ("C0", C0),
    ("C1", C1),
    ("C2", C2),
    ("C3", C3),
    ("C4", C4),
    ("C5", C5),
    ("C6", C6),
    ("C7", C7),
    ("C8", C8),
    ("C9", C9),
    ("C10", C10),
];

/// Look up a standard page size by name. Matching ignores case as well as `-`, `_`
/// and spaces, so `"half-letter"`, `"HALF_LETTER"` and `"HalfLetter"` are all the same size.
pub fn by_name(name: &str) -> Option<PageSize> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_uppercase)
        .collect();
    NAMED_SIZES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|&(_, size)| size)
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_normalized() {
        assert_eq!(by_name("A4"), Some(A4));
        assert_eq!(by_name("a4"), Some(A4));
        assert_eq!(by_name("half-letter"), Some(HALF_LETTER));
        assert_eq!(by_name("Ansi_C"), Some(ANSI_C));
        assert_eq!(by_name("eleven seventeen"), Some(ELEVEN_SEVENTEEN));
        assert_eq!(by_name("GOV_LETTER"), Some((Pt(576.0), Pt(756.0))));
        assert_eq!(by_name("gov-legal"), Some((Pt(612.0), Pt(936.0))));
        assert_eq!(by_name("A11"), None);
        assert_eq!(by_name(""), None);
    }

    #[test]
    fn orientation_swaps_only_when_needed() {
        assert_eq!(A4.landscape(), (A4.1, A4.0));
        assert_eq!(A4.portrait(), A4);
        assert_eq!(LEDGER.landscape(), LEDGER);
        assert_eq!(LEDGER.portrait(), TABLOID);
    }
}
