//! Page-furniture layout: margins and caption placement.
//!
//! Captions are the small fixed texts around a rendered document: the
//! optional header and footer lines, and the axis-unit note in the lower
//! left corner of a grid page.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;
use id_arena::Id;

/// Margins are used when laying out objects on a page. There is no control
/// preventing page contents from overflowing the margins—the margins are
/// there as guidelines for layout functions. Additionally, the margins are
/// applied to [`Page`]s to determine the `ContentBox` attribute of each page
/// in the generated PDF
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
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
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

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::default()
    }
}

/// Add a span horizontally centred on `centre_x` with its baseline at `baseline`
pub fn place_centred(
    page: &mut Page,
    text: &str,
    font: (Id<Font>, &Font),
    size: Pt,
    colour: Colour,
    centre_x: Pt,
    baseline: Pt,
) {
    let width = font.1.text_width(text, size);
    page.add_span(SpanLayout {
        text: text.to_string(),
        font: SpanFont { id: font.0, size },
        colour,
        coords: (centre_x - width / 2.0, baseline),
    });
}

/// Add a header line centred near the top edge of the page
pub fn place_header(
    page: &mut Page,
    text: &str,
    font: (Id<Font>, &Font),
    size: Pt,
    colour: Colour,
) {
    let centre_x = Pt((*page.media_box.x1 + *page.media_box.x2) / 2.0);
    let baseline = page.media_box.y2 - Pt(25.0);
    place_centred(page, text, font, size, colour, centre_x, baseline);
}

/// Add a footer line centred near the bottom edge of the page
pub fn place_footer(
    page: &mut Page,
    text: &str,
    font: (Id<Font>, &Font),
    size: Pt,
    colour: Colour,
) {
    let centre_x = Pt((*page.media_box.x1 + *page.media_box.x2) / 2.0);
    let baseline = page.media_box.y1 + Pt(20.0);
    place_centred(page, text, font, size, colour, centre_x, baseline);
}

/// Add a note anchored in the lower-left corner of the page, used for the
/// axis-unit legend
pub fn place_corner_note(
    page: &mut Page,
    text: &str,
    font: (Id<Font>, &Font),
    size: Pt,
    colour: Colour,
) {
    page.add_span(SpanLayout {
        text: text.to_string(),
        font: SpanFont { id: font.0, size },
        colour,
        coords: (page.media_box.x1 + Pt(40.0), page.media_box.y1 + Pt(40.0)),
    });
}
