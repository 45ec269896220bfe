use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use pdf_writer::{Name, Pdf};

/// One of the PDF standard-14 typefaces, available in every conforming
/// reader without embedding.
///
/// Glyph widths for the standard faces are compiled in (in 1/1000s of the
/// font size, per the Adobe font metrics), so text can be measured for
/// centering without parsing any font files.
///
/// Typically, fonts are referred to throughout user applications by their
/// [`Id`](id_arena::Id) within the document itself, assigned by
/// [`Document::add_font`](crate::Document::add_font).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    Courier,
}

// AFM widths for the printable ASCII range (codes 32..=126).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl Font {
    /// The PostScript base font name, as written into the PDF font dictionary
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::Courier => "Courier",
        }
    }

    /// Width of a single character, in 1/1000s of the font size. Characters
    /// outside the printable ASCII range fall back to the face's default width.
    fn char_width(&self, ch: char) -> u16 {
        let index = (ch as u32).wrapping_sub(32);
        match self {
            Font::Helvetica => HELVETICA_WIDTHS.get(index as usize).copied().unwrap_or(556),
            Font::HelveticaBold => HELVETICA_BOLD_WIDTHS
                .get(index as usize)
                .copied()
                .unwrap_or(611),
            Font::Courier => 600,
        }
    }

    /// Measure the width of a run of text at the given size
    pub fn text_width(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }

    /// Calculate the ascent (distance from the baseline to the top of the font)
    /// for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let ascender = match self {
            Font::Helvetica | Font::HelveticaBold => 718,
            Font::Courier => 629,
        };
        size * (ascender as f32 / 1000.0)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the
    /// font) for the given font size. Note: this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        let descender = match self {
            Font::Helvetica | Font::HelveticaBold => -207,
            Font::Courier => -157,
        };
        size * (descender as f32 / 1000.0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_label_text() {
        // "1/2" is 556 + 278 + 556 thousandths wide
        let width = Font::Helvetica.text_width("1/2", Pt(1000.0));
        assert!((*width - 1390.0).abs() < 1e-2);

        // courier is monospaced
        let width = Font::Courier.text_width("-3/4", Pt(10.0));
        assert!((*width - 24.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_metrics_scale_with_size() {
        assert!((*Font::Helvetica.ascent(Pt(1000.0)) - 718.0).abs() < 1e-2);
        assert!((*Font::Helvetica.descent(Pt(1000.0)) + 207.0).abs() < 1e-2);
        assert!(*Font::Helvetica.ascent(Pt(8.0)) < 6.0);
    }
}
