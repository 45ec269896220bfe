//! Row/column table layout and rendering.

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::Font;
use crate::layout::{place_footer, place_header};
use crate::page::Page;
use crate::units::Pt;
use crate::PdfError;
use id_arena::Id;
use pdf_writer::Content;
use tracing::debug;

const TABLE_LINE_WIDTH: f32 = 0.8;
const CAPTION_FONT_SIZE: Pt = Pt(10.0);

/// Everything that varies between table pages
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub columns: u32,
    pub rows: u32,
    pub background: Colour,
    pub lines: Colour,
    pub header: Option<String>,
    pub footer: Option<String>,
}

impl Default for TableConfig {
    fn default() -> TableConfig {
        TableConfig {
            columns: 4,
            rows: 10,
            background: colours::BLACK,
            lines: colours::WHITE,
            header: None,
            footer: None,
        }
    }
}

/// The rule positions dividing `extent` into `cells` equal cells, measured
/// from the leading edge. There is one more rule than there are cells.
fn rule_offsets(extent: Pt, cells: u32) -> Vec<Pt> {
    let cell = extent / cells as f32;
    (0..=cells).map(|i| Pt(i as f32 * *cell)).collect()
}

impl TableConfig {
    /// Render the table onto `page`. Zero rows or columns would divide the
    /// page into nothing and are rejected.
    pub fn render(&self, doc: &Document, font: Id<Font>, page: &mut Page) -> Result<(), PdfError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(PdfError::EmptyTable);
        }

        let bounds = page.content_box;
        page.fill_background(self.background);

        let mut content = Content::new();
        self.lines.apply_stroke(&mut content);
        content.set_line_width(TABLE_LINE_WIDTH);
        for x in rule_offsets(bounds.width(), self.columns) {
            content.move_to(*bounds.x1 + *x, *bounds.y1);
            content.line_to(*bounds.x1 + *x, *bounds.y2);
        }
        for y in rule_offsets(bounds.height(), self.rows) {
            content.move_to(*bounds.x1, *bounds.y1 + *y);
            content.line_to(*bounds.x2, *bounds.y1 + *y);
        }
        content.stroke();
        page.add_content(content);

        let face = &doc.fonts[font];
        if let Some(header) = &self.header {
            place_header(page, header, (font, face), CAPTION_FONT_SIZE, self.lines);
        }
        if let Some(footer) = &self.footer {
            place_footer(page, footer, (font, face), CAPTION_FONT_SIZE, self.lines);
        }

        debug!(columns = self.columns, rows = self.rows, "rendered table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn rules_divide_the_extent_evenly() {
        let offsets = rule_offsets(Pt(500.0), 5);
        assert_eq!(offsets.len(), 6);
        assert_eq!(offsets[0], Pt(0.0));
        assert_eq!(offsets[5], Pt(500.0));
        for pair in offsets.windows(2) {
            assert!((*pair[1] - *pair[0] - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn empty_tables_are_rejected() {
        let mut doc = Document::default();
        let font = doc.add_font(Font::Helvetica);
        let mut page = Page::new(pagesize::A4, None);
        let config = TableConfig {
            columns: 0,
            ..TableConfig::default()
        };
        assert!(matches!(
            config.render(&doc, font, &mut page),
            Err(PdfError::EmptyTable)
        ));
    }

    #[test]
    fn renders_background_lines_and_captions() {
        let mut doc = Document::default();
        let font = doc.add_font(Font::Helvetica);
        let mut page = Page::new(pagesize::A4, None);
        let config = TableConfig {
            columns: 3,
            rows: 6,
            header: Some("Attendance".to_string()),
            ..TableConfig::default()
        };
        config.render(&doc, font, &mut page).expect("table renders");
        // background fill, rule content, one caption span
        assert_eq!(page.contents.len(), 3);
    }
}
