//! Coordinate-grid layout and rendering.
//!
//! A grid page is drawn outward from the page centre: grid lines mirrored on
//! both sides of each axis, the axes themselves with arrowheads at their
//! positive ends, and a labeled tick at every grid line crossing. The origin
//! never gets a tick label; it is labeled implicitly by the axes.

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::Font;
use crate::fraction::UnitFraction;
use crate::layout::{place_corner_note, place_footer, place_header};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::ticks::{format_tick, TickFormat, DEFAULT_MAX_DENOMINATOR};
use crate::units::{Mm, Pt};
use crate::PdfError;
use id_arena::Id;
use pdf_writer::Content;
use tracing::debug;

const GRID_LINE_WIDTH: f32 = 0.3;
const AXIS_LINE_WIDTH: f32 = 1.0;
const TICK_HALF: f32 = 3.0;
const ARROW_LENGTH: f32 = 10.0;
const ARROW_HALF_WIDTH: f32 = 5.0;
const TICK_FONT_SIZE: Pt = Pt(7.0);
const AXIS_LETTER_SIZE: Pt = Pt(10.0);
const CAPTION_FONT_SIZE: Pt = Pt(10.0);
const LEGEND_FONT_SIZE: Pt = Pt(9.0);

/// Which labeling strategy decorates the axes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelStyle {
    /// Fractions over the unit's own denominator
    FractionFixed,
    /// Best rational approximations with a bounded denominator
    FractionBest,
    /// Two-digit decimals
    Decimal,
}

/// The colours of a grid page
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridStyle {
    pub background: Colour,
    pub grid: Colour,
    pub axes: Colour,
    pub labels: Colour,
}

impl Default for GridStyle {
    /// The dark theme: black page, mid-grey grid, white axes and labels
    fn default() -> GridStyle {
        GridStyle {
            background: colours::BLACK,
            grid: colours::GRID_GREY,
            axes: colours::WHITE,
            labels: colours::WHITE,
        }
    }
}

/// Everything that varies between grid pages, in one place
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub style: GridStyle,
    /// Physical distance between adjacent grid lines
    pub spacing: Pt,
    /// The real-world value represented by one grid spacing
    pub unit: UnitFraction,
    pub labels: LabelStyle,
    /// Denominator bound for [LabelStyle::FractionBest]
    pub max_denominator: i64,
    pub header: Option<String>,
    pub footer: Option<String>,
    /// Whether to note the axis unit in the lower-left corner
    pub legend: bool,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            style: GridStyle::default(),
            spacing: Mm(10.0).into(),
            unit: UnitFraction::default(),
            labels: LabelStyle::FractionBest,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            header: None,
            footer: None,
            legend: false,
        }
    }
}

/// How many grid lines fit between the centre and `half_extent`, excluding
/// the centre line itself. Non-positive spacing fits none.
fn tick_count(half_extent: Pt, spacing: Pt) -> u32 {
    if *spacing <= 0.0 {
        return 0;
    }
    (*half_extent / *spacing).floor() as u32
}

impl GridConfig {
    /// The tick format resolved from the label style and the unit, or an
    /// error if the unit cannot support it.
    fn tick_format(&self) -> Result<TickFormat, PdfError> {
        match self.labels {
            LabelStyle::FractionFixed => self
                .unit
                .label_denominator()
                .map(TickFormat::FixedDenominator)
                .ok_or(PdfError::DegenerateUnit(self.unit.value())),
            LabelStyle::FractionBest => Ok(TickFormat::BestApproximation(self.max_denominator)),
            LabelStyle::Decimal => Ok(TickFormat::Decimal),
        }
    }

    /// Render the grid onto `page`, labeling ticks with the font registered
    /// in `doc` under `font`.
    ///
    /// A unit whose step is zero or non-finite (a zero denominator survives
    /// parsing on purpose) is rejected here with
    /// [`PdfError::DegenerateUnit`].
    pub fn render(&self, doc: &Document, font: Id<Font>, page: &mut Page) -> Result<(), PdfError> {
        let step = self.unit.value();
        if !step.is_finite() || step == 0.0 {
            return Err(PdfError::DegenerateUnit(step));
        }
        let format = self.tick_format()?;

        let bounds = page.content_box;
        let (cx, cy) = bounds.centre();
        let columns = tick_count(bounds.width() / 2.0, self.spacing);
        let rows = tick_count(bounds.height() / 2.0, self.spacing);

        page.fill_background(self.style.background);

        // grid lines, mirrored out from the centre
        let mut content = Content::new();
        self.style.grid.apply_stroke(&mut content);
        content.set_line_width(GRID_LINE_WIDTH);
        for i in 0..=columns {
            let offset = i as f32 * *self.spacing;
            content.move_to(*cx + offset, *bounds.y1);
            content.line_to(*cx + offset, *bounds.y2);
            if i > 0 {
                content.move_to(*cx - offset, *bounds.y1);
                content.line_to(*cx - offset, *bounds.y2);
            }
        }
        for j in 0..=rows {
            let offset = j as f32 * *self.spacing;
            content.move_to(*bounds.x1, *cy + offset);
            content.line_to(*bounds.x2, *cy + offset);
            if j > 0 {
                content.move_to(*bounds.x1, *cy - offset);
                content.line_to(*bounds.x2, *cy - offset);
            }
        }
        content.stroke();
        page.add_content(content);

        // axes, arrowheads, and tick marks
        let mut content = Content::new();
        self.style.axes.apply_stroke(&mut content);
        content.set_line_width(AXIS_LINE_WIDTH);
        content.move_to(*cx, *bounds.y1);
        content.line_to(*cx, *bounds.y2);
        content.move_to(*bounds.x1, *cy);
        content.line_to(*bounds.x2, *cy);

        content.move_to(*cx, *bounds.y2);
        content.line_to(*cx - ARROW_HALF_WIDTH, *bounds.y2 - ARROW_LENGTH);
        content.move_to(*cx, *bounds.y2);
        content.line_to(*cx + ARROW_HALF_WIDTH, *bounds.y2 - ARROW_LENGTH);
        content.move_to(*bounds.x2, *cy);
        content.line_to(*bounds.x2 - ARROW_LENGTH, *cy + ARROW_HALF_WIDTH);
        content.move_to(*bounds.x2, *cy);
        content.line_to(*bounds.x2 - ARROW_LENGTH, *cy - ARROW_HALF_WIDTH);

        for i in 1..=columns {
            let offset = i as f32 * *self.spacing;
            for x in [*cx + offset, *cx - offset] {
                content.move_to(x, *cy - TICK_HALF);
                content.line_to(x, *cy + TICK_HALF);
            }
        }
        for j in 1..=rows {
            let offset = j as f32 * *self.spacing;
            for y in [*cy + offset, *cy - offset] {
                content.move_to(*cx - TICK_HALF, y);
                content.line_to(*cx + TICK_HALF, y);
            }
        }
        content.stroke();
        page.add_content(content);

        // tick labels, skipping the origin: x labels centred below the
        // x-axis, y labels to the right of the y-axis
        let face = &doc.fonts[font];
        for i in 1..=columns {
            let offset = i as f32 * *self.spacing;
            for (x, value) in [
                (*cx + offset, i as f64 * step),
                (*cx - offset, -(i as f64) * step),
            ] {
                let label = format_tick(value, format);
                let width = face.text_width(&label, TICK_FONT_SIZE);
                page.add_span(SpanLayout {
                    text: label,
                    font: SpanFont {
                        id: font,
                        size: TICK_FONT_SIZE,
                    },
                    colour: self.style.labels,
                    coords: (Pt(x) - width / 2.0, cy - Pt(12.0)),
                });
            }
        }
        for j in 1..=rows {
            let offset = j as f32 * *self.spacing;
            for (y, value) in [
                (*cy + offset, j as f64 * step),
                (*cy - offset, -(j as f64) * step),
            ] {
                let label = format_tick(value, format);
                page.add_span(SpanLayout {
                    text: label,
                    font: SpanFont {
                        id: font,
                        size: TICK_FONT_SIZE,
                    },
                    colour: self.style.labels,
                    coords: (cx + Pt(5.0), Pt(y) - Pt(2.5)),
                });
            }
        }

        // axis letters near the arrowheads
        page.add_span(SpanLayout {
            text: "x".to_string(),
            font: SpanFont {
                id: font,
                size: AXIS_LETTER_SIZE,
            },
            colour: self.style.labels,
            coords: (bounds.x2 - Pt(15.0), cy - Pt(20.0)),
        });
        page.add_span(SpanLayout {
            text: "y".to_string(),
            font: SpanFont {
                id: font,
                size: AXIS_LETTER_SIZE,
            },
            colour: self.style.labels,
            coords: (cx + Pt(10.0), bounds.y2 - Pt(15.0)),
        });

        if self.legend {
            place_corner_note(
                page,
                &format!("axis unit = {}", self.unit),
                (font, face),
                LEGEND_FONT_SIZE,
                self.style.labels,
            );
        }
        if let Some(header) = &self.header {
            place_header(page, header, (font, face), CAPTION_FONT_SIZE, self.style.labels);
        }
        if let Some(footer) = &self.footer {
            place_footer(page, footer, (font, face), CAPTION_FONT_SIZE, self.style.labels);
        }

        debug!(columns, rows, step, "rendered grid");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::page::PageContents;
    use crate::pagesize;
    use crate::parse_unit;

    fn rendered_labels(config: &GridConfig) -> Vec<(String, (Pt, Pt))> {
        let mut doc = Document::default();
        let font = doc.add_font(Font::Helvetica);
        let mut page = Page::new(pagesize::SQUARE, Some(Margins::all(Pt(50.0))));
        config.render(&doc, font, &mut page).expect("grid renders");
        page.contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => {
                    spans.first().map(|s| (s.text.clone(), s.coords))
                }
                PageContents::Raw(_) => None,
            })
            .collect()
    }

    #[test]
    fn counts_ticks_between_centre_and_edge() {
        assert_eq!(tick_count(Pt(200.0), Pt(28.35)), 7);
        assert_eq!(tick_count(Pt(200.0), Pt(200.0)), 1);
        assert_eq!(tick_count(Pt(199.0), Pt(200.0)), 0);
        assert_eq!(tick_count(Pt(200.0), Pt(0.0)), 0);
        assert_eq!(tick_count(Pt(200.0), Pt(-5.0)), 0);
    }

    #[test]
    fn origin_is_never_labeled() {
        let config = GridConfig {
            spacing: Pt(50.0),
            unit: parse_unit("1"),
            labels: LabelStyle::Decimal,
            ..GridConfig::default()
        };
        let labels = rendered_labels(&config);
        assert!(!labels.is_empty());
        assert!(labels.iter().all(|(text, _)| text != "0.00"));
    }

    #[test]
    fn labels_mirror_about_the_centre() {
        let config = GridConfig {
            spacing: Pt(100.0),
            unit: parse_unit("1/2"),
            labels: LabelStyle::FractionFixed,
            ..GridConfig::default()
        };
        let labels = rendered_labels(&config);
        // square page, 200pt half-extent, 100pt spacing: 2 ticks per side
        // per axis, plus the two axis letters
        let texts: Vec<&str> = labels.iter().map(|(t, _)| t.as_str()).collect();
        for expected in ["1/2", "-1/2", "1", "-1"] {
            assert_eq!(
                texts.iter().filter(|&&t| t == expected).count(),
                2,
                "one {expected} per axis"
            );
        }
        assert!(texts.contains(&"x"));
        assert!(texts.contains(&"y"));
    }

    #[test]
    fn degenerate_unit_is_rejected() {
        let config = GridConfig {
            unit: parse_unit("1/0"),
            ..GridConfig::default()
        };
        let mut doc = Document::default();
        let font = doc.add_font(Font::Helvetica);
        let mut page = Page::new(pagesize::SQUARE, None);
        match config.render(&doc, font, &mut page) {
            Err(PdfError::DegenerateUnit(step)) => assert!(step.is_infinite()),
            other => panic!("expected DegenerateUnit, got {other:?}"),
        }
    }

    #[test]
    fn fixed_labels_need_an_integer_denominator() {
        let config = GridConfig {
            unit: parse_unit("1/-2"),
            labels: LabelStyle::FractionFixed,
            ..GridConfig::default()
        };
        let mut doc = Document::default();
        let font = doc.add_font(Font::Helvetica);
        let mut page = Page::new(pagesize::SQUARE, None);
        assert!(matches!(
            config.render(&doc, font, &mut page),
            Err(PdfError::DegenerateUnit(_))
        ));
    }

    #[test]
    fn legend_and_captions_are_optional() {
        let config = GridConfig {
            spacing: Pt(100.0),
            legend: true,
            header: Some("Worksheet".to_string()),
            footer: Some("page 1".to_string()),
            ..GridConfig::default()
        };
        let labels = rendered_labels(&config);
        let texts: Vec<&str> = labels.iter().map(|(t, _)| t.as_str()).collect();
        assert!(texts.contains(&"axis unit = 1"));
        assert!(texts.contains(&"Worksheet"));
        assert!(texts.contains(&"page 1"));
    }
}
