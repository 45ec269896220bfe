use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PdfError;
use id_arena::{Arena, Id};
use pdf_writer::{Content, Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of text, positioned absolutely on the page by its baseline
/// start point
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    /// Positioned text spans
    Text(Vec<SpanLayout>),
    /// A raw content stream, typically built with [`pdf_writer::Content`]
    Raw(Vec<u8>),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The page contents, rendered in insertion order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new page of the given size. If margins are supplied, the
    /// page's content box is inset by them; drawing helpers keep within the
    /// content box while the background covers the full media box.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Append a raw content stream built with [`pdf_writer::Content`]
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(PageContents::Raw(content.finish()));
    }

    /// Flood the entire media box with a single colour. Painted in insertion
    /// order, so call this before adding any other content.
    pub fn fill_background(&mut self, colour: Colour) {
        let mut content = Content::new();
        colour.apply_fill(&mut content);
        content.rect(
            self.media_box.x1.into(),
            self.media_box.y1.into(),
            self.media_box.width().into(),
            self.media_box.height().into(),
        );
        content.fill_nonzero();
        self.add_content(content);
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PdfError> {
        let id = refs.get(RefType::Page(page_index)).expect("page ref was pre-generated");
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree).expect("page tree ref exists"));

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", i.index()).as_bytes()),
                refs.get(RefType::Font(i.index())).expect("font refs are written first"),
            );
        }
        resource_fonts.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
