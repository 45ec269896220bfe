//! Shared content-stream rendering for pages.

use crate::colour::Colour;
use crate::page::{PageContents, SpanFont, SpanLayout};
use std::io::Write;

/// Renders page contents to a PDF content stream, converting high-level
/// content items into low-level PDF operators.
///
/// Text spans are written as literal WinAnsi strings; the standard-14 faces
/// need no glyph-id mapping.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans)?;
            }
            PageContents::Raw(c) => {
                write!(&mut content, "q\n")?;
                content.write_all(c.as_slice())?;
                write!(&mut content, "\nQ\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
) -> Result<(), std::io::Error> {
    if spans.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;

    // unwrap is safe, as we know spans isn't empty
    let mut current_font: SpanFont = spans.first().unwrap().font;
    let mut current_colour: Colour = spans.first().unwrap().colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        *current_font.size
    )?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                *current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", *span.coords.0, *span.coords.1)?;
        write!(content, "(")?;
        content.write_all(escape_text(&span.text).as_slice())?;
        write!(content, ") Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

/// Escape a string for inclusion in a PDF literal string. Characters outside
/// the Latin-1 range of WinAnsi are replaced with `?`.
fn escape_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                bytes.push(b'\\');
                bytes.push(ch as u8);
            }
            ch if (ch as u32) <= 0xff => bytes.push(ch as u8),
            _ => bytes.push(b'?'),
        }
    }
    bytes
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}
