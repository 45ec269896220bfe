use crate::PdfError;
use pdf_writer::Content;
use std::str::FromStr;

/// A colour, expressed in RGB, CMYK, or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a colour from an HTML-style hex triplet such as `#555555`
    /// (with or without the leading `#`).
    pub fn from_hex(hex: &str) -> Result<Colour, PdfError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PdfError::InvalidColour(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| PdfError::InvalidColour(hex.to_string()))?;
        Ok(Colour::new_rgb_bytes(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Set this colour as the stroke colour of a content stream
    pub fn apply_stroke(&self, content: &mut Content) {
        match *self {
            Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_stroke_gray(g),
        };
    }

    /// Set this colour as the fill colour of a content stream
    pub fn apply_fill(&self, content: &mut Content) {
        match *self {
            Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_fill_gray(g),
        };
    }
}

impl FromStr for Colour {
    type Err = PdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::from_hex(s)
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::RGB {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    /// The mid-grey used for grid lines in the default dark theme
    pub const GRID_GREY: Colour = Colour::RGB {
        r: 1.0 / 3.0,
        g: 1.0 / 3.0,
        b: 1.0 / 3.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_triplets() {
        assert_eq!(
            Colour::from_hex("#ff0000").unwrap(),
            Colour::new_rgb(1.0, 0.0, 0.0)
        );
        assert_eq!(
            Colour::from_hex("000000").unwrap(),
            Colour::new_rgb(0.0, 0.0, 0.0)
        );
        let grey = Colour::from_hex("#555555").unwrap();
        match grey {
            Colour::RGB { r, g, b } => {
                assert!((r - 0x55 as f32 / 255.0).abs() < 1e-6);
                assert_eq!(r, g);
                assert_eq!(g, b);
            }
            _ => panic!("expected RGB"),
        }
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Colour::from_hex("#55").is_err());
        assert!(Colour::from_hex("not-a-colour").is_err());
        assert!(Colour::from_hex("#gggggg").is_err());
    }
}
