use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    /// Blend over white; `alpha` is this color's share (0.0 = white, 1.0 = unchanged).
    pub fn tint(self, alpha: f32) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |c: u8| (255.0 - (255.0 - c as f32) * a).round() as u8;
        Self([mix(self.0[0]), mix(self.0[1]), mix(self.0[2])])
    }

    pub(crate) fn unit(self) -> (f32, f32, f32) {
        let [r, g, b] = self.0;
        (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// Rendering treatment of a section body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Text,
    Callout,
    Code,
    Checklist,
    Example,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Text,
        SectionKind::Callout,
        SectionKind::Code,
        SectionKind::Checklist,
        SectionKind::Example,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::Callout => "callout",
            SectionKind::Code => "code",
            SectionKind::Checklist => "checklist",
            SectionKind::Example => "example",
        }
    }
}

impl FromStr for SectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownSectionKind(s.to_string()))
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String, // empty = no heading
    pub content: String,
    pub kind: SectionKind,
    pub color: Option<Color>, // accent override for heading and box
}

impl Section {
    pub fn new(kind: SectionKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A table of contents line. The page number is taken on trust.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    pub page: u32,
}

impl TocEntry {
    pub fn new(title: impl Into<String>, page: u32) -> Self {
        Self {
            title: title.into(),
            page,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Margins {
    pub const fn all(pt: f32) -> Self {
        Self {
            top: pt,
            bottom: pt,
            left: pt,
            right: pt,
        }
    }
}

/// Page size and margins, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    /// US Letter with 0.75" margins.
    pub const fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margins: Margins::all(54.0),
        }
    }

    pub const fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margins: Margins::all(54.0),
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub light_gray: Color,
    pub dark_gray: Color,
    pub code_fill: Color,
    pub code_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x25, 0x63, 0xEB),
            secondary: Color::rgb(0x10, 0xB9, 0x81),
            text: Color::rgb(0x37, 0x41, 0x51),
            light_gray: Color::rgb(0xF9, 0xFA, 0xFB),
            dark_gray: Color::rgb(0x6B, 0x72, 0x80),
            code_fill: Color::rgb(0xF8, 0xF9, 0xFA),
            code_text: Color::rgb(0x2D, 0x37, 0x48),
        }
    }
}

/// Font sizes in points and line-height multipliers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub title_size: f32,
    pub heading_size: f32,
    pub subheading_size: f32,
    pub body_size: f32,
    pub code_size: f32,
    pub title_leading: f32,
    pub heading_leading: f32,
    pub body_leading: f32,
    pub code_leading: f32,
}

impl Typography {
    pub fn title_line(&self) -> f32 {
        self.title_size * self.title_leading
    }

    pub fn heading_line(&self) -> f32 {
        self.heading_size * self.heading_leading
    }

    pub fn subheading_line(&self) -> f32 {
        self.subheading_size * self.body_leading
    }

    pub fn body_line(&self) -> f32 {
        self.body_size * self.body_leading
    }

    pub fn code_line(&self) -> f32 {
        self.code_size * self.code_leading
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_size: 24.0,
            heading_size: 18.0,
            subheading_size: 14.0,
            body_size: 11.0,
            code_size: 10.0,
            title_leading: 1.2,
            heading_leading: 1.3,
            body_leading: 1.4,
            code_leading: 1.2,
        }
    }
}

/// Text stamped into every page header and footer.
#[derive(Clone, Debug, PartialEq)]
pub struct Brand {
    pub site_name: String,
    pub site_url: String,
    pub copyright_holder: String,
    pub caption: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            site_name: "The Art of the Prompt".into(),
            site_url: "PromptLabBook.com".into(),
            copyright_holder: "Eric Keller".into(),
            caption: "Professional AI Communication Guide".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentOptions {
    pub geometry: PageGeometry,
    pub palette: Palette,
    pub typography: Typography,
    pub brand: Brand,
    /// The only clock input: stamps the footer year and the PDF creation date.
    pub generated_on: NaiveDate,
}

impl DocumentOptions {
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            geometry: PageGeometry::default(),
            palette: Palette::default(),
            typography: Typography::default(),
            brand: Brand::default(),
            generated_on,
        }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}
