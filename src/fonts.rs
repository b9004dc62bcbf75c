use pdf_writer::{Name, Pdf, Ref};

/// The three standard (non-embedded) PDF fonts the layout engine draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Font {
    Regular,
    Bold,
    Mono,
}

impl Font {
    pub(crate) const ALL: [Font; 3] = [Font::Regular, Font::Bold, Font::Mono];

    /// Resource name used inside content streams.
    pub(crate) fn pdf_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Mono => "F3",
        }
    }

    fn base_font(self) -> &'static [u8] {
        match self {
            Font::Regular => b"Helvetica",
            Font::Bold => b"Helvetica-Bold",
            Font::Mono => b"Courier",
        }
    }

    /// Width of a single character in 1000-units. Characters without a
    /// WinAnsi code are dropped by the encoder and therefore measure zero.
    pub(crate) fn char_width_1000(self, ch: char) -> f32 {
        let byte = char_to_winansi(ch);
        if byte < 32 {
            return 0.0;
        }
        match self {
            Font::Mono => 600.0,
            Font::Regular => latin_width(byte, &HELVETICA_ASCII),
            Font::Bold => latin_width(byte, &HELVETICA_BOLD_ASCII),
        }
    }

    pub(crate) fn text_width(self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width_1000(ch) * font_size / 1000.0)
            .sum()
    }
}

/// Helvetica advance widths for ASCII 32..=126.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp ../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold advance widths for ASCII 32..=126.
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn latin_width(byte: u8, ascii: &[u16; 95]) -> f32 {
    match byte {
        32..=126 => ascii[(byte - 32) as usize] as f32,
        0x85 | 0x89 | 0x97 | 0x99 => 1000.0, // ellipsis, per mille, em dash, trademark
        0x91 | 0x92 | 0x82 => 222.0,
        0x93 | 0x94 | 0x84 => 333.0,
        0x95 => 350.0, // bullet
        0xA0 => 278.0,
        0xA9 | 0xAE => 737.0,
        _ => 556.0,
    }
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
pub(crate) fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95, // bullet
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Control characters and characters outside the code page are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    let mut dropped = 0usize;
    let bytes: Vec<u8> = s
        .chars()
        .filter_map(|c| match char_to_winansi(c) {
            0 => {
                if !c.is_control() {
                    dropped += 1;
                }
                None
            }
            b => Some(b),
        })
        .collect();
    if dropped > 0 {
        log::debug!("to_winansi_bytes: dropped {dropped} unmappable char(s) from {s:?}");
    }
    bytes
}

/// Write the font dictionaries and return their references in `Font::ALL` order.
pub(crate) fn register_fonts(pdf: &mut Pdf, alloc: &mut impl FnMut() -> Ref) -> Vec<(Font, Ref)> {
    Font::ALL
        .iter()
        .map(|&font| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(font.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            (font, font_ref)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmappable_chars_are_dropped() {
        assert_eq!(to_winansi_bytes("A\u{1F4A1}B"), b"AB");
        assert_eq!(to_winansi_bytes("\u{2022} \u{a9}"), vec![0x95, b' ', 0xA9]);
        assert_eq!(Font::Regular.text_width("\u{1F4A1}", 11.0), 0.0);
    }

    #[test]
    fn courier_is_fixed_pitch() {
        assert_eq!(Font::Mono.text_width("iiii", 10.0), Font::Mono.text_width("WWWW", 10.0));
        assert!(Font::Regular.text_width("iiii", 10.0) < Font::Regular.text_width("WWWW", 10.0));
        assert!(Font::Bold.text_width("Guide", 12.0) > Font::Regular.text_width("Guide", 12.0));
    }
}
